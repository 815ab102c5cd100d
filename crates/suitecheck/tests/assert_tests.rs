//! Assertion helper behavior, observed through a throwaway test context

use proptest::prelude::*;
use rstest::rstest;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use suitecheck::{assert, run_test, TestContext, TestRun};

fn outcome<F: FnOnce(&TestContext)>(body: F) -> TestRun {
    run_test("assertion", body)
}

#[derive(Debug, Clone, PartialEq)]
struct Point {
    x: i64,
    tags: Vec<String>,
}

#[derive(Debug)]
struct Boom;

impl fmt::Display for Boom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "boom")
    }
}

// ============================================================================
// Deep equality
// ============================================================================

#[test]
fn test_equal_compares_composites_structurally() {
    let a = Point {
        x: 1,
        tags: vec!["a".into(), "b".into()],
    };
    let b = a.clone();

    let run = outcome(|t| {
        assert!(assert::equal(t, &a, &b, ""));
        assert!(assert::equal_values(t, vec![a.clone()], vec![b.clone()], ""));
        assert!(!assert::not_equal(t, &a, &b, "same points"));
    });

    assert!(run.result.is_fail());
    assert_eq!(run.output.len(), 1);
    assert!(run.output[0].contains("unexpectedly equal: same points"));
}

#[test]
fn test_equal_on_maps() {
    let mut left = HashMap::new();
    left.insert("k", vec![1, 2]);
    let mut right = HashMap::new();
    right.insert("k", vec![1, 2]);

    let run = outcome(|t| {
        assert::equal(t, &left, &right, "");
    });
    assert!(run.result.is_pass());
}

proptest! {
    #[test]
    fn prop_equal_values_pass_equal(xs in proptest::collection::vec(any::<i32>(), 0..16), s in ".*") {
        let copy = (xs.clone(), s.clone());
        let run = outcome(|t| {
            assert::equal(t, (xs, s), copy.clone(), "");
        });
        prop_assert!(run.result.is_pass());

        let run = outcome(|t| {
            assert::not_equal(t, copy.clone(), copy.clone(), "");
        });
        prop_assert!(run.result.is_fail());
    }

    #[test]
    fn prop_unequal_values_fail_equal(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a != b);
        let run = outcome(|t| {
            assert::equal(t, vec![a], vec![b], "");
        });
        prop_assert!(run.result.is_fail());

        let run = outcome(|t| {
            assert::not_equal(t, vec![a], vec![b], "");
        });
        prop_assert!(run.result.is_pass());
    }
}

// ============================================================================
// Conditions
// ============================================================================

#[rstest]
#[case("hello world", "world", true)]
#[case("hello world", "hello", true)]
#[case("hello world", "", true)]
#[case("hello world", "xyz", false)]
#[case("", "a", false)]
fn test_contains(#[case] haystack: &str, #[case] needle: &str, #[case] passes: bool) {
    let mut returned = None;
    let run = outcome(|t| returned = Some(assert::contains(t, haystack, needle, "")));
    assert_eq!(returned, Some(passes));
    assert_eq!(run.result.is_pass(), passes);
}

#[test]
fn test_contains_message() {
    let run = outcome(|t| {
        assert::contains(t, "hello world", "xyz", "greeting");
    });
    assert!(run.output[0].ends_with("\"hello world\" doesn't contain \"xyz\": greeting"));
}

#[rstest]
#[case(true, true)]
#[case(false, false)]
fn test_true_false(#[case] cond: bool, #[case] true_passes: bool) {
    let run = outcome(|t| {
        assert::is_true(t, cond, "");
    });
    assert_eq!(run.result.is_pass(), true_passes);

    let run = outcome(|t| {
        assert::is_false(t, cond, "");
    });
    assert_eq!(run.result.is_pass(), !true_passes);
}

#[test]
fn test_assert_accepts_any_display_message() {
    let run = outcome(|t| {
        assert::assert(t, 1 + 1 == 3, 42);
    });
    assert!(run.output[0].ends_with(" assert failure: 42"));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_no_error_and_error() {
    let ok: Result<u8, Boom> = Ok(1);
    let err: Result<u8, Boom> = Err(Boom);

    let run = outcome(|t| {
        assert!(assert::no_error(t, &ok, ""));
        assert!(assert::error(t, &err, ""));
    });
    assert!(run.result.is_pass());

    let run = outcome(|t| {
        assert!(!assert::no_error(t, &err, "loading"));
        assert!(!assert::error(t, &ok, "parsing"));
    });
    assert!(run.result.is_fail());
    assert!(run.output[0].ends_with("expecting no error, got boom: loading"));
    assert!(run.output[1].ends_with("expecting an error, didn't get it: parsing"));
}

// ============================================================================
// Fatal failure and call sites
// ============================================================================

#[test]
fn test_fail_stops_the_body() {
    let mut after = false;
    let run = outcome(|t| {
        assert::fail(t, "stop here");
        #[allow(unreachable_code)]
        {
            after = true;
        }
    });
    assert!(!after);
    assert!(run.result.is_fail());
}

#[test]
fn test_failure_reports_the_assertion_line() {
    let line = line!() + 2;
    let run = outcome(|t| {
        assert::equal(t, 1, 2, "");
    });
    assert_eq!(
        run.output,
        vec![format!("assert_tests.rs:{} 1 unexpectedly not equal 2", line)]
    );
}

// ============================================================================
// Shallow equality
// ============================================================================

#[test]
fn test_check_equals_scalars_by_value() {
    let run = outcome(|t| {
        assert::check_equals(t, 7_u32, 7, "ints");
        assert::check_equals(t, "abc", "abc", "strs");
        assert::check_equals(t, String::from("x"), String::from("x"), "strings");
    });
    assert!(run.result.is_pass());
}

#[test]
fn test_check_equals_distinct_composites_report_mismatch() {
    // Identity comparison: equal contents in separate allocations differ
    let first = Rc::new(Point {
        x: 3,
        tags: Vec::new(),
    });
    let second = Rc::new(Point {
        x: 3,
        tags: Vec::new(),
    });

    let run = outcome(|t| {
        assert!(!assert::check_equals(t, first.clone(), second.clone(), "points"));
        assert!(assert::check_equals(t, first.clone(), first.clone(), "same rc"));
        assert!(assert::equal(t, &*first, &*second, "structural"));
    });

    assert!(run.result.is_fail());
    assert_eq!(run.output.len(), 1);
    assert!(run.output[0].contains("mismatch!\nactual:\nPoint { x: 3, tags: [] }"));
    assert!(run.output[0].ends_with("for points"));
}
