//! Assertion helpers
//!
//! Every helper takes the current [`TestContext`], the values under test and
//! a free-form message. On success nothing happens. On failure a diagnostic
//! prefixed with the caller's `file:line` is logged and the test is marked
//! failed.
//!
//! # API
//!
//! ## Equality (deep, via `PartialEq`)
//! - `equal(t, actual, expected, msg)` / `equal_values(...)`
//! - `not_equal(t, a, b, msg)`
//!
//! ## Conditions
//! - `is_true(t, cond, msg)` / `is_false(t, cond, msg)`
//! - `assert(t, cond, msg)`
//! - `contains(t, haystack, needle, msg)`
//!
//! ## Errors
//! - `no_error(t, &result, msg)` / `error(t, &result, msg)`
//!
//! ## Shallow equality
//! - `check_equals(t, actual, expected, msg)` — see [`ShallowEq`]
//!
//! ## Fatal
//! - `fail(t, msg)` — stops the current test body
//!
//! All helpers except `fail` return whether the check passed.

use crate::caller::CallSite;
use crate::host::TestContext;
use std::fmt::{Debug, Display};
use std::rc::Rc;
use std::sync::Arc;

// ============================================================================
// Internal helpers
// ============================================================================

/// Log `message` at the caller's location and mark the test failed
#[track_caller]
pub fn errorf(t: &TestContext, message: impl Display) {
    let site = CallSite::capture();
    tracing::debug!(test = t.name(), %site, "assertion failed");
    t.log(format!("{} {}", site, message));
    t.fail();
}

/// Append the caller's message, if any
fn with_msg(base: String, msg: &str) -> String {
    if msg.is_empty() {
        base
    } else {
        format!("{}: {}", base, msg)
    }
}

// ============================================================================
// Equality assertions
// ============================================================================

/// Checks that `actual` and `expected` are deeply equal
#[track_caller]
pub fn equal_values<A, B>(t: &TestContext, actual: A, expected: B, msg: &str) -> bool
where
    A: PartialEq<B> + Debug,
    B: Debug,
{
    if actual != expected {
        errorf(
            t,
            with_msg(
                format!("{:?} unexpectedly not equal {:?}", actual, expected),
                msg,
            ),
        );
        return false;
    }
    true
}

/// Checks that `actual` and `expected` are deeply equal
///
/// Same as [`equal_values`].
#[track_caller]
pub fn equal<A, B>(t: &TestContext, actual: A, expected: B, msg: &str) -> bool
where
    A: PartialEq<B> + Debug,
    B: Debug,
{
    equal_values(t, actual, expected, msg)
}

/// Checks that `a` and `b` are not deeply equal
#[track_caller]
pub fn not_equal<A, B>(t: &TestContext, a: A, b: B, msg: &str) -> bool
where
    A: PartialEq<B> + Debug,
    B: Debug,
{
    if a == b {
        errorf(t, with_msg(format!("{:?} unexpectedly equal", a), msg));
        return false;
    }
    true
}

// ============================================================================
// Condition assertions
// ============================================================================

/// Checks that `cond` is true
#[track_caller]
pub fn is_true(t: &TestContext, cond: bool, msg: &str) -> bool {
    if !cond {
        errorf(t, with_msg("expecting true, didn't".to_string(), msg));
    }
    cond
}

/// Checks that `cond` is false
#[track_caller]
pub fn is_false(t: &TestContext, cond: bool, msg: &str) -> bool {
    if cond {
        errorf(t, with_msg("expecting false, didn't".to_string(), msg));
    }
    !cond
}

/// Same check as [`is_true`], with an arbitrary displayable message
#[track_caller]
pub fn assert(t: &TestContext, cond: bool, msg: impl Display) -> bool {
    if !cond {
        errorf(t, format!("assert failure: {}", msg));
    }
    cond
}

/// Checks that `needle` occurs in `haystack`
#[track_caller]
pub fn contains(t: &TestContext, haystack: &str, needle: &str, msg: &str) -> bool {
    if !haystack.contains(needle) {
        errorf(
            t,
            with_msg(format!("{:?} doesn't contain {:?}", haystack, needle), msg),
        );
        return false;
    }
    true
}

// ============================================================================
// Error assertions
// ============================================================================

/// Checks that `result` is `Ok`
#[track_caller]
pub fn no_error<T, E: Display>(t: &TestContext, result: &Result<T, E>, msg: &str) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            errorf(t, with_msg(format!("expecting no error, got {}", e), msg));
            false
        }
    }
}

/// Checks that `result` is `Err`
#[track_caller]
pub fn error<T, E>(t: &TestContext, result: &Result<T, E>, msg: &str) -> bool {
    if result.is_ok() {
        errorf(
            t,
            with_msg("expecting an error, didn't get it".to_string(), msg),
        );
        return false;
    }
    true
}

// ============================================================================
// Fatal
// ============================================================================

/// Fails the test and stops the current body
#[track_caller]
pub fn fail(t: &TestContext, msg: &str) -> ! {
    errorf(t, msg);
    t.fail_now()
}

// ============================================================================
// Shallow equality
// ============================================================================

/// Identity-style equality used by [`check_equals`]
///
/// Scalars and strings compare by value. Owning and shared pointers
/// (`Box`, `Rc`, `Arc`) compare by address, so two structurally equal but
/// separately allocated values are *not* shallow-equal. Use [`equal`] when
/// structure is what matters.
pub trait ShallowEq {
    fn shallow_eq(&self, other: &Self) -> bool;
}

macro_rules! shallow_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ShallowEq for $ty {
                fn shallow_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

shallow_by_value!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    str, String,
);

impl<T: ShallowEq + ?Sized> ShallowEq for &T {
    fn shallow_eq(&self, other: &Self) -> bool {
        (**self).shallow_eq(*other)
    }
}

impl<T: ShallowEq> ShallowEq for Option<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.shallow_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: ?Sized> ShallowEq for Box<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        std::ptr::eq(&**self as *const T, &**other as *const T)
    }
}

impl<T: ?Sized> ShallowEq for Rc<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> ShallowEq for Arc<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

/// Checks `actual` against `expected` with [`ShallowEq`]
///
/// Structurally equal values behind distinct pointers report a mismatch.
#[track_caller]
pub fn check_equals<T>(t: &TestContext, actual: T, expected: T, msg: impl Display) -> bool
where
    T: ShallowEq + Debug,
{
    if !actual.shallow_eq(&expected) {
        errorf(
            t,
            format!(
                "mismatch!\nactual:\n{:?}\nexpected:\n{:?}\nfor {}",
                actual, expected, msg
            ),
        );
        return false;
    }
    true
}
