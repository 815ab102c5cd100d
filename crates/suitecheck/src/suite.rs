//! Suite contract and test method discovery

use crate::host::TestContext;
use std::fmt;

/// Signature every suite method has
pub type MethodFn<S> = fn(&mut S, &TestContext);

/// A named method registered on a suite
pub struct TestMethod<S> {
    /// Name used for selection and as the sub-test name (e.g. "TestAddition")
    pub name: &'static str,
    /// Method invoked with the suite and the sub-test context
    pub func: MethodFn<S>,
}

impl<S> TestMethod<S> {
    pub fn new(name: &'static str, func: MethodFn<S>) -> Self {
        Self { name, func }
    }
}

impl<S> Clone for TestMethod<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for TestMethod<S> {}

impl<S> fmt::Debug for TestMethod<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestMethod").field("name", &self.name).finish()
    }
}

/// Optional hook run before each test method
pub trait SetupTest {
    fn setup_test(&mut self, t: &TestContext);
}

/// Optional hook run after each test method, whether or not it failed
pub trait TearDownTest {
    fn tear_down_test(&mut self, t: &TestContext);
}

/// A value bundling test methods and optional per-test hooks
///
/// `methods` lists every method the suite exposes, tests and helpers
/// alike, in declaration order; the runner picks the tests by name.
///
/// ```
/// use suitecheck::{assert, test_methods, SetupTest, Suite, TestContext, TestMethod};
///
/// #[derive(Default)]
/// struct Counter {
///     value: i32,
/// }
///
/// impl Counter {
///     fn test_increment(&mut self, t: &TestContext) {
///         self.value += 1;
///         assert::equal(t, self.value, 1, "fresh counter");
///     }
/// }
///
/// impl SetupTest for Counter {
///     fn setup_test(&mut self, _t: &TestContext) {
///         self.value = 0;
///     }
/// }
///
/// impl Suite for Counter {
///     fn methods() -> Vec<TestMethod<Self>> {
///         test_methods!["TestIncrement" => Self::test_increment]
///     }
///
///     fn as_setup(&mut self) -> Option<&mut dyn SetupTest> {
///         Some(self)
///     }
/// }
///
/// suitecheck::check("Counter", |t| {
///     suitecheck::run(t, &mut Counter::default());
/// });
/// ```
pub trait Suite {
    /// Every method on the suite, in declaration order
    fn methods() -> Vec<TestMethod<Self>>
    where
        Self: Sized;

    /// The setup hook, if this suite has one
    fn as_setup(&mut self) -> Option<&mut dyn SetupTest> {
        None
    }

    /// The teardown hook, if this suite has one
    fn as_teardown(&mut self) -> Option<&mut dyn TearDownTest> {
        None
    }
}

/// Methods of one suite split by the naming predicate
#[derive(Debug)]
pub struct Discovered<S> {
    /// Methods to run as tests, in declaration order
    pub tests: Vec<TestMethod<S>>,
    /// Names of methods that did not match
    pub skipped: Vec<&'static str>,
}

impl<S> Discovered<S> {
    /// Check if there are any tests to run
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Get count of tests
    pub fn len(&self) -> usize {
        self.tests.len()
    }
}

/// Enumerate `S`'s methods and keep those whose name starts with `prefix`
pub fn discover<S: Suite>(prefix: &str) -> Discovered<S> {
    let (tests, skipped): (Vec<_>, Vec<_>) = S::methods()
        .into_iter()
        .partition(|method| is_test_name(method.name, prefix));

    Discovered {
        tests,
        skipped: skipped.into_iter().map(|method| method.name).collect(),
    }
}

/// The "is a test" predicate
pub fn is_test_name(name: &str, prefix: &str) -> bool {
    name.starts_with(prefix)
}

/// Build a `Vec<TestMethod<_>>` from `"Name" => path` pairs
///
/// ```ignore
/// test_methods![
///     "TestParse" => Self::test_parse,
///     "helper" => Self::helper,
/// ]
/// ```
#[macro_export]
macro_rules! test_methods {
    ($($name:literal => $func:path),* $(,)?) => {
        vec![$($crate::TestMethod::new($name, $func)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Plain;

    impl Plain {
        fn a(&mut self, _t: &TestContext) {}
        fn b(&mut self, _t: &TestContext) {}
    }

    impl Suite for Plain {
        fn methods() -> Vec<TestMethod<Self>> {
            test_methods![
                "TestZeta" => Self::a,
                "Helper" => Self::b,
                "TestAlpha" => Self::a,
                "test_lower" => Self::b,
            ]
        }
    }

    #[rstest]
    #[case("TestA", true)]
    #[case("Test", true)]
    #[case("Testing", true)]
    #[case("Helper", false)]
    #[case("test_a", false)]
    #[case("ATest", false)]
    #[case("", false)]
    fn test_is_test_name(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_test_name(name, "Test"), expected);
    }

    #[test]
    fn test_discover_keeps_declaration_order() {
        let found = discover::<Plain>("Test");
        let names: Vec<_> = found.tests.iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["TestZeta", "TestAlpha"]);
        assert_eq!(found.skipped, vec!["Helper", "test_lower"]);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_discover_with_custom_prefix() {
        let found = discover::<Plain>("test_");
        assert_eq!(found.len(), 1);
        assert_eq!(found.tests[0].name, "test_lower");
    }

    #[test]
    fn test_default_capabilities_are_absent() {
        let mut plain = Plain;
        assert!(plain.as_setup().is_none());
        assert!(plain.as_teardown().is_none());
    }

    #[test]
    fn test_method_debug_shows_name() {
        let method = TestMethod::<Plain>::new("TestX", Plain::a);
        assert_eq!(format!("{:?}", method), "TestMethod { name: \"TestX\" }");
    }
}
