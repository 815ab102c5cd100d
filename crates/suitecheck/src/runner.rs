//! Suite runner - execute discovered test methods

use crate::config::{RunnerConfig, DEFAULT_PREFIX};
use crate::host::TestContext;
use crate::suite::{discover, Suite};

/// What a single [`SuiteRunner::run`] call did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteSummary {
    /// Tests run, in execution order
    pub ran: Vec<&'static str>,
    /// Methods that did not match the naming predicate
    pub skipped: Vec<&'static str>,
    /// Tests that passed
    pub passed: usize,
    /// Tests that failed
    pub failed: usize,
}

impl SuiteSummary {
    /// Check if every test passed
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Suite runner with configuration
#[derive(Debug, Clone)]
pub struct SuiteRunner {
    /// Name prefix selecting test methods
    prefix: String,
}

impl Default for SuiteRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl SuiteRunner {
    /// Create a runner selecting methods prefixed with `Test`
    pub fn new() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// Create a runner from loaded configuration
    pub fn from_config(config: &RunnerConfig) -> Self {
        Self::new().with_prefix(&config.prefix)
    }

    /// Select test methods by a different name prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Name prefix in effect
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Run every matching method of `suite` as a sub-test of `t`
    ///
    /// Tests run one at a time in declaration order. Setup runs right
    /// before each test and teardown right after it, even when the test
    /// failed. A failing test never stops the ones after it.
    pub fn run<S: Suite>(&self, t: &TestContext, suite: &mut S) -> SuiteSummary {
        let discovered = discover::<S>(&self.prefix);
        tracing::debug!(
            suite = t.name(),
            tests = discovered.len(),
            skipped = discovered.skipped.len(),
            prefix = %self.prefix,
            "running suite"
        );
        for name in &discovered.skipped {
            tracing::trace!(method = name, "not a test, skipping");
        }

        let mut summary = SuiteSummary {
            skipped: discovered.skipped,
            ..SuiteSummary::default()
        };

        for test in discovered.tests {
            if let Some(setup) = suite.as_setup() {
                tracing::trace!(test = test.name, "setup");
                setup.setup_test(t);
            }

            let passed = t.run(test.name, |sub| (test.func)(suite, sub));

            if let Some(tear_down) = suite.as_teardown() {
                tracing::trace!(test = test.name, "teardown");
                tear_down.tear_down_test(t);
            }

            summary.ran.push(test.name);
            if passed {
                summary.passed += 1;
            } else {
                summary.failed += 1;
            }
        }

        tracing::debug!(
            suite = t.name(),
            passed = summary.passed,
            failed = summary.failed,
            "suite finished"
        );
        summary
    }
}

/// Run `suite` with the default `Test` prefix
pub fn run<S: Suite>(t: &TestContext, suite: &mut S) -> SuiteSummary {
    SuiteRunner::new().run(t, suite)
}
