//! Host test-execution primitives
//!
//! The Rust harness only knows "panic means failed". Suites need more than
//! that: failures that are recorded while the body keeps going, failures
//! that stop just the current body, and named sub-tests whose outcome rolls
//! up into the parent. [`TestContext`] provides those three primitives.

use crate::config::RunnerConfig;
use crate::reporter::TestReporter;
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

/// Result of running a single test
#[derive(Debug, Clone)]
pub enum TestResult {
    /// Test passed successfully
    Pass { duration: Duration },
    /// Test failed with an error message
    Fail { error: String, duration: Duration },
}

impl TestResult {
    /// Check if this result is a pass
    pub fn is_pass(&self) -> bool {
        matches!(self, TestResult::Pass { .. })
    }

    /// Check if this result is a failure
    pub fn is_fail(&self) -> bool {
        matches!(self, TestResult::Fail { .. })
    }

    /// Get the duration of this test
    pub fn duration(&self) -> Duration {
        match self {
            TestResult::Pass { duration } => *duration,
            TestResult::Fail { duration, .. } => *duration,
        }
    }
}

/// A completed test run, including any sub-tests it spawned
#[derive(Debug, Clone)]
pub struct TestRun {
    /// Full slash-separated name (e.g. "MySuite/TestA")
    pub name: String,
    /// Result of running the test
    pub result: TestResult,
    /// Diagnostics logged while the test ran
    pub output: Vec<String>,
    /// Sub-tests in the order they ran
    pub subtests: Vec<TestRun>,
}

impl TestRun {
    /// Last path component of the name
    pub fn short_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Find a direct sub-test by its short name
    pub fn subtest(&self, name: &str) -> Option<&TestRun> {
        self.subtests.iter().find(|run| run.short_name() == name)
    }

    /// Count this run and every nested run
    pub fn total(&self) -> usize {
        1 + self.subtests.iter().map(TestRun::total).sum::<usize>()
    }

    /// Count failed runs in this tree
    pub fn failed_count(&self) -> usize {
        let own = usize::from(self.result.is_fail());
        own + self.subtests.iter().map(TestRun::failed_count).sum::<usize>()
    }
}

/// Unwind payload used by [`TestContext::fail_now`]
struct FailNow;

/// Handle to the currently running test
///
/// Not `Sync`: a context belongs to the thread running its body.
#[derive(Debug)]
pub struct TestContext {
    name: String,
    failed: Cell<bool>,
    output: RefCell<Vec<String>>,
    subtests: RefCell<Vec<TestRun>>,
}

impl TestContext {
    /// Create a fresh, passing context
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            failed: Cell::new(false),
            output: RefCell::new(Vec::new()),
            subtests: RefCell::new(Vec::new()),
        }
    }

    /// Full name of this test
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mark the test failed and keep running
    pub fn fail(&self) {
        self.failed.set(true);
    }

    /// Mark the test failed and stop the current body
    ///
    /// Unwinds to the nearest enclosing [`TestContext::run`] (or
    /// [`run_test`]). The panic hook is not invoked.
    pub fn fail_now(&self) -> ! {
        self.fail();
        panic::resume_unwind(Box::new(FailNow))
    }

    /// Whether the test has been marked failed
    pub fn failed(&self) -> bool {
        self.failed.get()
    }

    /// Print a diagnostic line and keep it for the report
    pub fn log(&self, line: impl Into<String>) {
        let line = line.into();
        println!("{}", line);
        self.output.borrow_mut().push(line);
    }

    /// Diagnostics logged so far
    pub fn output(&self) -> Vec<String> {
        self.output.borrow().clone()
    }

    /// Run `body` as a named sub-test and wait for it to finish
    ///
    /// Returns whether the sub-test passed. A failed sub-test marks this
    /// context failed too.
    pub fn run<F>(&self, name: &str, body: F) -> bool
    where
        F: FnOnce(&TestContext),
    {
        let child = TestContext::new(format!("{}/{}", self.name, name));
        tracing::trace!(test = %child.name, "sub-test started");

        let run = child.execute(body);
        let passed = run.result.is_pass();
        tracing::debug!(test = %run.name, passed, duration = ?run.result.duration(), "sub-test finished");

        if !passed {
            self.fail();
        }
        self.subtests.borrow_mut().push(run);
        passed
    }

    /// Run `body` against this context and turn it into a finished record
    fn execute<F>(self, body: F) -> TestRun
    where
        F: FnOnce(&TestContext),
    {
        let start = Instant::now();

        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| body(&self))) {
            if !payload.is::<FailNow>() {
                self.fail();
                self.output
                    .borrow_mut()
                    .push(format!("panicked: {}", panic_message(payload.as_ref())));
            }
        }

        self.finish(start.elapsed())
    }

    fn finish(self, duration: Duration) -> TestRun {
        let output = self.output.into_inner();
        let subtests = self.subtests.into_inner();

        let result = if self.failed.get() {
            let failed_subtests = subtests.iter().filter(|s| s.result.is_fail()).count();
            let error = if !output.is_empty() {
                output.join("\n")
            } else if failed_subtests > 0 {
                format!("{} sub-test(s) failed", failed_subtests)
            } else {
                "test failed".to_string()
            };
            TestResult::Fail { error, duration }
        } else {
            TestResult::Pass { duration }
        };

        TestRun {
            name: self.name,
            result,
            output,
            subtests,
        }
    }
}

/// Run `body` as a top-level test and return its record
pub fn run_test<F>(name: &str, body: F) -> TestRun
where
    F: FnOnce(&TestContext),
{
    TestContext::new(name).execute(body)
}

/// Run `body` as a top-level test from inside a `#[test]` function
///
/// Prints the report (styled per the `SUITECHECK_*` environment overrides)
/// and panics if anything failed, so the Rust harness sees the outcome.
pub fn check<F>(name: &str, body: F)
where
    F: FnOnce(&TestContext),
{
    let run = run_test(name, body);

    let config = RunnerConfig::default()
        .apply_env_overrides()
        .unwrap_or_default();
    TestReporter::from_config(&config).report(std::slice::from_ref(&run));

    if run.result.is_fail() {
        panic!(
            "{} failed ({} of {} runs failed)",
            run.name,
            run.failed_count(),
            run.total()
        );
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
