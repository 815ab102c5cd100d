//! suitecheck - minimal test assertions and a suite runner
//!
//! Provides:
//! - Assertion helpers that report failures with the caller's `file:line`
//!   and keep the test running ([`assert`])
//! - A fatal [`assert::fail`] that stops only the current test body
//! - Suites: a value listing its methods, with optional per-test setup and
//!   teardown ([`Suite`], [`SetupTest`], [`TearDownTest`])
//! - A runner that executes every method named `Test*` as a sub-test, in
//!   declaration order, bracketed by the hooks ([`run`], [`SuiteRunner`])
//! - The host primitives behind all of it ([`TestContext`]) and a bridge
//!   into `#[test]` functions ([`check`])
//!
//! # Example
//!
//! ```
//! use suitecheck::{assert, test_methods, Suite, TestContext, TestMethod};
//!
//! struct Strings;
//!
//! impl Strings {
//!     fn test_contains(&mut self, t: &TestContext) {
//!         assert::contains(t, "hello world", "world", "");
//!     }
//! }
//!
//! impl Suite for Strings {
//!     fn methods() -> Vec<TestMethod<Self>> {
//!         test_methods!["TestContains" => Self::test_contains]
//!     }
//! }
//!
//! suitecheck::check("Strings", |t| {
//!     suitecheck::run(t, &mut Strings);
//! });
//! ```

pub mod assert;
pub mod caller;
pub mod config;
pub mod host;
pub mod logging;
pub mod reporter;
pub mod runner;
pub mod suite;

pub use caller::CallSite;
pub use config::{ConfigError, ConfigResult, RunnerConfig};
pub use host::{check, run_test, TestContext, TestResult, TestRun};
pub use logging::init_tracing;
pub use reporter::TestReporter;
pub use runner::{run, SuiteRunner, SuiteSummary};
pub use suite::{SetupTest, Suite, TearDownTest, TestMethod};
