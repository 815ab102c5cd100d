//! Test reporter - display suite results

use crate::config::RunnerConfig;
use crate::host::{TestResult, TestRun};
use colored::*;
use std::io::{self, Write};
use std::time::Duration;

/// Test reporter with output configuration
pub struct TestReporter {
    /// Show one line per test instead of progress dots
    verbose: bool,
    /// Disable colored output
    no_color: bool,
}

impl Default for TestReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl TestReporter {
    /// Create a new test reporter
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            no_color: false,
        }
    }

    /// Create a reporter honoring the `verbose` and `no_color` settings
    pub fn from_config(config: &RunnerConfig) -> Self {
        Self::new(config.verbose).with_no_color(config.no_color)
    }

    /// Disable colored output
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Report test results
    pub fn report(&self, runs: &[TestRun]) {
        if self.no_color {
            colored::control::set_override(false);
        }

        for run in runs {
            self.print_tree(run, 0);
        }

        // Dots need a newline before the summary
        if !self.verbose && !runs.is_empty() {
            println!();
        }

        println!();
        self.print_summary(runs);
        self.print_failures(runs);

        if self.no_color {
            colored::control::unset_override();
        }
    }

    fn print_tree(&self, run: &TestRun, depth: usize) {
        self.print_test_result(run, depth);
        for sub in &run.subtests {
            self.print_tree(sub, depth + 1);
        }
    }

    /// Print a single test result
    fn print_test_result(&self, run: &TestRun, depth: usize) {
        let indent = "  ".repeat(depth);
        match &run.result {
            TestResult::Pass { duration } => {
                if self.verbose {
                    println!(
                        "{}{} {} ({:.2?})",
                        indent,
                        "PASS".green().bold(),
                        run.name,
                        duration
                    );
                } else {
                    print!("{}", ".".green());
                    let _ = io::stdout().flush();
                }
            }
            TestResult::Fail { duration, .. } => {
                if self.verbose {
                    println!(
                        "{}{} {} ({:.2?})",
                        indent,
                        "FAIL".red().bold(),
                        run.name,
                        duration
                    );
                } else {
                    print!("{}", "F".red().bold());
                    let _ = io::stdout().flush();
                }
            }
        }
    }

    /// Print summary statistics
    fn print_summary(&self, runs: &[TestRun]) {
        let (total, failed) = summarize(runs);
        let passed = total - failed;

        // Sub-test time is already included in the parent's duration
        let total_duration: Duration = runs.iter().map(|r| r.result.duration()).sum();

        println!("{}", "─".repeat(50));

        let status = if failed > 0 {
            "FAILED".red().bold()
        } else {
            "PASSED".green().bold()
        };

        println!(
            "Test result: {} | {} total, {} passed, {} failed",
            status,
            total.to_string().bold(),
            passed.to_string().green().bold(),
            if failed > 0 {
                failed.to_string().red().bold()
            } else {
                failed.to_string().normal()
            }
        );
        println!("Time: {:.2?}", total_duration);
    }

    /// Print details of failed tests that logged diagnostics
    fn print_failures(&self, runs: &[TestRun]) {
        let mut failures = Vec::new();
        for run in runs {
            collect_failures(run, &mut failures);
        }

        if failures.is_empty() {
            return;
        }

        println!();
        println!("{}", "Failures:".red().bold());
        println!();

        for run in failures {
            println!("  {} {}", "●".red(), run.name.bold());
            for line in &run.output {
                println!("      {}", line.dimmed());
            }
            println!();
        }
    }
}

/// Count (total, failed) runs across all trees
fn summarize(runs: &[TestRun]) -> (usize, usize) {
    runs.iter().fold((0, 0), |(total, failed), run| {
        (total + run.total(), failed + run.failed_count())
    })
}

/// Failed runs that carry their own diagnostics, depth-first
fn collect_failures<'a>(run: &'a TestRun, out: &mut Vec<&'a TestRun>) {
    if run.result.is_fail() && !run.output.is_empty() {
        out.push(run);
    }
    for sub in &run.subtests {
        collect_failures(sub, out);
    }
}
