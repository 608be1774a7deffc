//! Smoke check runner for `greeter check`
//!
//! ## CheckReporter Trait
//!
//! The runner uses a `CheckReporter` trait to separate reporting from
//! execution. `ConsoleReporter` is the default, line-oriented implementation.
//!
//! ## Accounting
//!
//! Every assertion increments either the passed or the failed counter. A failed
//! assertion never stops the run: all selected scenarios always execute, and the
//! exit status is decided once, from the final tally.

use std::fmt::Debug;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::GreeterConfig;

use super::commands::{EmitError, capture_greeting};
use super::scenarios::{self, Expectation, Scenario};
use super::{CliError, CliResult, ExitCode};

/// Errors that abort a check run (as opposed to failed assertions, which are counted)
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("failed to capture greeting: {0}")]
    Emit(#[from] EmitError),

    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}

// ============================================================================
// Assertions
// ============================================================================

/// Pass/fail counters for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckTally {
    pub passed: usize,
    pub failed: usize,
}

impl CheckTally {
    pub fn record(&mut self, passed: bool) {
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Result of a single assertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionOutcome {
    pub message: String,
    /// `Debug` rendering of the expected value
    pub expected: String,
    /// `Debug` rendering of the actual value
    pub actual: String,
    pub passed: bool,
}

/// Assertion primitives that count instead of panicking.
#[derive(Debug, Default)]
pub struct Assertions {
    tally: CheckTally,
}

impl Assertions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact equality.
    pub fn assert_equals<T: PartialEq + Debug>(
        &mut self,
        expected: T,
        actual: T,
        message: impl Into<String>,
    ) -> AssertionOutcome {
        let passed = expected == actual;
        self.tally.record(passed);
        AssertionOutcome {
            message: message.into(),
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
            passed,
        }
    }

    /// `condition` must be `true`; reported as an equality against `true`.
    pub fn assert_true(&mut self, condition: bool, message: impl Into<String>) -> AssertionOutcome {
        self.assert_equals(true, condition, message)
    }

    /// `haystack` must contain `needle`.
    pub fn assert_contains(&mut self, needle: &str, haystack: &str, message: impl Into<String>) -> AssertionOutcome {
        self.assert_true(haystack.contains(needle), message)
    }

    pub fn tally(&self) -> CheckTally {
        self.tally
    }
}

/// Check `output` against the scenario's expectation.
///
/// Returns one outcome per assertion (two for [`Expectation::Framed`]).
pub fn check_output(assertions: &mut Assertions, scenario: &Scenario, output: &str) -> Vec<AssertionOutcome> {
    let label = scenario.label;
    let input = scenario.describe_input();

    match scenario.expectation {
        Expectation::Exact(expected) => vec![assertions.assert_equals(
            expected,
            output,
            format!("{label}: output with {input} must be {expected:?}"),
        )],
        Expectation::Contains(needle) => vec![assertions.assert_contains(
            needle,
            output,
            format!("{label}: output with {input} must contain {needle:?}"),
        )],
        Expectation::NonEmpty => vec![assertions.assert_true(
            !output.is_empty(),
            format!("{label}: output with {input} must not be empty"),
        )],
        Expectation::Framed { prefix, suffix } => vec![
            assertions.assert_true(
                output.starts_with(prefix),
                format!("{label}: message must start with {prefix:?}"),
            ),
            assertions.assert_true(
                output.ends_with(suffix),
                format!("{label}: message must end with {suffix:?}"),
            ),
        ],
    }
}

// ============================================================================
// Check Reporter Trait
// ============================================================================

/// Summary of a check run
#[derive(Debug, Clone, Copy)]
pub struct CheckSummary {
    pub passed: usize,
    pub failed: usize,
    pub duration: Duration,
}

impl CheckSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn tally(&self) -> CheckTally {
        CheckTally {
            passed: self.passed,
            failed: self.failed,
        }
    }
}

/// Trait for reporting check results.
///
/// Implement this trait to customize the report format.
pub trait CheckReporter {
    /// Called once before the first scenario
    fn on_run_start(&mut self, scenario_count: usize) -> io::Result<()>;

    /// Called before each scenario runs (`index` is zero-based)
    fn on_scenario_start(&mut self, _index: usize, _scenario: &Scenario) -> io::Result<()> {
        Ok(())
    }

    /// Called after every assertion
    fn on_assertion(&mut self, outcome: &AssertionOutcome) -> io::Result<()>;

    /// Called when all scenarios have completed
    fn on_run_complete(&mut self, summary: &CheckSummary) -> io::Result<()>;
}

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Default line-oriented reporter
pub struct ConsoleReporter<W: Write> {
    out: W,
    verbose: bool,
    color: bool,
    scenario_count: usize,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, verbose: bool, color: bool) -> Self {
        Self {
            out,
            verbose,
            color,
            scenario_count: 0,
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}

impl<W: Write> CheckReporter for ConsoleReporter<W> {
    fn on_run_start(&mut self, scenario_count: usize) -> io::Result<()> {
        self.scenario_count = scenario_count;
        let header = self.paint(BOLD, "=== RUNNING GREETER CHECKS ===");
        writeln!(self.out, "{}", header)?;
        writeln!(self.out, "collected {} scenario(s)", scenario_count)?;
        writeln!(self.out)
    }

    fn on_scenario_start(&mut self, index: usize, scenario: &Scenario) -> io::Result<()> {
        if self.verbose {
            writeln!(
                self.out,
                "[{}/{}] {} ({})",
                index + 1,
                self.scenario_count,
                scenario.label,
                scenario.describe_input()
            )?;
        }
        Ok(())
    }

    fn on_assertion(&mut self, outcome: &AssertionOutcome) -> io::Result<()> {
        if outcome.passed {
            let status = self.paint(GREEN, "PASS");
            writeln!(self.out, "{}: {}", status, outcome.message)
        } else {
            let status = self.paint(RED, "FAIL");
            writeln!(self.out, "{}: {}", status, outcome.message)?;
            writeln!(self.out, "   Expected: {}", outcome.expected)?;
            writeln!(self.out, "   Actual:   {}", outcome.actual)
        }
    }

    fn on_run_complete(&mut self, summary: &CheckSummary) -> io::Result<()> {
        writeln!(self.out)?;
        let header = self.paint(BOLD, "=== CHECK RESULTS ===");
        writeln!(self.out, "{}", header)?;
        writeln!(self.out, "Passed: {}", summary.passed)?;
        writeln!(self.out, "Failed: {}", summary.failed)?;
        writeln!(self.out, "Total: {}", summary.total())?;

        let verdict = if summary.tally().all_passed() {
            self.paint(GREEN, "ALL CHECKS PASSED")
        } else {
            self.paint(RED, "SOME CHECKS FAILED")
        };
        writeln!(self.out, "{}", verdict)
    }
}

// ============================================================================
// Runner
// ============================================================================

/// Run `scenarios` in order, reporting every assertion.
///
/// Failed assertions are counted, not returned as errors; only a failure to
/// capture the greeting or to write the report aborts the run.
pub fn run_scenarios<R: CheckReporter>(scenarios: &[Scenario], reporter: &mut R) -> Result<CheckSummary, CheckError> {
    let start = Instant::now();
    let mut assertions = Assertions::new();

    let expected_assertions: usize = scenarios.iter().map(Scenario::assertion_count).sum();
    info!(
        scenarios = scenarios.len(),
        assertions = expected_assertions,
        "running greeter checks"
    );
    reporter.on_run_start(scenarios.len())?;

    for (index, scenario) in scenarios.iter().enumerate() {
        reporter.on_scenario_start(index, scenario)?;

        let config = GreeterConfig::new().with_name(scenario.name.map(str::to_string));
        let output = capture_greeting(&config)?;
        debug!(label = scenario.label, output = %output, "captured greeting");

        for outcome in check_output(&mut assertions, scenario, &output) {
            if !outcome.passed {
                warn!(label = scenario.label, message = %outcome.message, "check failed");
            }
            reporter.on_assertion(&outcome)?;
        }
    }

    let tally = assertions.tally();
    let summary = CheckSummary {
        passed: tally.passed,
        failed: tally.failed,
        duration: start.elapsed(),
    };
    info!(
        passed = summary.passed,
        failed = summary.failed,
        elapsed = ?summary.duration,
        "greeter checks complete"
    );
    reporter.on_run_complete(&summary)?;

    Ok(summary)
}

/// Run the smoke scenarios and report to stdout.
pub fn run_checks(verbose: bool, filter: Option<&str>, color: bool) -> CliResult<ExitCode> {
    let selected = scenarios::select(filter);
    let stdout = io::stdout();
    check_with(&selected, stdout.lock(), verbose, color)
}

/// Run `scenarios`, write the report to `out` and turn the tally into an exit code.
///
/// Any failed assertion yields `Err` with exit code 1 and an empty message, since
/// the report already explains the failure.
pub fn check_with<W: Write>(scenarios: &[Scenario], out: W, verbose: bool, color: bool) -> CliResult<ExitCode> {
    let report_error = |e: CheckError| CliError::failure(format!("Error: {}", e));

    if scenarios.is_empty() {
        let mut out = out;
        writeln!(out, "No checks selected")
            .and_then(|()| out.flush())
            .map_err(|e| report_error(CheckError::Report(e)))?;
        return Ok(ExitCode::SUCCESS); // an empty selection is not a failure
    }

    let mut reporter = ConsoleReporter::new(out, verbose, color);
    let summary = run_scenarios(scenarios, &mut reporter).map_err(report_error)?;
    reporter
        .into_inner()
        .flush()
        .map_err(|e| report_error(CheckError::Report(e)))?;

    if summary.tally().all_passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::new("", ExitCode::FAILURE))
    }
}
