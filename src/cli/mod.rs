//! CLI module for the greeter
//!
//! ## Commands
//!
//! - `greet [--name NAME]` - Print the greeting (default action when no subcommand given)
//! - `check` - Run the built-in smoke scenarios against the greeting
//!
//! ## Modules
//!
//! - `commands` - Command implementations and the emit step
//! - `scenarios` - The fixed smoke scenario table
//! - `test_runner` - Assertion accounting and reporting for `check`
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod scenarios;
pub mod test_runner;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::GREETER_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
///
/// `greeter check` is used as a CI gate, so `FAILURE` is also what a failed smoke
/// assertion turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Carries the message to print on stderr and the exit code. A failed check run
/// uses an empty message because its report has already been written to stdout.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Print an HTML-safe greeting
#[derive(Parser, Debug)]
#[command(name = "greeter")]
#[command(version = GREETER_VERSION)]
#[command(about = "Print an HTML-safe greeting for $NAME", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the greeting
    Greet {
        /// Name to greet (overrides $NAME)
        #[arg(long, value_name = "NAME")]
        name: Option<String>,
    },

    /// Run the smoke scenarios against the greeting
    Check {
        /// Print a header for every scenario
        #[arg(short, long)]
        verbose: bool,
        /// Only run scenarios whose label contains this keyword
        #[arg(short = 'k', value_name = "KEYWORD")]
        filter: Option<String>,
        /// Disable ANSI colors in the report
        #[arg(long)]
        no_color: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Greet { name }) => commands::greet_stdout(name),
        Some(Command::Check {
            verbose,
            filter,
            no_color,
        }) => test_runner::run_checks(verbose, filter.as_deref(), !no_color),
        None => commands::greet_stdout(None),
    }
}

// ============================================================================
// Tests
// ============================================================================
