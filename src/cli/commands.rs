//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::{self, Write};

use thiserror::Error;
use tracing::debug;

use crate::config::GreeterConfig;

use super::{CliError, CliResult, ExitCode};

/// Errors that occur while emitting a greeting
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to write greeting: {0}")]
    Io(#[from] io::Error),
}

/// Write the greeting for `config` to `out`.
///
/// Exactly the greeting bytes are written, with no trailing newline. The check runner captures the
/// greeting by passing an in-memory buffer here; the CLI passes stdout.
pub fn emit_greeting<W: Write>(out: &mut W, config: &GreeterConfig) -> Result<(), EmitError> {
    let greeting = greeter_core::greet(config.name());
    debug!(configured = config.name().is_some(), len = greeting.len(), "emitting greeting");
    out.write_all(greeting.as_bytes())?;
    Ok(())
}

/// Capture the emitted greeting as a string.
pub fn capture_greeting(config: &GreeterConfig) -> Result<String, EmitError> {
    let mut buf = Vec::new();
    emit_greeting(&mut buf, config)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Resolve the config from `$NAME` (and an optional `--name` override) and print the greeting.
pub fn greet_stdout(name_override: Option<String>) -> CliResult<ExitCode> {
    let config = GreeterConfig::from_env().with_override(name_override);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    emit_greeting(&mut out, &config)
        .and_then(|()| out.flush().map_err(EmitError::from))
        .map_err(|e| CliError::failure(format!("Error: {}", e)))?;

    Ok(ExitCode::SUCCESS)
}
