//! Greeter configuration
//!
//! The greeter takes its name from the `NAME` environment variable. The value is resolved once, at the
//! edge, into a [`GreeterConfig`] that is passed around explicitly. Nothing below the CLI reads the
//! process environment.

use std::env;
use std::ffi::OsString;

/// Environment variable holding the name to greet.
pub const NAME_VAR: &str = "NAME";

/// Resolved greeter configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreeterConfig {
    /// Name to greet. `None` means not configured; `Some("")` is a configured empty name.
    name: Option<String>,
}

impl GreeterConfig {
    /// Create a config with no name configured
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Read the config through an arbitrary key lookup.
    ///
    /// Values that are not valid UTF-8 are converted lossily (invalid sequences become U+FFFD), so any
    /// value the environment can hold is accepted.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let name = lookup(NAME_VAR).map(|raw| raw.to_string_lossy().into_owned());
        Self { name }
    }

    /// Replace the configured name
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Apply an override only when one was given (e.g. `--name` on the command line).
    pub fn with_override(self, name: Option<String>) -> Self {
        match name {
            Some(name) => self.with_name(Some(name)),
            None => self,
        }
    }

    /// The configured name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
