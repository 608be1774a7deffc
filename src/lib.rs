#![forbid(unsafe_code)]
//! Greeter
//!
//! Prints an HTML-safe `Hello {name}!` greeting, taking the name from the `NAME` environment variable,
//! and ships a `check` command that runs a fixed set of smoke scenarios against that greeting.
//!
//! ## Layout
//!
//! - `greeter_core` (workspace crate): pure escaping and formatting, no IO.
//! - `config`: resolves `NAME` into an explicit [`config::GreeterConfig`].
//! - `cli`: argument parsing, the emit step, and the check runner.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` with `?` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod version;

pub use config::GreeterConfig;
pub use greeter_core::{escape_html, greet};
