//! Provide the pure greeting semantics for the greeter CLI.
//!
//! This crate is intentionally small and dependency-free. It contains the deterministic helpers that both
//! the `greet` command and the `check` runner rely on, so the two can never drift apart.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state, no environment access.
//! - Configuration (where the name comes from) is the caller's job; this crate only sees `Option<&str>`.

pub mod greeting;
pub mod html;

pub use greeting::{DEFAULT_NAME, GREETING_PREFIX, GREETING_SUFFIX, greet};
pub use html::{escape_html, escape_html_into};
