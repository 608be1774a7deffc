//! Build the greeting string.
//!
//! The template is `Hello {name}!`. The name is escaped with [`crate::html::escape_html_into`] and then
//! appended as plain text, so characters such as `%`, `{` or `}` in the input are never treated as
//! formatting directives.

use crate::html::escape_html_into;

/// Name used when no name was provided.
pub const DEFAULT_NAME: &str = "World";
/// Text before the name.
pub const GREETING_PREFIX: &str = "Hello ";
/// Text after the name.
pub const GREETING_SUFFIX: &str = "!";

/// Build the greeting for `name`.
///
/// ## Parameters
/// - `name`: The name to greet. `None` means "not configured" and greets [`DEFAULT_NAME`];
///   `Some("")` is a configured empty name and yields `Hello !`.
///
/// ## Returns
/// - `String`: `Hello ` + escaped name + `!`, without a trailing newline.
pub fn greet(name: Option<&str>) -> String {
    let name = name.unwrap_or(DEFAULT_NAME);
    let mut out = String::with_capacity(GREETING_PREFIX.len() + name.len() + GREETING_SUFFIX.len());
    out.push_str(GREETING_PREFIX);
    escape_html_into(&mut out, name);
    out.push_str(GREETING_SUFFIX);
    out
}
