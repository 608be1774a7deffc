//! HTML escaping for values interpolated into greeting text.
//!
//! ## Notes
//! - The five HTML-special characters are always replaced, in both text and attribute context:
//!   `&` → `&amp;`, `<` → `&lt;`, `>` → `&gt;`, `"` → `&quot;`, `'` → `&#039;`.
//! - Escaping is not idempotent. Existing entities are escaped again (`&amp;` → `&amp;amp;`).

/// Escape `input` for safe insertion into HTML.
///
/// ## Parameters
/// - `input`: Arbitrary text, possibly user-controlled.
///
/// ## Returns
/// - `String`: `input` with every HTML-special character replaced by its entity.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    escape_html_into(&mut out, input);
    out
}

/// Append the escaped form of `input` to `out`.
///
/// ## Parameters
/// - `out`: Buffer to append to. Existing contents are left untouched.
/// - `input`: Text to escape.
pub fn escape_html_into(out: &mut String, input: &str) {
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
}
