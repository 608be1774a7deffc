//! Property-based tests for the greeter
//!
//! These tests use proptest to verify the greeting invariants across many randomly
//! generated names, catching edge cases that hand-written tests might miss.

use greeter::{escape_html, greet};
use proptest::prelude::*;

const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&#039;"];

/// Every `&` in `s` must begin one of the known entities.
fn ampersands_are_entities(s: &str) -> bool {
    s.match_indices('&')
        .all(|(i, _)| ENTITIES.iter().any(|e| s[i..].starts_with(e)))
}

proptest! {
    /// Property: names without HTML specials are interpolated verbatim
    #[test]
    fn safe_names_are_identity(name in "[^<>&\"']*") {
        prop_assert_eq!(greet(Some(&name)), format!("Hello {}!", name));
    }

    /// Property: no raw markup survives, and every `&` is part of an entity
    #[test]
    fn output_is_html_safe(name in ".*") {
        let out = greet(Some(&name));
        prop_assert!(!out.contains('<'));
        prop_assert!(!out.contains('>'));
        prop_assert!(!out.contains('"'));
        prop_assert!(!out.contains('\''));
        prop_assert!(ampersands_are_entities(&out));
    }

    /// Property: percent signs and braces are never treated as directives
    #[test]
    fn directives_are_literal(name in "[A-Za-z%{}0-9]*") {
        prop_assert_eq!(greet(Some(&name)), format!("Hello {}!", name));
    }

    /// Property: every greeting has the same frame and a minimum length
    #[test]
    fn shape_is_invariant(name in proptest::option::of(".*")) {
        let out = greet(name.as_deref());
        prop_assert!(out.starts_with("Hello "));
        prop_assert!(out.ends_with('!'));
        prop_assert!(out.len() >= 7);
    }

    /// Property: escaping never shortens the input
    #[test]
    fn escaping_never_shrinks(name in ".*") {
        prop_assert!(escape_html(&name).len() >= name.len());
    }
}

#[test]
fn default_name_is_world() {
    assert_eq!(greet(None), "Hello World!");
}

#[test]
fn empty_name_is_kept() {
    assert_eq!(greet(Some("")), "Hello !");
}

#[test]
fn ampersand_helper_rejects_bare_ampersand() {
    assert!(ampersands_are_entities("a &amp; b &#039;"));
    assert!(!ampersands_are_entities("a & b"));
}
