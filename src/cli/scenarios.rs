//! Smoke scenarios for `greeter check`
//!
//! Each scenario pairs an optional name with an expectation on the emitted greeting. The table is
//! fixed and runs in order.

use greeter_core::{GREETING_PREFIX, GREETING_SUFFIX};

/// What the emitted greeting must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// Output equals the string exactly
    Exact(&'static str),
    /// Output contains the string
    Contains(&'static str),
    /// Output is not empty
    NonEmpty,
    /// Output starts with `prefix` and ends with `suffix` (checked as two assertions)
    Framed {
        prefix: &'static str,
        suffix: &'static str,
    },
}

/// One smoke scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    /// Short identifier, matched by `check -k`
    pub label: &'static str,
    /// Name to greet, `None` for "not configured"
    pub name: Option<&'static str>,
    pub expectation: Expectation,
}

/// The fixed smoke scenarios, in run order.
pub const SCENARIOS: [Scenario; 7] = [
    Scenario {
        label: "default_name",
        name: None,
        expectation: Expectation::Exact("Hello World!"),
    },
    Scenario {
        label: "custom_name",
        name: Some("DevOps"),
        expectation: Expectation::Exact("Hello DevOps!"),
    },
    Scenario {
        label: "empty_name",
        name: Some(""),
        expectation: Expectation::Exact("Hello !"),
    },
    Scenario {
        label: "escapes_html",
        name: Some("<script>alert(\"xss\")</script>"),
        expectation: Expectation::Contains("&lt;script&gt;"),
    },
    Scenario {
        label: "percent_literal",
        name: Some("Test%User"),
        expectation: Expectation::Contains("Test%User"),
    },
    Scenario {
        label: "non_empty",
        name: Some("Azure"),
        expectation: Expectation::NonEmpty,
    },
    Scenario {
        label: "message_shape",
        name: Some("CI/CD"),
        expectation: Expectation::Framed {
            prefix: GREETING_PREFIX,
            suffix: GREETING_SUFFIX,
        },
    },
];

impl Scenario {
    /// Human-readable description of the scenario's input
    pub fn describe_input(&self) -> String {
        match self.name {
            None => "NAME unset".to_string(),
            Some(name) => format!("NAME={:?}", name),
        }
    }

    /// Number of assertions this scenario records
    pub fn assertion_count(&self) -> usize {
        match self.expectation {
            Expectation::Framed { .. } => 2,
            _ => 1,
        }
    }
}

/// Select the scenarios whose label contains `filter` (all of them when `None`).
pub fn select(filter: Option<&str>) -> Vec<Scenario> {
    SCENARIOS
        .iter()
        .filter(|s| filter.is_none_or(|keyword| s.label.contains(keyword)))
        .copied()
        .collect()
}
