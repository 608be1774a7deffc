//! Table-driven tests over the smoke scenarios
//!
//! These call the pure greeting function directly; no process output is captured
//! and no environment variables are touched.

use greeter::cli::scenarios::{Expectation, SCENARIOS};
use greeter::cli::test_runner::{Assertions, check_output};
use greeter::greet;

/// (name, full expected greeting)
const CASES: [(Option<&str>, &str); 7] = [
    (None, "Hello World!"),
    (Some("DevOps"), "Hello DevOps!"),
    (Some(""), "Hello !"),
    (
        Some("<script>alert(\"xss\")</script>"),
        "Hello &lt;script&gt;alert(&quot;xss&quot;)&lt;/script&gt;!",
    ),
    (Some("Test%User"), "Hello Test%User!"),
    (Some("Azure"), "Hello Azure!"),
    (Some("CI/CD"), "Hello CI/CD!"),
];

#[test]
fn greetings_match_table() {
    for (name, expected) in CASES {
        assert_eq!(greet(name), expected, "name = {:?}", name);
    }
}

#[test]
fn scenario_inputs_match_table() {
    for (scenario, (name, _)) in SCENARIOS.iter().zip(CASES) {
        assert_eq!(scenario.name, name, "scenario {}", scenario.label);
    }
}

#[test]
fn every_scenario_passes_against_greet() {
    let mut assertions = Assertions::new();
    for scenario in &SCENARIOS {
        let output = greet(scenario.name);
        for outcome in check_output(&mut assertions, scenario, &output) {
            assert!(outcome.passed, "{}: {:?}", outcome.message, outcome.actual);
        }
    }
    let tally = assertions.tally();
    assert_eq!(tally.passed, 8);
    assert!(tally.all_passed());
}

#[test]
fn exact_scenarios_are_literal() {
    let exact: Vec<_> = SCENARIOS
        .iter()
        .filter_map(|s| match s.expectation {
            Expectation::Exact(e) => Some((s.name, e)),
            _ => None,
        })
        .collect();

    assert_eq!(
        exact,
        vec![
            (None, "Hello World!"),
            (Some("DevOps"), "Hello DevOps!"),
            (Some(""), "Hello !"),
        ]
    );
}

#[test]
fn wrong_output_is_counted_not_panicked() {
    let mut assertions = Assertions::new();
    let outcomes = check_output(&mut assertions, &SCENARIOS[3], "Hello <script>!");
    assert_eq!(outcomes.len(), 1);
    assert!(!outcomes[0].passed);
    assert_eq!(assertions.tally().failed, 1);
}
