//! Layering guardrails for the `greeter_core` crate.
//!
//! `greeter_core` holds the pure greeting semantics. It must stay dependency-free and must not
//! reach for the process environment or any output stream; configuration and emitting belong to
//! the `greeter` crate.

const CORE_MANIFEST: &str = include_str!("../crates/greeter_core/Cargo.toml");
const CORE_SOURCES: [(&str, &str); 3] = [
    ("lib.rs", include_str!("../crates/greeter_core/src/lib.rs")),
    ("greeting.rs", include_str!("../crates/greeter_core/src/greeting.rs")),
    ("html.rs", include_str!("../crates/greeter_core/src/html.rs")),
];

#[test]
fn core_has_no_dependencies_table() {
    for raw_line in CORE_MANIFEST.lines() {
        let line = raw_line.trim();
        assert!(
            line != "[dependencies]",
            "`greeter_core` must not declare [dependencies]; keep it a pure semantic core"
        );
    }
}

#[test]
fn core_does_not_touch_env_or_io() {
    let forbidden = ["std::env", "std::io", "println!", "print!", "eprintln!", "std::process"];

    for (file, source) in CORE_SOURCES {
        for line in source.lines() {
            // Doc comments may mention these freely.
            let code = line.trim_start();
            if code.starts_with("//") {
                continue;
            }
            for needle in forbidden {
                assert!(
                    !code.contains(needle),
                    "greeter_core/src/{} uses `{}`: {}",
                    file,
                    needle,
                    line
                );
            }
        }
    }
}
