//! Build script for extui-vyper
//!
//! Validates vyper.toml at compile time

use std::fs;
use std::path::Path;

/// Keys allowed in the [features] section
const FEATURE_KEYS: &[&str] = &[
    "speaker",
    "advanced_pause",
    "power_loss_recovery",
    "leveling",
];

fn main() {
    println!("cargo:rerun-if-changed=vyper.toml");
    println!("cargo:rerun-if-changed=build.rs");

    let profile_path = Path::new("vyper.toml");

    let content = match fs::read_to_string(profile_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read vyper.toml", &[e.to_string()]),
    };

    // Parse and validate TOML syntax
    let profile: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in vyper.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let errors = validate_profile(&profile);
    if !errors.is_empty() {
        fail("Invalid build profile in vyper.toml", &errors);
    }
}

/// Check sections, keys and value types
fn validate_profile(profile: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let table = match profile.as_table() {
        Some(t) => t,
        None => return vec!["Profile is not a table".to_string()],
    };

    for (section, value) in table {
        match (section.as_str(), value) {
            ("features", toml::Value::Table(features)) => {
                for (key, value) in features {
                    if !FEATURE_KEYS.contains(&key.as_str()) {
                        errors.push(format!("Unknown feature '{}'", key));
                    } else if !value.is_bool() {
                        errors.push(format!("Feature '{}' must be true or false", key));
                    }
                }
            }
            ("leveling", toml::Value::Table(leveling)) => {
                for (key, value) in leveling {
                    match (key.as_str(), value.as_integer()) {
                        ("bed_temp", Some(t)) if (0..=150).contains(&t) => {}
                        ("bed_temp", _) => {
                            errors.push("leveling.bed_temp must be 0..=150".to_string())
                        }
                        _ => errors.push(format!("Unknown leveling key '{}'", key)),
                    }
                }
            }
            (name, toml::Value::Table(_)) => errors.push(format!("Unknown section [{}]", name)),
            (name, _) => errors.push(format!("Top-level key '{}' outside a section", name)),
        }
    }

    errors
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = match line.char_indices().nth(59) {
                Some((end, _)) if line.chars().count() > 62 => format!("{}...", &line[..end]),
                _ => line.to_string(),
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<57}║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
