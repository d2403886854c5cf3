// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use envinject_rs::config::Config;
use envinject_rs::logging::LogLevel;
use std::io::Write;

#[test]
fn config_parse_minimal() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert!(config.inject.vars.is_empty());
}

#[test]
fn config_parse_full() {
    let toml = r#"
[global]
output_log_level = 2
file_log_level = 5
log_file = "logs/inject.log"

[inject]
properties_file = "ci/build.properties"
properties_content = "EXTRA=${WORKSPACE}/extra"
root = "/var/lib/ci"
file_required = true

[inject.vars]
PIPELINE = "nightly"
RETRIES = "3"
"#;
    let config = Config::parse(toml).unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::WARN);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert_eq!(
        config.inject.properties_file.as_deref(),
        Some(std::path::Path::new("ci/build.properties"))
    );
    assert_eq!(
        config.inject.properties_content.as_deref(),
        Some("EXTRA=${WORKSPACE}/extra")
    );
    assert!(config.inject.file_required);
    assert_eq!(config.inject.vars.len(), 2);
}

#[test]
fn config_from_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    write!(
        file,
        "[inject]\nproperties_file = \"build.properties\"\n"
    )
    .unwrap();
    file.flush().unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(
        config.inject.properties_file.as_deref(),
        Some(std::path::Path::new("build.properties"))
    );
}

#[test]
fn config_missing_required_file_fails() {
    assert!(Config::from_file("/nonexistent/envinject.toml").is_err());
}

#[test]
fn config_loader_overrides_later_sources_win() {
    let config = Config::builder()
        .add_toml_str("[global]\noutput_log_level = 1\n")
        .set("global.output_log_level", 4)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
}

#[test]
fn config_format_options_lists_everything() {
    let config = Config::parse("[inject.vars]\nSTAGE = \"qa\"\n").unwrap();
    let lines = config.format_options();

    assert!(lines.iter().any(|l| l.starts_with("global.output_log_level")));
    assert!(lines.iter().any(|l| l.contains("inject.vars.STAGE") && l.ends_with("qa")));
}
