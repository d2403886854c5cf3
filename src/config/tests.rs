// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Config;
use crate::logging::LogLevel;

#[test]
fn test_config_defaults() {
    let config = Config::parse("").unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert!(config.global.log_file.is_none());
    assert!(config.inject.properties_file.is_none());
    assert!(!config.inject.file_required);
}

#[test]
fn test_config_parse_global_section() {
    let toml = r#"
[global]
output_log_level = 4
log_file = "inject.log"
"#;
    let config = Config::parse(toml).unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(
        config.global.log_file.as_deref(),
        Some(std::path::Path::new("inject.log"))
    );
}

#[test]
fn test_config_parse_inject_section() {
    let toml = r#"
[inject]
properties_file = "build.properties"
file_required = true

[inject.vars]
BUILD_KIND = "nightly"
"#;
    let config = Config::parse(toml).unwrap();

    assert_eq!(
        config.inject.properties_file.as_deref(),
        Some(std::path::Path::new("build.properties"))
    );
    assert!(config.inject.file_required);
    assert_eq!(
        config.inject.vars.get("BUILD_KIND").map(String::as_str),
        Some("nightly")
    );
}

#[test]
fn test_config_rejects_out_of_range_log_level() {
    let toml = "
[global]
output_log_level = 9
";
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_config_rejects_unknown_keys() {
    let toml = "
[global]
no_such_option = true
";
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_config_unset_system_requires_case_insensitive() {
    let toml = "
[inject]
unset_system = true
";
    assert!(Config::parse(toml).is_err());

    let toml_ok = "
[inject]
case_insensitive = true
unset_system = true
";
    let config = Config::parse(toml_ok).unwrap();
    assert!(config.inject.unset_system);
}
