// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, FsError, InjectError, InjectResult, ParseError, bail_out};

#[test]
fn test_parse_error_display() {
    let err = ParseError::UnicodeEscape {
        line: 3,
        sequence: "0G41".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @r"malformed unicode escape '\u0G41' on line 3");
}

#[test]
fn test_missing_required_file_display() {
    let err = FsError::MissingRequiredFile("/jobs/build.properties".to_string());
    insta::assert_snapshot!(
        err.to_string(),
        @"required properties file not found: /jobs/build.properties"
    );
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "inject".to_string(),
        key: "properties_file".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required config key 'properties_file' in section '[inject]'"
    );
}

#[test]
fn test_boxed_conversion() {
    let err: InjectError = ParseError::UnicodeEscape {
        line: 1,
        sequence: "12".to_string(),
    }
    .into();
    assert!(matches!(err, InjectError::Parse(_)));
    assert!(err.to_string().starts_with("parse error: "));
}

#[test]
fn test_bail_out() {
    let err = bail_out("no declarations supplied");
    assert_eq!(err.to_string(), "fatal error: no declarations supplied");
}

#[test]
fn test_inject_error_size() {
    // InjectError should be reasonably small
    // Box<str> variants (Bailed, Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<InjectError>();
    assert!(size <= 24, "InjectError is {size} bytes, expected <= 24");
}

#[test]
fn test_inject_result_size() {
    let size = std::mem::size_of::<InjectResult<()>>();
    assert!(size <= 24, "InjectResult<()> is {size} bytes, expected <= 24");
}
