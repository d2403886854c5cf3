// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for properties parsing and the Windows-path escape pre-pass.

use super::escape::escape_windows_paths;
use super::{load_file, parse_content};
use crate::core::env::Env;
use crate::error::ParseError;
use std::io::Write;

// --- Escape pre-pass ---

#[test]
fn test_escape_drive_path_backslashes_doubled() {
    assert_eq!(
        escape_windows_paths(r"KEY=C:\Windows\Temp"),
        r"KEY=C:\\Windows\\Temp"
    );
}

#[test]
fn test_escape_share_prefix_doubled_to_four() {
    assert_eq!(
        escape_windows_paths(r"KEY=\\server\share"),
        r"KEY=\\\\server\\share"
    );
}

#[test]
fn test_escape_unrelated_backslashes_untouched() {
    // No drive or share pattern: the line passes through as-is
    assert_eq!(escape_windows_paths(r"KEY=a\tb"), r"KEY=a\tb");
    assert_eq!(escape_windows_paths("KEY=plain"), "KEY=plain");
}

#[test]
fn test_escape_pre_escaped_runs_left_alone() {
    assert_eq!(
        escape_windows_paths(r"KEY=C:\\already\other"),
        r"KEY=C:\\already\\other"
    );
}

#[test]
fn test_escape_is_line_scoped() {
    let content = "A=C:\\Temp\nB=plain\\literal";
    // Only the drive-pattern line is rewritten
    assert_eq!(
        escape_windows_paths(content),
        "A=C:\\\\Temp\nB=plain\\literal"
    );
}

// --- Parsing ---

#[test]
fn test_parse_basic_entries() {
    let content = "# comment line\nKEY1=value1\n\nKEY2:value2\n! another comment\nKEY3  =  value3\n";
    let vars = parse_content(content, &Env::new()).unwrap();

    assert_eq!(vars.get("KEY1"), Some("value1"));
    assert_eq!(vars.get("KEY2"), Some("value2"));
    assert_eq!(vars.get("KEY3"), Some("value3"));
    assert_eq!(vars.len(), 3);
}

#[test]
fn test_parse_preserves_input_order() {
    let content = "Z=1\nA=2\nM=3\nZ=4\n";
    let vars = parse_content(content, &Env::new()).unwrap();

    let keys: Vec<&str> = vars.iter().map(|(k, _)| k).collect();
    // First occurrence fixes the position; the duplicate updates in place
    assert_eq!(keys, vec!["Z", "A", "M"]);
    assert_eq!(vars.get("Z"), Some("4"));
}

#[test]
fn test_parse_windows_paths_preserved() {
    let vars = parse_content("KEY=C:\\Windows\\Temp", &Env::new()).unwrap();
    assert_eq!(vars.get("KEY"), Some("C:\\Windows\\Temp"));

    let vars = parse_content("SHARE=\\\\server\\share", &Env::new()).unwrap();
    assert_eq!(vars.get("SHARE"), Some("\\\\server\\share"));
}

#[test]
fn test_parse_line_continuation() {
    let vars = parse_content("KEY=line1\\\nline2", &Env::new()).unwrap();
    assert_eq!(vars.get("KEY"), Some("line1line2"));
}

#[test]
fn test_parse_continuation_trims_leading_whitespace() {
    let vars = parse_content("KEY=one\\\n    two\\\n    three", &Env::new()).unwrap();
    assert_eq!(vars.get("KEY"), Some("onetwothree"));
}

#[test]
fn test_parse_even_trailing_backslashes_do_not_continue() {
    // C:\dir\ on a drive-pattern line is pre-escaped to C:\\dir\\,
    // leaving an even run that no longer escapes the terminator
    let vars = parse_content("KEY=C:\\dir\\\nNEXT=x", &Env::new()).unwrap();
    assert_eq!(vars.get("KEY"), Some("C:\\dir\\"));
    assert_eq!(vars.get("NEXT"), Some("x"));
}

#[test]
fn test_parse_unicode_escape() {
    let vars = parse_content("KEY=\\u0041\\u00e9", &Env::new()).unwrap();
    assert_eq!(vars.get("KEY"), Some("Aé"));
}

#[test]
fn test_parse_malformed_unicode_escape() {
    let err = parse_content("BAD=\\u00g1", &Env::new()).unwrap_err();
    let parse_err = err.downcast::<ParseError>().unwrap();
    assert!(matches!(parse_err, ParseError::UnicodeEscape { line: 1, .. }));
}

#[test]
fn test_parse_escaped_separator_in_key() {
    let vars = parse_content("a\\=b=c", &Env::new()).unwrap();
    assert_eq!(vars.get("a=b"), Some("c"));
}

#[test]
fn test_parse_line_without_separator() {
    let vars = parse_content("LONELY", &Env::new()).unwrap();
    assert_eq!(vars.get("LONELY"), Some(""));
}

#[test]
fn test_parse_empty_value_retained() {
    let vars = parse_content("EMPTY=\n", &Env::new()).unwrap();
    assert_eq!(vars.get("EMPTY"), Some(""));
    assert_eq!(vars.len(), 1);
}

#[test]
fn test_parse_resolves_values_against_context() {
    let context: Env = [("WORKSPACE", "/ws")].into_iter().collect();
    let vars = parse_content("OUT=${WORKSPACE}/out", &context).unwrap();
    assert_eq!(vars.get("OUT"), Some("/ws/out"));
}

#[test]
fn test_parse_resolves_keys_against_context() {
    let context: Env = [("PREFIX", "APP")].into_iter().collect();
    let vars = parse_content("${PREFIX}_HOME=/opt/app", &context).unwrap();
    assert_eq!(vars.get("APP_HOME"), Some("/opt/app"));
}

#[test]
fn test_parse_unknown_reference_left_in_place() {
    // Unresolved references survive parsing; dropping them is the merge
    // engine's job
    let vars = parse_content("OUT=${MISSING}/out", &Env::new()).unwrap();
    assert_eq!(vars.get("OUT"), Some("${MISSING}/out"));
}

// --- File loading ---

#[test]
fn test_load_file() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    write!(tmp, "# build metadata\nVERSION=1.2.3\nOUT=${{WORKSPACE}}/out\n").unwrap();
    tmp.flush().unwrap();

    let context: Env = [("WORKSPACE", "/ws")].into_iter().collect();
    let vars = load_file(tmp.path(), &context).unwrap();

    assert_eq!(vars.get("VERSION"), Some("1.2.3"));
    assert_eq!(vars.get("OUT"), Some("/ws/out"));
}

#[test]
fn test_load_file_missing_is_parse_error() {
    let err = load_file(
        std::path::Path::new("/nonexistent/build.properties"),
        &Env::new(),
    )
    .unwrap_err();
    let parse_err = err.downcast::<ParseError>().unwrap();
    assert!(matches!(parse_err, ParseError::Read { .. }));
}
