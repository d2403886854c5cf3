// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogContext, LogLevel};

#[test]
fn test_log_context_clear_stage() {
    let mut ctx = LogContext::with_unit("nightly-build");
    ctx.set_stage("properties");

    assert_eq!(ctx.prefix(), "[nightly-build/properties] ");

    ctx.clear_stage();
    assert_eq!(ctx.prefix(), "[nightly-build] ");
    assert!(ctx.stage().is_none(), "stage should be None after clear_stage");
}

#[test]
fn test_log_level_conversion() {
    assert_eq!(LogLevel::from_int(0), LogLevel::SILENT);
    assert_eq!(LogLevel::from_int(3), LogLevel::INFO);
    assert_eq!(LogLevel::from_int(5), LogLevel::TRACE);
    // saturates past the top
    assert_eq!(LogLevel::from_int(100), LogLevel::TRACE);
}

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(5).is_ok());
    assert!(LogLevel::new(6).is_err());
    assert_eq!(LogLevel::from_u8(6), None);
    assert_eq!(LogLevel::from_u8(2), Some(LogLevel::WARN));
}

#[test]
fn test_log_level_filter_strings() {
    assert_eq!(LogLevel::SILENT.to_filter_string(), "off");
    assert_eq!(LogLevel::WARN.to_filter_string(), "warn");
    assert_eq!(LogLevel::TRACE.to_filter_string(), "trace");
}

#[test]
fn test_log_context_prefix() {
    let ctx_unit_only = LogContext::with_unit("deploy");
    let mut ctx_with_stage = LogContext::with_unit("deploy");
    ctx_with_stage.set_stage("computed");
    let ctx_empty = LogContext::default();

    assert_eq!(ctx_unit_only.prefix(), "[deploy] ");
    assert_eq!(ctx_with_stage.prefix(), "[deploy/computed] ");
    assert_eq!(ctx_empty.prefix(), "");
}
