// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::inject::OutputFormat;
use crate::cli::{Cli, Command};
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["envinject", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "envinject",
        "-l",
        "5",
        "-C",
        "/tmp/ci.toml",
        "inject",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.configs.len(), 1);
    assert!(matches!(cli.command, Some(Command::Inject(_))));
}

#[test]
fn test_parse_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["envinject", "-l", "9", "inject"]).is_err());
}

#[test]
fn test_parse_inject_args() {
    let cli = Cli::try_parse_from([
        "envinject",
        "inject",
        "-f",
        "build.properties",
        "-c",
        "OUT=${WORKSPACE}/out",
        "-e",
        "STAGE=deploy",
        "-e",
        "TAG=v1",
        "--require-file",
        "--format",
        "json",
    ])
    .unwrap();

    let Some(Command::Inject(args)) = cli.command else {
        panic!("expected inject command");
    };
    assert_eq!(
        args.properties_file.as_deref(),
        Some(std::path::Path::new("build.properties"))
    );
    assert_eq!(
        args.properties_content.as_deref(),
        Some("OUT=${WORKSPACE}/out")
    );
    assert_eq!(args.vars, vec!["STAGE=deploy", "TAG=v1"]);
    assert!(args.require_file);
    assert_eq!(args.format, OutputFormat::Json);
}

#[test]
fn test_parse_unset_system_requires_case_insensitive() {
    assert!(Cli::try_parse_from(["envinject", "inject", "--unset-system"]).is_err());

    let cli = Cli::try_parse_from([
        "envinject",
        "inject",
        "--case-insensitive",
        "--unset-system",
    ])
    .unwrap();
    let Some(Command::Inject(args)) = cli.command else {
        panic!("expected inject command");
    };
    assert!(args.case_insensitive && args.unset_system);
}

#[test]
fn test_parse_props() {
    let cli = Cli::try_parse_from(["envinject", "props", "build.properties"]).unwrap();
    let Some(Command::Props(args)) = cli.command else {
        panic!("expected props command");
    };
    assert_eq!(args.file, std::path::PathBuf::from("build.properties"));
    assert_eq!(args.format, OutputFormat::Text);
}

#[test]
fn test_to_config_overrides() {
    let cli = Cli::try_parse_from(["envinject", "-l", "4", "--log-file", "x.log", "options"])
        .unwrap();

    let overrides = cli.global.to_config_overrides();
    assert!(overrides.contains(&("global.output_log_level".to_string(), "4".to_string())));
    // file level falls back to the console level
    assert!(overrides.contains(&("global.file_log_level".to_string(), "4".to_string())));
    assert!(overrides.contains(&("global.log_file".to_string(), "x.log".to_string())));
}
