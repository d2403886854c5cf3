// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the inject and props commands.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// How the resulting environment is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `KEY=VALUE` lines in result order.
    #[default]
    Text,
    /// One JSON object with `env` and `removed`.
    Json,
}

/// Arguments for the inject command.
#[derive(Debug, Clone, Default, Args)]
pub struct InjectArgs {
    /// Properties file to parse. ${NAME} references in the path are
    /// expanded against the base environment before it is opened.
    #[arg(short = 'f', long = "properties-file", value_name = "FILE")]
    pub properties_file: Option<PathBuf>,

    /// Inline properties text, same syntax as the file.
    #[arg(short = 'c', long = "properties-content", value_name = "TEXT")]
    pub properties_content: Option<String>,

    /// Variable merged last with the highest precedence.
    /// Can be specified multiple times.
    #[arg(short = 'e', long = "var", value_name = "KEY=VALUE", action = clap::ArgAction::Append)]
    pub vars: Vec<String>,

    /// Root directory for relative properties-file paths.
    #[arg(long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Fail when the properties file does not exist instead of
    /// contributing nothing.
    #[arg(long = "require-file")]
    pub require_file: bool,

    /// Start from an empty base instead of the process environment.
    #[arg(long = "no-system-env")]
    pub no_system_env: bool,

    /// Merge with case-insensitive keys (node/global scope semantics).
    #[arg(long = "case-insensitive")]
    pub case_insensitive: bool,

    /// Drop the base environment from the result, keeping only declared
    /// variables. Requires --case-insensitive.
    #[arg(long = "unset-system", requires = "case_insensitive")]
    pub unset_system: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the props command.
#[derive(Debug, Clone, Args)]
pub struct PropsArgs {
    /// Properties file to parse; must exist.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,
}
