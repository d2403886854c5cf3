// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envinject [global options] <command>
//! inject [-f FILE] [-c TEXT] [-e KEY=VALUE]...
//! props FILE
//! options
//! configs
//! version
//! ```

pub mod global;
pub mod inject;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::inject::{InjectArgs, PropsArgs};
use clap::{Parser, Subcommand};

/// Environment Variable Injection Engine
///
/// Computes a final, consistent set of named string variables from
/// layered sources and makes it available to downstream build steps.
#[derive(Debug, Parser)]
#[command(
    name = "envinject",
    author,
    version,
    about = "Environment variable injection engine",
    long_about = "envinject-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Merges a base environment with properties declarations and\n\
                  computed variables, resolving ${NAME} references until a\n\
                  fixpoint and dropping whatever stays unresolved. See\n\
                  `envinject <command> --help` for more information about a\n\
                  command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, envinject will look for `envinject.toml` in the\n\
                  current directory and load it when present. Additional TOML\n\
                  files can be specified with --config, loaded after the\n\
                  default and overriding it. Use --no-default-configs to\n\
                  disable auto detection and only use --config."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by envinject.
    Configs,

    /// Merges declarations into the base environment and prints the result.
    Inject(InjectArgs),

    /// Parses one required properties file against the current environment.
    Props(PropsArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
