// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Injection commands.
//!
//! ```text
//! run_inject_command: config defaults + CLI args --> InjectionSources
//!   job scope      -> merge()                  -> env + removed
//!   node scope     -> merge_case_insensitive() -> folded + removed
//! run_props_command: one required file, parsed against the process env
//! ```
//!
//! The successfully merged job-scope environment becomes the new
//! process-wide active environment.

use crate::cli::inject::{InjectArgs, OutputFormat, PropsArgs};
use crate::config::Config;
use crate::core::env::{self, Env, FoldedEnv, active};
use crate::core::merge::{InjectionSources, RemovedVariable};
use crate::core::{props, resolve};
use crate::error::{FsError, Result, bail_out};
use crate::logging::LogContext;

/// Run the inject command.
///
/// # Errors
///
/// Returns an error for malformed `--var` pairs, parse errors in the
/// declarations, or a missing properties file when one is required.
pub fn run_inject_command(args: &InjectArgs, config: &Config) -> Result<()> {
    let base = if args.no_system_env {
        Env::new()
    } else {
        env::current_env()
    };

    let mut computed: Vec<Env> = Vec::new();
    if !config.inject.vars.is_empty() {
        computed.push(
            config
                .inject
                .vars
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect(),
        );
    }
    if !args.vars.is_empty() {
        computed.push(parse_var_pairs(&args.vars)?);
    }

    let sources = InjectionSources::builder()
        .with_base(base)
        .maybe_with_properties_file(
            args.properties_file
                .clone()
                .or_else(|| config.inject.properties_file.clone()),
        )
        .maybe_with_properties_content(
            args.properties_content
                .clone()
                .or_else(|| config.inject.properties_content.clone()),
        )
        .with_computed(computed)
        .maybe_with_root(args.root.clone().or_else(|| config.inject.root.clone()))
        .with_file_required(args.require_file || config.inject.file_required)
        .build();

    let mut log_ctx = LogContext::with_unit("inject");
    if args.case_insensitive || config.inject.case_insensitive {
        log_ctx.set_stage("overlay");
        tracing::debug!("{}merging node-scope declarations", log_ctx.prefix());

        let keep_base = !(args.unset_system || config.inject.unset_system);
        let (folded, removed) = sources.merge_case_insensitive(keep_base)?;
        report_removed(&removed);
        print_folded(&folded, &removed, args.format)
    } else {
        log_ctx.set_stage("merge");
        tracing::debug!("{}merging job-scope declarations", log_ctx.prefix());

        let result = sources.merge()?;
        report_removed(&result.removed);
        active::replace(result.env.clone());
        print_env(&result.env, &result.removed, args.format)
    }
}

/// Run the props command.
///
/// Unlike generic injection, the file must exist: this entry point fails
/// loudly instead of contributing nothing.
///
/// # Errors
///
/// Returns `FsError::MissingRequiredFile` for an absent file and a
/// `ParseError` for unreadable or malformed properties text.
pub fn run_props_command(args: &PropsArgs) -> Result<()> {
    if !args.file.exists() {
        return Err(FsError::MissingRequiredFile(args.file.display().to_string()).into());
    }

    let context = env::current_env();
    let mut vars = props::load_file(&args.file, &context)?;
    resolve::resolve_self_with(&mut vars, &context);
    for name in resolve::remove_unresolved(&mut vars) {
        tracing::warn!(variable = %name, "variable dropped as unresolved");
    }

    print_env(&vars, &[], args.format)
}

/// Parses repeated `KEY=VALUE` arguments into an ordered map.
pub(super) fn parse_var_pairs(pairs: &[String]) -> Result<Env> {
    let mut vars = Env::new();
    for pair in pairs {
        match pair.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                vars.set(key.trim(), value);
            }
            _ => {
                return Err(bail_out(format!("invalid variable '{pair}', expected KEY=VALUE")).into());
            }
        }
    }
    Ok(vars)
}

fn report_removed(removed: &[RemovedVariable]) {
    for r in removed {
        tracing::warn!(variable = %r.name, stage = %r.stage, "variable dropped as unresolved");
    }
    if !removed.is_empty() {
        tracing::info!(count = removed.len(), "variables dropped during injection");
    }
}

fn print_env(vars: &Env, removed: &[RemovedVariable], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (key, value) in vars.iter() {
                println!("{key}={value}");
            }
        }
        OutputFormat::Json => {
            let out = serde_json::json!({
                "env": vars.to_map(),
                "removed": removed,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

fn print_folded(folded: &FoldedEnv, removed: &[RemovedVariable], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (key, value) in folded.iter() {
                println!("{key}={value}");
            }
        }
        OutputFormat::Json => {
            let env: serde_json::Map<String, serde_json::Value> = folded
                .iter()
                .map(|(k, v)| (k.to_owned(), serde_json::Value::String(v.to_owned())))
                .collect();
            let out = serde_json::json!({
                "env": env,
                "removed": removed,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
