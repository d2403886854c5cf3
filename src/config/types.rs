// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, InjectConfig
//! [global]  log levels, log file
//! [inject]  default declarations and merge policy
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stdout output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file; file logging is disabled when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Default injection declarations and merge policy.
///
/// Everything here can be overridden per invocation from the command
/// line; the config file supplies standing defaults for a workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InjectConfig {
    /// Properties file to parse; macro-expanded before being opened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties_file: Option<PathBuf>,
    /// Inline properties text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties_content: Option<String>,
    /// Static variables merged last, as an externally computed map.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub vars: BTreeMap<String, String>,
    /// Root for relative properties-file paths (default: cwd).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Treat a missing properties file as a hard error.
    pub file_required: bool,
    /// Merge with case-insensitive keys (node/global scope).
    pub case_insensitive: bool,
    /// Exclude the system environment from the result; only declared
    /// variables survive. Requires `case_insensitive`.
    pub unset_system: bool,
}

impl InjectConfig {
    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` when `unset_system` is set
    /// without `case_insensitive`.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.unset_system && !self.case_insensitive {
            return Err(ConfigError::InvalidValue {
                section: "inject".to_string(),
                key: "unset_system".to_string(),
                message: "unset_system only applies to case-insensitive merges".to_string(),
            });
        }
        Ok(())
    }
}
