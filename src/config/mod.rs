// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. local envinject.toml (cwd)
//! 3. --config FILE
//! 4. ENVINJECT_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVINJECT_GLOBAL_OUTPUT_LOG_LEVEL=4  → global.output_log_level = 4
//! ENVINJECT_INJECT_FILE_REQUIRED=true  → inject.file_required = true
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::error::Result;

use loader::ConfigLoader;
pub use types::{GlobalConfig, InjectConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Injection defaults.
    pub inject: InjectConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envinject_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("envinject.toml")
    ///     .with_env_prefix("ENVINJECT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks cross-field constraints of all sections.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for contradictory settings.
    pub fn validate(&self) -> Result<()> {
        self.inject.validate()?;
        Ok(())
    }

    /// Formats every option as an aligned `section.key = value` line.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = std::collections::BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_inject_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut std::collections::BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_inject_options(&self, options: &mut std::collections::BTreeMap<String, String>) {
        options.insert(
            "inject.properties_file".into(),
            self.inject
                .properties_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert(
            "inject.properties_content".into(),
            self.inject.properties_content.clone().unwrap_or_default(),
        );
        options.insert(
            "inject.root".into(),
            self.inject
                .root
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert(
            "inject.file_required".into(),
            self.inject.file_required.to_string(),
        );
        options.insert(
            "inject.case_insensitive".into(),
            self.inject.case_insensitive.to_string(),
        );
        options.insert(
            "inject.unset_system".into(),
            self.inject.unset_system.to_string(),
        );
        for (key, value) in &self.inject.vars {
            options.insert(format!("inject.vars.{key}"), value.clone());
        }
    }
}
