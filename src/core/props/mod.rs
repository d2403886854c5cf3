// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Properties-text declarations.
//!
//! # Architecture
//!
//! ```text
//! parse_content(text, context) -> Env   inline declarations
//! load_file(path, context)     -> Env   path declarations
//!        |
//!        v
//! escape pre-pass (Windows paths) -> properties parsing
//! -> per-entry macro resolution against context
//! ```
//!
//! A parse error is fatal to the caller's whole merge; there is no
//! partial result. Whether a *missing* file is fatal is the caller's
//! policy, not this module's.

pub mod escape;
pub mod parser;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::core::env::Env;
use crate::error::{ParseError, Result};

/// Parses inline properties text, resolving keys and values against
/// `context`.
///
/// # Errors
///
/// Returns a [`ParseError`] for malformed escape sequences.
pub fn parse_content(text: &str, context: &Env) -> Result<Env> {
    Ok(parser::parse(text, context)?)
}

/// Reads and parses a properties file, resolving keys and values against
/// `context`.
///
/// # Errors
///
/// Returns a [`ParseError`] if the file cannot be read or contains
/// malformed escape sequences.
pub fn load_file(path: &Path, context: &Env) -> Result<Env> {
    let text = std::fs::read_to_string(path).map_err(|source| ParseError::Read {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded properties file");
    parse_content(&text, context)
}
