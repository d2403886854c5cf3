// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!           InjectError (~24 bytes)
//!                  |
//!    +--------+----+----+--------+------+
//!    |        |         |        |      |
//!    v        v         v        v      v
//!  Bail     Parse      Cfg      Fs   Io/Other
//!           Box        Box      Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Parse   UnicodeEscape, Read
//!   Config  ReadError, ParseError, MissingKey, InvalidValue, NotFound
//!   Fs      MissingRequiredFile, NotFound, IoError
//!
//! All variants boxed => InjectError fits in 24 bytes.
//! ```
//!
//! Unresolved-variable removal is not an error: it is reported as data in
//! the merge result and through the tracing sink.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`InjectError`].
pub type InjectResult<T> = std::result::Result<T, InjectError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum InjectError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Properties text could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] Box<ParseError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`InjectError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> InjectError {
    InjectError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for InjectError {
                fn from(err: $error) -> Self {
                    InjectError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ParseError => Parse,
    ConfigError => Config,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Parse Errors ---

/// Errors raised while parsing properties text.
///
/// A parse error is always fatal to the merge call that triggered it; a
/// partially-parsed properties block has no safe partial interpretation.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A `\uXXXX` escape did not contain four hex digits.
    #[error("malformed unicode escape '\\u{sequence}' on line {line}")]
    UnicodeEscape { line: usize, sequence: String },

    /// The backing properties file could not be read.
    #[error("failed to read properties file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// A properties file required to exist was absent.
    ///
    /// Only the required-file entry points raise this; generic injection
    /// treats a missing path as an empty contribution.
    #[error("required properties file not found: {0}")]
    MissingRequiredFile(String),

    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
