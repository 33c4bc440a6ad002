// envvars-to-dotenv: dotenv generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              DotenvError
//!                   |
//!   +---------+-----+-----+-------+--------+
//!   v         v           v       v        v
//! Missing   Invalid     Read    Write    Config
//! Argument  Argument    (in)    (out)    Box
//!
//! ConfigError  ParseError, InvalidValue, NotFound
//! ```
//!
//! Every variant terminates the run with exit status 1.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`DotenvError`].
pub type DotenvResult<T> = std::result::Result<T, DotenvError>;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum DotenvError {
    /// One or more required flags were absent or empty.
    #[error("missing arguments: {}\nDeclare as: --argument=value", .names.join(","))]
    MissingArgument { names: Vec<String> },

    /// A flag was present but its value is unusable.
    #[error("invalid argument '--{name}': {message}")]
    InvalidArgument { name: String, message: String },

    /// The template file could not be read.
    #[error("failed to read template '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("failed to write output '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Settings error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),
}

impl From<ConfigError> for DotenvError {
    fn from(err: ConfigError) -> Self {
        Self::Config(Box::new(err))
    }
}

// --- Config Errors ---

/// Settings-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse a settings file.
    #[error("failed to parse settings: {message}")]
    ParseError { message: String },

    /// Invalid settings value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Settings file not found.
    #[error("settings file not found: {0}")]
    NotFound(String),
}
