// envvars-to-dotenv: dotenv generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Validated options for a generator run.

use std::path::PathBuf;

use super::flags::{FlagValue, Flags};
use crate::error::{DotenvError, DotenvResult};
use crate::logging::{LogConfig, LogLevel};

/// Flags that must be present and non-empty.
pub const REQUIRED_FLAGS: [&str; 2] = ["input", "output"];

/// Options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Template file.
    pub input: PathBuf,
    /// Generated env file.
    pub output: PathBuf,
    /// Extra settings file (`--config`).
    pub config: Option<PathBuf>,
    /// Console verbosity (`--log-level`).
    pub log_level: Option<LogLevel>,
    /// Log file (`--log-file`).
    pub log_file: Option<PathBuf>,
}

impl Options {
    /// Validates flags into options.
    ///
    /// # Errors
    ///
    /// `MissingArgument` lists every required flag that is absent or empty.
    /// `InvalidArgument` is returned when a path flag is a bare switch or the
    /// log level is not 0-6.
    pub fn from_flags(flags: &Flags) -> DotenvResult<Self> {
        let missing: Vec<String> = REQUIRED_FLAGS
            .iter()
            .filter(|name| !flags.is_truthy(name))
            .map(ToString::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(DotenvError::MissingArgument { names: missing });
        }

        let log_level = optional_value(flags, "log-level")?
            .map(|raw| {
                raw.parse::<LogLevel>()
                    .map_err(|message| DotenvError::InvalidArgument {
                        name: "log-level".to_string(),
                        message,
                    })
            })
            .transpose()?;

        Ok(Self {
            input: required_path(flags, "input")?,
            output: required_path(flags, "output")?,
            config: optional_value(flags, "config")?.map(PathBuf::from),
            log_level,
            log_file: optional_value(flags, "log-file")?.map(PathBuf::from),
        })
    }

    /// Logging configuration derived from `--log-level` and `--log-file`.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        let console_level = self.log_level.unwrap_or_default();
        LogConfig::builder()
            .with_console_level(console_level)
            .maybe_with_log_file(self.log_file.as_ref().map(|p| p.display().to_string()))
            .build()
    }
}

fn required_path(flags: &Flags, name: &str) -> DotenvResult<PathBuf> {
    optional_value(flags, name)?
        .map(PathBuf::from)
        .ok_or_else(|| DotenvError::MissingArgument {
            names: vec![name.to_string()],
        })
}

/// A truthy flag's text; falsy flags count as absent.
fn optional_value<'a>(flags: &'a Flags, name: &str) -> DotenvResult<Option<&'a str>> {
    match flags.truthy(name) {
        None => Ok(None),
        Some(FlagValue::Value(v)) => Ok(Some(v)),
        Some(FlagValue::Switch) => Err(DotenvError::InvalidArgument {
            name: name.to_string(),
            message: "expected a value, use --name=value".to_string(),
        }),
    }
}
