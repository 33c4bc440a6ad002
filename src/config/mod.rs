// envvars-to-dotenv: dotenv generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rendering settings.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults (historic behavior)
//! 2. envvars-to-dotenv.toml (cwd, optional)
//! 3. --config=<path>
//! ```
//!
//! No environment variables are read as settings; every variable in the
//! environment is a candidate value for the template.
//!
//! # Example
//!
//! ```toml
//! [template]
//! value_segments = "rest"
//!
//! [resolve]
//! empty_value = "override"
//!
//! [output]
//! missing_value = ""
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, DotenvResult};

use loader::ConfigLoader;
use types::{OutputSettings, ResolveSettings, TemplateSettings};

/// Settings file looked up in the current directory.
pub const DEFAULT_SETTINGS_FILE: &str = "envvars-to-dotenv.toml";

/// Complete rendering settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Template parsing options.
    pub template: TemplateSettings,
    /// Resolution options.
    pub resolve: ResolveSettings,
    /// Output options.
    pub output: OutputSettings,
}

impl Settings {
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Loads the default settings file (if present) and an optional extra file.
    ///
    /// # Errors
    ///
    /// Returns an error if `extra` does not exist or either file is invalid.
    pub fn load(extra: Option<&Path>) -> DotenvResult<Self> {
        let mut loader = Self::builder().add_toml_file_optional(DEFAULT_SETTINGS_FILE);
        if let Some(path) = extra {
            loader = loader.add_toml_file(path);
        }
        for line in loader.format_loaded_files() {
            tracing::debug!("settings source {line}");
        }
        loader.build()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Settings` structure.
    pub fn parse(content: &str) -> DotenvResult<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Rejects values that would corrupt the output format.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `output.missing_value` contains
    /// a newline.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.missing_value.contains('\n') {
            return Err(ConfigError::InvalidValue {
                section: "output".to_string(),
                key: "missing_value".to_string(),
                message: "must not contain a newline".to_string(),
            });
        }
        Ok(())
    }
}
