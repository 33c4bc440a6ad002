// envvars-to-dotenv: dotenv generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings sections.
//!
//! ```text
//! [template] value_segments: first (default) | rest
//! [resolve]  empty_value:    fallback (default) | override
//! [output]   missing_value:  "undefined" (default)
//! ```

use serde::{Deserialize, Serialize};

/// How much of a template line after the first `=` becomes the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSegments {
    /// Up to the next `=`; the rest of the line is dropped.
    #[default]
    First,
    /// Everything after the first `=`.
    Rest,
}

/// What an environment variable that is set but empty does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyValuePolicy {
    /// Treated as unset; the template default is used.
    #[default]
    Fallback,
    /// The empty value wins over the default.
    Override,
}

/// Missing value placeholder used by the historic tool.
pub const UNDEFINED: &str = "undefined";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateSettings {
    pub value_segments: ValueSegments,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolveSettings {
    pub empty_value: EmptyValuePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    /// Written for keys that have neither an environment value nor a default.
    pub missing_value: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            missing_value: UNDEFINED.to_string(),
        }
    }
}
