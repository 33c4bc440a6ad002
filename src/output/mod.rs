// envvars-to-dotenv: dotenv generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env file serialization and writing.
//!
//! ```text
//! ResolvedMapping --> render() --> "KEY=VALUE\n" per entry
//!                                      |
//!                                      v
//!                     write() create-or-truncate, one call
//! ```
//!
//! Values are written verbatim: no quoting, no escaping.


use std::fmt::Write as _;
use std::path::Path;

use crate::error::{DotenvError, DotenvResult};
use crate::resolve::ResolvedMapping;

/// Renders `KEY=VALUE` lines, substituting `missing_value` for absent values.
#[must_use]
pub fn render(mapping: &ResolvedMapping, missing_value: &str) -> String {
    mapping.iter().fold(String::new(), |mut out, entry| {
        let value = entry.value.as_deref().unwrap_or(missing_value);
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}={value}", entry.key);
        out
    })
}

/// Writes `content` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `DotenvError::Write` if the file cannot be created or written.
pub fn write(path: &Path, content: &str) -> DotenvResult<()> {
    std::fs::write(path, content).map_err(|source| DotenvError::Write {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote env file");
    Ok(())
}
