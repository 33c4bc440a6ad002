// envvars-to-dotenv: dotenv generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Template file parsing.
//!
//! # Line Format
//!
//! ```text
//! KEY=default    key "KEY", default "default"
//! KEY=           key "KEY", default ""
//! KEY            key "KEY", no default
//! KEY=a=b        key "KEY", default "a"      (ValueSegments::First)
//!                key "KEY", default "a=b"    (ValueSegments::Rest)
//! <empty line>   skipped
//! ```
//!
//! Lines are split on `\n` only and never trimmed. A repeated key keeps the
//! position of its first occurrence and the default of its last.

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::path::Path;

use crate::config::types::ValueSegments;
use crate::error::{DotenvError, DotenvResult};

/// One parsed template line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub key: String,
    pub default: Option<String>,
}

impl TemplateEntry {
    /// Parses a single non-empty line.
    #[must_use]
    pub fn parse(line: &str, segments: ValueSegments) -> Self {
        let (key, default) = match line.split_once('=') {
            None => (line, None),
            Some((key, rest)) => match segments {
                ValueSegments::First => (key, rest.split('=').next()),
                ValueSegments::Rest => (key, Some(rest)),
            },
        };
        Self {
            key: key.to_string(),
            default: default.map(str::to_string),
        }
    }
}

/// Template entries in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    entries: Vec<TemplateEntry>,
    index: HashMap<String, usize>,
}

impl Template {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses template text.
    #[must_use]
    pub fn parse(content: &str, segments: ValueSegments) -> Self {
        let mut template = Self::new();
        for line in content.split('\n').filter(|line| !line.is_empty()) {
            let entry = TemplateEntry::parse(line, segments);
            tracing::trace!(key = %entry.key, default = ?entry.default, "template entry");
            template.insert(entry);
        }
        template
    }

    /// Reads and parses a template file.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `DotenvError::Read` if the file cannot be read.
    pub fn load(path: &Path, segments: ValueSegments) -> DotenvResult<Self> {
        let bytes = std::fs::read(path).map_err(|source| DotenvError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let template = Self::parse(&String::from_utf8_lossy(&bytes), segments);
        tracing::debug!(
            path = %path.display(),
            bytes = bytes.len(),
            keys = template.len(),
            "loaded template"
        );
        Ok(template)
    }

    /// Adds an entry, overwriting the default of an existing key in place.
    pub fn insert(&mut self, entry: TemplateEntry) {
        if let Some(&pos) = self.index.get(&entry.key) {
            self.entries[pos].default = entry.default;
        } else {
            self.index.insert(entry.key.clone(), self.entries.len());
            self.entries.push(entry);
        }
    }

    /// Default for `key`. The outer `Option` is `None` when the key is not declared.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].default.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
