// envvars-to-dotenv: dotenv generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Merges template defaults with environment values.
//!
//! ```text
//! for key in template (in order):
//!   env[key] non-empty        --> Environment
//!   env[key] empty + Override --> Environment
//!   template default present  --> Default
//!   otherwise                 --> Missing
//! ```

#[cfg(test)]
mod tests;

use crate::config::types::EmptyValuePolicy;
use crate::env::EnvLookup;
use crate::template::Template;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Environment,
    Default,
    Missing,
}

/// One resolved key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub key: String,
    /// `None` only when the source is [`Source::Missing`].
    pub value: Option<String>,
    pub source: Source,
}

/// Resolved keys in template order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedMapping {
    entries: Vec<Resolved>,
}

impl ResolvedMapping {
    pub fn iter(&self) -> impl Iterator<Item = &Resolved> {
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

    /// Number of entries that came from `source`.
    #[must_use]
    pub fn count(&self, source: Source) -> usize {
        self.entries.iter().filter(|e| e.source == source).count()
    }
}

/// Resolves every template key against `env`.
#[must_use]
pub fn resolve<E: EnvLookup + ?Sized>(
    template: &Template,
    env: &E,
    policy: EmptyValuePolicy,
) -> ResolvedMapping {
    let entries = template
        .iter()
        .map(|entry| {
            let from_env = env.get(&entry.key).filter(|value| {
                !value.is_empty() || policy == EmptyValuePolicy::Override
            });
            let (value, source) = match (from_env, entry.default.as_deref()) {
                (Some(value), _) => (Some(value.to_string()), Source::Environment),
                (None, Some(default)) => (Some(default.to_string()), Source::Default),
                (None, None) => (None, Source::Missing),
            };
            tracing::trace!(key = %entry.key, ?source, "resolved");
            Resolved {
                key: entry.key.clone(),
                value,
                source,
            }
        })
        .collect();
    ResolvedMapping { entries }
}
