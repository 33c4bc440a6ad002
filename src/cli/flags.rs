// envvars-to-dotenv: dotenv generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Raw `--flag[=value]` tokenizer.

use std::collections::BTreeMap;

/// Value carried by a flag.
///
/// An absent flag is simply not in [`Flags`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// Given without `=`, e.g. `--help`.
    Switch,
    /// Given with `=`, possibly empty.
    Value(String),
}

impl FlagValue {
    /// A switch or a non-empty value.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Switch => true,
            Self::Value(v) => !v.is_empty(),
        }
    }

    /// The textual value, `None` for a switch.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Switch => None,
            Self::Value(v) => Some(v),
        }
    }
}

/// Flags by name. A repeated flag keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags(BTreeMap<String, FlagValue>);

impl Flags {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.0.get(name)
    }

    /// Whether `name` is present with a truthy value.
    #[must_use]
    pub fn is_truthy(&self, name: &str) -> bool {
        self.get(name).is_some_and(FlagValue::is_truthy)
    }

    /// The flag's value, or `None` when absent or falsy.
    #[must_use]
    pub fn truthy(&self, name: &str) -> Option<&FlagValue> {
        self.get(name).filter(|v| v.is_truthy())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Tokenizes arguments into [`Flags`].
///
/// Only tokens starting with `--` are considered. The token is split on
/// every `=`: the first piece names the flag, the second is its value and
/// anything after a second `=` is dropped.
#[must_use]
pub fn parse_flags<S: AsRef<str>>(tokens: &[S]) -> Flags {
    let mut flags = BTreeMap::new();
    for token in tokens {
        let Some(rest) = token.as_ref().strip_prefix("--") else {
            continue;
        };
        let mut pieces = rest.split('=');
        let name = pieces.next().unwrap_or_default();
        let value = pieces
            .next()
            .map_or(FlagValue::Switch, |v| FlagValue::Value(v.to_string()));
        flags.insert(name.to_string(), value);
    }
    Flags(flags)
}
