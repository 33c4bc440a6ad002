// envvars-to-dotenv: dotenv generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable snapshot.
//!
//! # Architecture
//!
//! ```text
//! EnvLookup (trait)  get(name) -> Option<&str>
//!     ^
//!     |
//! Env (BTreeMap<EnvKey, String>, read-only)
//! Sources: current_env(), Env::from_map(), Env::from_iter()
//! ```
//!
//! - **Case-insensitive on Windows**, exact elsewhere
//! - **Captured once**: later changes to the process environment are not seen

pub mod container;
pub mod types;


pub use container::Env;

/// Read access to a set of environment variables.
///
/// The resolver only sees the environment through this trait, so tests can
/// hand it a plain map instead of mutating the process.
pub trait EnvLookup {
    /// Value of `name`, if set.
    fn get(&self, name: &str) -> Option<&str>;
}

impl EnvLookup for std::collections::BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        Self::get(self, name).map(String::as_str)
    }
}

impl EnvLookup for std::collections::HashMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        Self::get(self, name).map(String::as_str)
    }
}

/// Captures the current process environment.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
#[must_use]
pub fn current_env() -> Env {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
