// envvars-to-dotenv: dotenv generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command-line handling.
//!
//! # Flag Grammar
//!
//! ```text
//! --name=value   Value("value")   (text after a second '=' is dropped)
//! --name=        Value("")        falsy
//! --name         Switch           truthy
//! anything else  ignored
//! ```
//!
//! # Invocation
//!
//! ```text
//! parse_flags(tokens) --> Flags
//!        |
//!        v
//! Invocation::from_flags
//!   help truthy         --> Help
//!   input/output falsy  --> MissingArgument
//!   otherwise           --> Run(Options)
//! ```

pub mod flags;
pub mod options;


pub use flags::{FlagValue, Flags, parse_flags};
pub use options::Options;

use crate::error::DotenvResult;

/// Usage text printed for `--help`.
pub const USAGE: &str = "usage: envvars-to-dotenv --input=.env.example --output=.env

    arguments:
    --input=[input file with variables to look for]
    --output=[results key/value pairs file to generate]

    options:
    --config=[extra settings file, TOML]
    --log-level=[0-6, default 2]
    --log-file=[also write logs to this file]
";

/// What the process should do after reading its arguments.
#[derive(Debug)]
pub enum Invocation {
    /// Print [`USAGE`] and exit successfully.
    Help,
    /// Run the generator.
    Run(Options),
}

impl Invocation {
    /// Interprets parsed flags.
    ///
    /// `--help` wins over everything, including missing required flags.
    ///
    /// # Errors
    ///
    /// Returns `DotenvError::MissingArgument` naming every absent required
    /// flag, or `DotenvError::InvalidArgument` for unusable values.
    pub fn from_flags(flags: &Flags) -> DotenvResult<Self> {
        if flags.is_truthy("help") {
            return Ok(Self::Help);
        }
        Options::from_flags(flags).map(Self::Run)
    }
}

/// Parses the process arguments, skipping the program name.
///
/// # Errors
///
/// See [`Invocation::from_flags`].
pub fn parse() -> DotenvResult<Invocation> {
    parse_from(std::env::args_os().skip(1))
}

/// Parses arguments from an iterator (program name excluded).
///
/// Non-UTF-8 tokens are converted lossily.
///
/// # Errors
///
/// See [`Invocation::from_flags`].
pub fn parse_from<I, T>(iter: I) -> DotenvResult<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString>,
{
    let tokens: Vec<String> = iter
        .into_iter()
        .map(|t| t.into().to_string_lossy().into_owned())
        .collect();
    let flags = parse_flags(&tokens);
    Invocation::from_flags(&flags)
}
