// envvars-to-dotenv: dotenv generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Generate command: template + environment --> env file.
//!
//! ```text
//! Settings::load --> Template::load --> resolve(env) --> render --> write
//!     |                  |                                            |
//!  Config error      Read error                                  Write error
//! ```


use anyhow::Context;

use crate::cli::Options;
use crate::config::Settings;
use crate::env::{EnvLookup, current_env};
use crate::error::{DotenvResult, Result};
use crate::output;
use crate::resolve::{ResolvedMapping, Source, resolve};
use crate::template::Template;

/// Message printed after the output file has been written.
pub const SUCCESS_MESSAGE: &str = "Success";

/// Main handler: resolves against the process environment and prints
/// [`SUCCESS_MESSAGE`] once the file is written.
///
/// # Errors
///
/// Returns an error if the settings are invalid, the template cannot be read,
/// or the output cannot be written.
pub fn run_generate_command(options: &Options) -> Result<()> {
    let settings = Settings::load(options.config.as_deref()).context("failed to load settings")?;
    let env = current_env();
    tracing::debug!(variables = env.len(), "captured environment");

    generate(options, &settings, &env)?;
    println!("{SUCCESS_MESSAGE}");
    Ok(())
}

/// Reads the template, resolves it against `env` and writes the output.
///
/// Returns the resolved mapping for reporting.
///
/// # Errors
///
/// Returns `DotenvError::Read` or `DotenvError::Write`.
pub fn generate<E: EnvLookup + ?Sized>(
    options: &Options,
    settings: &Settings,
    env: &E,
) -> DotenvResult<ResolvedMapping> {
    let template = Template::load(&options.input, settings.template.value_segments)?;
    let mapping = resolve(&template, env, settings.resolve.empty_value);

    let missing = mapping
        .iter()
        .filter(|r| r.source == Source::Missing)
        .map(|r| r.key.as_str())
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        tracing::warn!(
            keys = %missing.join(","),
            placeholder = %settings.output.missing_value,
            "no value for some keys"
        );
    }

    let content = output::render(&mapping, &settings.output.missing_value);
    output::write(&options.output, &content)?;

    tracing::info!(
        output = %options.output.display(),
        entries = mapping.len(),
        from_env = mapping.count(Source::Environment),
        from_default = mapping.count(Source::Default),
        missing = missing.len(),
        "env file written"
    );
    Ok(mapping)
}
