// envvars-to-dotenv: dotenv generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! cli::Invocation::Run(Options) --> cmd::generate::run_generate_command
//! ```

pub mod generate;
