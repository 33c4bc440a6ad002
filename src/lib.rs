// envvars-to-dotenv: dotenv generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! Reads a template of expected variable names (with optional defaults),
//! resolves each against the environment and writes a `KEY=VALUE` file.
//!
//! # Crate Architecture
//!
//! ```text
//!                     main.rs
//!                        |
//!              +---------+---------+
//!              v                   v
//!        cli (--flag=value)   cmd::generate
//!                                  |
//!        +------------+------------+------------+
//!        v            v            v            v
//!     config      template      resolve       output
//!    settings     parsing     env + default   render/write
//!                                  ^
//!                                  |
//!                                 env
//!                           EnvLookup snapshot
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod output;
pub mod resolve;
pub mod template;
