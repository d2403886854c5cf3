// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command handlers.
//!
//! ```text
//! cli::Command --> cmd::run_*_command
//! inject / props / options / configs
//! ```

pub mod config;
pub mod inject;
