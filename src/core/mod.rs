// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core engine: environment containers, properties parsing, macro
//! resolution and source merging.

pub mod env;
pub mod merge;
pub mod props;
pub mod resolve;
