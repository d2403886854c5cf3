// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable containers.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write IndexMap<String, String>)
//! Sources: current_env(), Env::from_map(), parsed properties
//! Job scope: case-sensitive, insertion-ordered
//!
//! FoldedEnv (BTreeMap<EnvKey, String>)
//! Node/global scope: case-insensitive compare and order
//!
//! active: process-wide fallback base (RwLock, copy-on-read)
//! ```

pub mod active;
pub mod container;
pub mod overlay;
pub mod types;


pub use container::Env;
pub use overlay::{FoldedEnv, overlay_case_insensitive};

/// Captures the current process environment in OS order.
#[must_use]
pub fn current_env() -> Env {
    std::env::vars().collect()
}
