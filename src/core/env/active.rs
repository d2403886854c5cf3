// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process-wide "currently active" merged environment.
//!
//! # Architecture
//!
//! ```text
//! ACTIVE: RwLock<Env>
//! snapshot() -> read lock, cheap COW clone
//! replace()  -> write lock, whole-map swap in one critical section
//! ```
//!
//! The engine itself is stateless; this is the single shared fallback
//! base context collaborators may consult between injections. A reader
//! always observes either the previous or the new environment in full,
//! never a partially updated one.

use std::sync::{LazyLock, RwLock};

use super::Env;

static ACTIVE: LazyLock<RwLock<Env>> = LazyLock::new(|| RwLock::new(Env::new()));

/// Returns a copy of the active environment.
///
/// The copy shares storage with the store until either side is modified,
/// so resolution against a snapshot never observes later updates.
#[must_use]
pub fn snapshot() -> Env {
    match ACTIVE.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Replaces the active environment wholesale.
///
/// The swap happens under a single write section; concurrent readers see
/// either the old or the new contents, never an empty interim state.
pub fn replace(env: Env) {
    match ACTIVE.write() {
        Ok(mut guard) => *guard = env,
        Err(poisoned) => *poisoned.into_inner() = env,
    }
}
