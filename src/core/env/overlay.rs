// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Case-insensitive environment overlay for node/global scope.
//!
//! # Architecture
//!
//! ```text
//! overlay_case_insensitive(base, overlay, keep_base)
//!   overlay resolved against base (single pass + fixpoint + drop)
//!   keep_base=false  -> overlay only ("unset system variables" mode)
//!   keep_base=true   -> base first, overridden key-by-key (EnvKey fold)
//!        |
//!        v
//!   FoldedEnv: BTreeMap<EnvKey, String>, case-insensitive order
//! ```
//!
//! Job/build scope never goes through here; it stays case-sensitive.

use std::collections::BTreeMap;

use super::Env;
use super::types::EnvKey;
use crate::core::resolve;

/// An environment ordered and compared case-insensitively.
///
/// Stored keys retain the case of whichever entry was inserted first;
/// later inserts under any casing override the value only.
#[derive(Debug, Clone, Default)]
pub struct FoldedEnv {
    vars: BTreeMap<EnvKey, String>,
}

impl FoldedEnv {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Sets a variable; any existing entry matching case-insensitively is
    /// overridden in place, keeping its original key case.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(EnvKey::new(key.into()), value.into());
        self
    }

    /// Gets a variable value, comparing case-insensitively.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(&EnvKey::new(key)).map(String::as_str)
    }

    /// Returns an iterator in case-insensitive alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl PartialEq for FoldedEnv {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for FoldedEnv {}

/// Combines node/global-scope environments with case-insensitive keys.
///
/// `overlay` is resolved against `base` first (single external pass, then
/// fixpoint with `base` as fallback, then unresolved drop) so node-level
/// declarations may reference already-known node variables. With
/// `keep_base` false the base is excluded entirely; otherwise it is laid
/// down first and overridden key-by-key.
///
/// Returns the folded environment and the names dropped as unresolved.
#[must_use]
pub fn overlay_case_insensitive(
    base: &Env,
    overlay: &Env,
    keep_base: bool,
) -> (FoldedEnv, Vec<String>) {
    let mut resolved = overlay.clone();
    resolve::resolve_against(&mut resolved, base);
    resolve::resolve_self_with(&mut resolved, base);
    let removed = resolve::remove_unresolved(&mut resolved);

    let mut folded = FoldedEnv::new();
    if keep_base {
        for (key, value) in base.iter() {
            folded.set(key, value);
        }
    }
    for (key, value) in resolved.iter() {
        folded.set(key, value);
    }

    (folded, removed)
}
