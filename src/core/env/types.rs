// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable storage.
//!
//! # Architecture
//!
//! ```text
//! EnvKey: case-insensitive compare/order, original case retained
//!         (node/global scope: PATH == Path == path)
//! EnvData: IndexMap<String, String>, first-occurrence order
//!          (job scope: case-sensitive)
//! ```

use indexmap::IndexMap;

/// A case-insensitive environment variable key.
///
/// Equality, ordering and hashing fold ASCII case; the stored string keeps
/// the case it was created with. Used by the node/global-scope overlay map,
/// never by job-scope environments.
#[derive(Debug, Clone, Eq)]
pub(super) struct EnvKey(String);

impl EnvKey {
    pub(super) fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl std::hash::Hash for EnvKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        for c in self.0.chars() {
            c.to_ascii_lowercase().hash(state);
        }
    }
}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0
            .to_ascii_lowercase()
            .cmp(&other.0.to_ascii_lowercase())
    }
}

/// Shared environment data for copy-on-write semantics.
///
/// Insertion order is the merge order: the resolver and the chaining rule
/// both rely on first-occurrence ordering being stable.
#[derive(Debug, Clone)]
pub(super) struct EnvData {
    vars: IndexMap<String, String>,
}

impl EnvData {
    pub(super) fn new() -> Self {
        Self {
            vars: IndexMap::new(),
        }
    }

    pub(super) const fn from_vars(vars: IndexMap<String, String>) -> Self {
        Self { vars }
    }

    pub(super) const fn vars(&self) -> &IndexMap<String, String> {
        &self.vars
    }

    pub(super) const fn vars_mut(&mut self) -> &mut IndexMap<String, String> {
        &mut self.vars
    }
}
