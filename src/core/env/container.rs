// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment container with copy-on-write semantics.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write)
//! data: Option<Arc<EnvData>> + owned flag
//! clone shares Arc until copy_for_write()
//!
//! IndexMap keeps first-occurrence order; lookups are case-sensitive
//! (job scope). Node/global scope goes through overlay::FoldedEnv.
//! ```

use super::types::EnvData;
use indexmap::IndexMap;
use std::sync::Arc;

/// An ordered set of environment variables with copy-on-write semantics.
///
/// This struct provides efficient cloning by sharing data between copies
/// until a modification is made. Iteration order is insertion order;
/// re-setting an existing key updates the value in place without moving
/// the entry.
///
/// # Thread Safety
/// `Env` is `Send` and `Sync` due to its use of `Arc`.
#[derive(Debug, Clone)]
pub struct Env {
    data: Option<Arc<EnvData>>,
    /// Whether we own the data exclusively (for copy-on-write)
    owned: bool,
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: None,
            owned: false,
        }
    }

    /// Creates an environment from an ordered map of variables.
    #[must_use]
    pub fn from_map(vars: IndexMap<String, String>) -> Self {
        let data = EnvData::from_vars(vars);
        Self {
            data: Some(Arc::new(data)),
            owned: true,
        }
    }

    /// Sets a variable, keeping the entry's original position when the
    /// key already exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars_mut().insert(key.into(), value.into());
        self
    }

    /// Gets a variable value (case-sensitive).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.vars().get(key).map(String::as_str))
    }

    /// Returns true if the variable is present (case-sensitive).
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes a variable, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.vars_mut().shift_remove(key);
        self
    }

    /// Merges `other` into `self`; `other` wins on key collision while the
    /// colliding entry keeps its original position.
    pub fn extend(&mut self, other: &Self) -> &mut Self {
        if other.is_empty() {
            return self;
        }
        let vars = self.vars_mut();
        for (key, value) in other.iter() {
            vars.insert(key.to_owned(), value.to_owned());
        }
        self
    }

    /// Returns all variables as an ordered map.
    #[must_use]
    pub fn to_map(&self) -> IndexMap<String, String> {
        self.data
            .as_ref()
            .map(|d| d.vars().clone())
            .unwrap_or_default()
    }

    /// Returns an iterator over variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .iter()
            .flat_map(|d| d.vars().iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.as_ref().is_none_or(|d| d.vars().is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.vars().len())
    }

    /// Mutable access to the underlying ordered map, copying shared data
    /// first. The resolver works directly on this map.
    pub(crate) fn vars_mut(&mut self) -> &mut IndexMap<String, String> {
        self.copy_for_write();
        let data = self.data.get_or_insert_with(|| Arc::new(EnvData::new()));
        Arc::make_mut(data).vars_mut()
    }

    /// Ensures we have exclusive ownership of the data for modification.
    fn copy_for_write(&mut self) {
        if self.owned {
            return;
        }

        match &self.data {
            Some(data) => {
                self.data = Some(Arc::new((**data).clone()));
            }
            None => {
                self.data = Some(Arc::new(EnvData::new()));
            }
        }

        self.owned = true;
    }
}

impl PartialEq for Env {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Env {}

impl FromIterator<(String, String)> for Env {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::from_map(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Env {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self::from_map(
            iter.into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        )
    }
}
