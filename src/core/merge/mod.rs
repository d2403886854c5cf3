// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered multi-source environment merging.
//!
//! # Architecture
//!
//! ```text
//! InjectionSources (builder)
//!   base | properties_file | properties_content | computed[] | root
//!        |
//!        v
//! merge(): base verbatim
//!   -> pathVars (4.1 vs base, missing file: empty or hard error)
//!   -> contentVars (4.1 vs base)
//!   -> chaining: content ${KEY} may extend pathVars[KEY]
//!   -> content over path, fixpoint with base fallback, drop (Properties)
//!   -> computed maps last, resolved vs accumulated, drop (Computed)
//!        |
//!        v
//! InjectionResult { env, removed: [(name, stage)] }
//! ```
//!
//! merge_case_insensitive() runs the same declaration pipeline but folds
//! the outcome over the base with case-insensitive keys (node/global
//! scope). A parse error aborts the whole merge; there is no partial
//! result.


use bon::Builder;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::core::env::{Env, FoldedEnv, overlay_case_insensitive};
use crate::core::{props, resolve};
use crate::error::{FsError, Result};

/// The merge stage that dropped a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InjectionStage {
    /// Path/content declarations (job scope).
    Properties,
    /// Externally computed maps.
    Computed,
    /// Case-insensitive node/global overlay.
    Overlay,
}

impl InjectionStage {
    /// Get a short string representation for log output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Properties => "properties",
            Self::Computed => "computed",
            Self::Overlay => "overlay",
        }
    }
}

impl std::fmt::Display for InjectionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A variable removed because its value kept an unresolved reference.
///
/// This is a diagnostic, not an error: the merge succeeds without the
/// variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedVariable {
    pub name: String,
    pub stage: InjectionStage,
}

/// The outcome of one injection operation.
#[derive(Debug, Clone)]
pub struct InjectionResult {
    /// The final merged environment.
    pub env: Env,
    /// Variables dropped as unresolved, tagged with the removing stage.
    pub removed: Vec<RemovedVariable>,
}

/// The ordered inputs of one injection operation.
///
/// Built fresh per injection; the engine keeps no state between calls.
#[derive(Debug, Clone, Default, Builder)]
pub struct InjectionSources {
    /// Previous-step variables plus workspace/build metadata, already
    /// resolved upstream; copied verbatim into the result.
    #[builder(setters(name = with_base), default)]
    base: Env,
    /// Properties file path; macro-expanded against the base before being
    /// opened, and resolved against `root` when relative and not already
    /// existing as given.
    #[builder(setters(name = with_properties_file))]
    properties_file: Option<PathBuf>,
    /// Inline properties text.
    #[builder(setters(name = with_properties_content))]
    properties_content: Option<String>,
    /// Pre-resolved maps from external collaborators, merged last in
    /// order with the highest precedence.
    #[builder(setters(name = with_computed), default)]
    computed: Vec<Env>,
    /// Root for relative properties-file paths.
    #[builder(setters(name = with_root))]
    root: Option<PathBuf>,
    /// When set, a missing properties file is a hard error instead of an
    /// empty contribution.
    #[builder(setters(name = with_file_required), default)]
    file_required: bool,
}

impl InjectionSources {
    /// Runs the canonical job-scope merge sequence.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` for malformed properties text or an
    /// unreadable backing file, and `FsError::MissingRequiredFile` when
    /// the file is required but absent. Unresolved variables are not
    /// errors; they are dropped and reported in the result.
    pub fn merge(&self) -> Result<InjectionResult> {
        let mut removed = Vec::new();

        let mut working = self.collect_declarations()?;
        resolve::resolve_self_with(&mut working, &self.base);
        removed.extend(tag_removed(
            resolve::remove_unresolved(&mut working),
            InjectionStage::Properties,
        ));

        let mut result = self.base.clone();
        result.extend(&working);

        for map in &self.computed {
            let mut vars = map.clone();
            resolve::resolve_against(&mut vars, &result);
            resolve::resolve_self_with(&mut vars, &result);
            removed.extend(tag_removed(
                resolve::remove_unresolved(&mut vars),
                InjectionStage::Computed,
            ));
            result.extend(&vars);
        }

        tracing::debug!(
            variables = result.len(),
            dropped = removed.len(),
            "merged injection sources"
        );
        Ok(InjectionResult {
            env: result,
            removed,
        })
    }

    /// Runs the declaration pipeline, then folds the outcome over the
    /// base with case-insensitive keys (node/global scope).
    ///
    /// With `keep_base` false only the declared variables are returned
    /// ("unset system variables" mode).
    ///
    /// # Errors
    ///
    /// Same failure semantics as [`merge`](Self::merge).
    pub fn merge_case_insensitive(
        &self,
        keep_base: bool,
    ) -> Result<(FoldedEnv, Vec<RemovedVariable>)> {
        let mut overlay = self.collect_declarations()?;
        for map in &self.computed {
            overlay.extend(map);
        }

        let (folded, dropped) = overlay_case_insensitive(&self.base, &overlay, keep_base);
        Ok((folded, tag_removed(dropped, InjectionStage::Overlay)))
    }

    /// Steps 2-3 of the canonical sequence: parse the path and content
    /// declarations against the base, apply the chaining rule, and merge
    /// with content winning. Unresolved references are left intact for
    /// the caller's resolution pass.
    fn collect_declarations(&self) -> Result<Env> {
        let path_vars = match &self.properties_file {
            Some(path) => self.load_path_declaration(path)?,
            None => Env::new(),
        };

        let mut content_vars = match &self.properties_content {
            Some(text) => props::parse_content(text, &self.base)?,
            None => Env::new(),
        };

        chain_content_vars(&mut content_vars, &path_vars);

        let mut working = path_vars;
        working.extend(&content_vars);
        Ok(working)
    }

    /// Expands and locates the properties file, then parses it against
    /// the base. A missing file contributes the empty map unless the
    /// sources mark it required.
    fn load_path_declaration(&self, raw: &Path) -> Result<Env> {
        let expanded = resolve::substitute(&raw.to_string_lossy(), |name| {
            self.base.get(name).map(str::to_owned)
        });
        let mut path = PathBuf::from(expanded.trim());

        if !path.exists()
            && path.is_relative()
            && let Some(root) = &self.root
        {
            path = root.join(path);
        }

        if !path.exists() {
            if self.file_required {
                return Err(FsError::MissingRequiredFile(path.display().to_string()).into());
            }
            tracing::info!(
                path = %path.display(),
                "properties file not found, contributing nothing"
            );
            return Ok(Env::new());
        }

        props::load_file(&path, &self.base)
    }
}

/// Applies the chaining rule: a content value whose `${KEY}` reference
/// names its own key is re-resolved with the file-declared value of that
/// key, so inline content extends rather than blindly overwrites.
fn chain_content_vars(content: &mut Env, path_vars: &Env) {
    if content.is_empty() || path_vars.is_empty() {
        return;
    }
    let vars = content.vars_mut();
    for i in 0..vars.len() {
        let chained = match vars.get_index(i) {
            Some((key, value)) if resolve::is_unresolved(value) => match path_vars.get(key) {
                Some(path_value) => resolve::substitute(value, |name| {
                    (name == key.as_str()).then(|| path_value.to_owned())
                }),
                None => continue,
            },
            _ => continue,
        };
        if let Some((_, slot)) = vars.get_index_mut(i) {
            *slot = chained;
        }
    }
}

fn tag_removed(names: Vec<String>, stage: InjectionStage) -> Vec<RemovedVariable> {
    names
        .into_iter()
        .map(|name| RemovedVariable { name, stage })
        .collect()
}
