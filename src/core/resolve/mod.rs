// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Macro reference resolution.
//!
//! # Architecture
//!
//! ```text
//! substitute()         one value, one pass, ${NAME} only
//! resolve_against()    target x context, single pass, no recursion
//! resolve_self_with()  fixpoint: passes until the unresolved count
//!                      stabilizes (cycles converge, never loop)
//! remove_unresolved()  drop values still holding a ${ token, report
//!                      each removal through the tracing sink
//! ```
//!
//! `${NAME}` is the only macro convention; a bare `$NAME` is never
//! expanded and a literal `$` outside a `${...}` token is left alone.

use regex::Regex;
use std::sync::LazyLock;

use crate::core::env::Env;


/// Matches a `${NAME}` macro reference. Names are the usual environment
/// identifier alphabet; anything else stays literal.
static MACRO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("macro pattern is valid")
});

/// Returns true if the value still contains an unresolved `${` token.
///
/// A literal `$` on its own does not count; only the reference opener
/// marks a value as unresolved.
#[must_use]
pub fn is_unresolved(value: &str) -> bool {
    value.contains("${")
}

/// Replaces every `${NAME}` reference in `input` using `lookup`.
///
/// Names the lookup does not know stay as literal unchanged text.
/// Replacement text is not rescanned, so this is exactly one pass.
pub fn substitute(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    if !input.contains("${") {
        return input.to_owned();
    }
    MACRO_RE
        .replace_all(input, |caps: &regex::Captures<'_>| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_owned())
        })
        .into_owned()
}

/// Single-pass external resolution: every value in `target` has its
/// `${NAME}` references replaced from `context`; unknown names are left
/// untouched and no recursive expansion happens within the pass.
pub fn resolve_against(target: &mut Env, context: &Env) {
    if target.is_empty() {
        return;
    }
    let vars = target.vars_mut();
    for i in 0..vars.len() {
        let resolved = match vars.get_index(i) {
            Some((_, value)) if is_unresolved(value) => {
                substitute(value, |name| context.get(name).map(str::to_owned))
            }
            _ => continue,
        };
        if let Some((_, slot)) = vars.get_index_mut(i) {
            *slot = resolved;
        }
    }
}

/// Fixpoint self-resolution using `target` itself as context.
pub fn resolve_self(target: &mut Env) {
    resolve_self_with(target, &Env::new());
}

/// Fixpoint self-resolution with a supplemental fallback context.
///
/// Each pass substitutes in place, entry by entry, looking names up in
/// `target` first (observing values already updated earlier in the same
/// pass) and `fallback` second. After a pass, the number of values still
/// holding an unresolved reference is counted; iteration stops when that
/// count reaches zero or repeats between two consecutive passes. A cycle
/// therefore converges to a stable non-zero count instead of looping.
pub fn resolve_self_with(target: &mut Env, fallback: &Env) {
    if target.is_empty() {
        return;
    }
    let vars = target.vars_mut();
    let mut previous = usize::MAX;

    loop {
        let mut unresolved = 0;

        for i in 0..vars.len() {
            let resolved = match vars.get_index(i) {
                Some((_, value)) if is_unresolved(value) => substitute(value, |name| {
                    vars.get(name)
                        .cloned()
                        .or_else(|| fallback.get(name).map(str::to_owned))
                }),
                _ => continue,
            };
            if is_unresolved(&resolved) {
                unresolved += 1;
            }
            if let Some((_, slot)) = vars.get_index_mut(i) {
                *slot = resolved;
            }
        }

        if unresolved == 0 || unresolved == previous {
            break;
        }
        previous = unresolved;
    }
}

/// Deletes every entry whose value still contains an unresolved
/// reference, preserving the order of the remaining entries.
///
/// Removals are diagnostics, not errors: each one is logged and the
/// removed names are returned so the caller can tag them with the stage
/// that dropped them.
pub fn remove_unresolved(target: &mut Env) -> Vec<String> {
    if target.is_empty() {
        return Vec::new();
    }
    let vars = target.vars_mut();
    let doomed: Vec<String> = vars
        .iter()
        .filter(|(_, value)| is_unresolved(value))
        .map(|(key, _)| key.clone())
        .collect();

    for key in &doomed {
        vars.shift_remove(key);
        tracing::warn!(variable = %key, "removing variable with unresolved reference");
    }

    doomed
}
