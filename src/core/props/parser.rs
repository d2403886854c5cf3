// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Properties-format parser.
//!
//! # Architecture
//!
//! ```text
//! logical_lines()  comments (#, !), blank lines, odd-trailing-backslash
//!                  continuation with leading whitespace trimmed
//! split_entry()    first unescaped = or : separates key from value
//! unescape()       \t \n \r \f, \uXXXX (malformed => ParseError),
//!                  \X collapses to X
//! per entry        unescape -> trim -> macro-resolve -> trim
//! ```
//!
//! Keys as well as values are macro-resolved against the caller context,
//! so variable names may depend on already-known variables. First
//! occurrence fixes an entry's position; duplicates update in place.

use super::escape::escape_windows_paths;
use crate::core::env::Env;
use crate::core::resolve::substitute;
use crate::error::ParseError;

/// Parses properties text into an ordered environment, resolving each key
/// and value against `context`.
pub(super) fn parse(text: &str, context: &Env) -> Result<Env, ParseError> {
    let escaped = escape_windows_paths(text);
    let lookup = |name: &str| context.get(name).map(str::to_owned);

    let mut vars = Env::new();
    for (number, logical) in logical_lines(&escaped) {
        let (raw_key, raw_value) = split_entry(&logical);

        let key_text = unescape(raw_key, number)?;
        let key = substitute(key_text.trim(), lookup).trim().to_owned();
        if key.is_empty() {
            tracing::debug!(line = number, "skipping entry with empty variable name");
            continue;
        }

        let value_text = unescape(raw_value, number)?;
        let value = substitute(value_text.trim(), lookup).trim().to_owned();

        vars.set(key, value);
    }
    Ok(vars)
}

/// Assembles logical lines: comments and blanks skipped, continuations
/// joined. Returns each logical line with the 1-based number of its first
/// natural line.
fn logical_lines(text: &str) -> Vec<(usize, String)> {
    let mut result = Vec::new();
    let mut iter = text.split('\n').enumerate();

    while let Some((idx, raw)) = iter.next() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut logical = trimmed.to_owned();
        while ends_with_odd_backslashes(&logical) {
            logical.pop();
            let Some((_, next_raw)) = iter.next() else {
                break;
            };
            let next = next_raw.strip_suffix('\r').unwrap_or(next_raw);
            logical.push_str(next.trim_start());
        }

        result.push((idx + 1, logical));
    }
    result
}

/// True when the line ends with an odd number of backslashes, i.e. the
/// last one escapes the line terminator.
fn ends_with_odd_backslashes(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Splits at the first unescaped `=` or `:`. A line without a separator
/// is a key with an empty value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return (&line[..i], &line[i + 1..]),
            _ => {}
        }
    }
    (line, "")
}

/// Processes backslash escapes. Unknown escapes collapse to the escaped
/// character; a malformed `\uXXXX` is a hard parse error.
fn unescape(input: &str, line: usize) -> Result<String, ParseError> {
    if !input.contains('\\') {
        return Ok(input.to_owned());
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let code = (hex.len() == 4)
                    .then(|| u32::from_str_radix(&hex, 16).ok())
                    .flatten();
                match code.and_then(char::from_u32) {
                    Some(ch) => out.push(ch),
                    None => {
                        return Err(ParseError::UnicodeEscape {
                            line,
                            sequence: hex,
                        });
                    }
                }
            }
            Some(other) => out.push(other),
            // Trailing lone backslash at end of input: dropped
            None => {}
        }
    }
    Ok(out)
}
