// envinject-rs: Environment Variable Injection Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Windows-path escape pre-pass for properties text.
//!
//! # Architecture
//!
//! ```text
//! per line, two heuristic trigger patterns (kept as-is for
//! compatibility, even where they could mis-fire):
//!   SHARE_PREFIX  =\\        KEY=\\server\share
//!   DRIVE_PATH    X:\        KEY=C:\Windows\Temp
//!
//! matched lines: single backslashes doubled, the =\\ share prefix
//! doubled to four, longer runs left alone
//! ```
//!
//! The properties format's own escape processing would otherwise swallow
//! these backslashes. Lines matching neither pattern pass through
//! untouched, so backslash escapes unrelated to file paths keep working.

use regex::Regex;
use std::sync::LazyLock;

/// A drive-letter path anywhere on the line, e.g. `C:\`.
static DRIVE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]:\\").expect("drive pattern is valid"));

/// A network-share value opener: `=` directly followed by `\\`.
static SHARE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"=\\\\").expect("share pattern is valid"));

/// Escapes Windows-style path backslashes line by line so that standard
/// properties unescaping reproduces the intended path text.
pub(super) fn escape_windows_paths(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut first = true;
    for line in content.split('\n') {
        if !first {
            out.push('\n');
        }
        first = false;
        if SHARE_PREFIX.is_match(line) || DRIVE_PATH.is_match(line) {
            escape_line_into(line, &mut out);
        } else {
            out.push_str(line);
        }
    }
    out
}

/// Doubles bare backslashes on a matched line.
///
/// Runs of backslashes are rewritten as a unit: a single backslash
/// becomes two; a run of exactly two directly after `=` (the share
/// prefix) becomes four; anything longer is assumed pre-escaped and is
/// left alone.
fn escape_line_into(line: &str, out: &mut String) {
    let mut chars = line.chars().peekable();
    let mut prev: Option<char> = None;

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            prev = Some(c);
            continue;
        }

        let mut run = 1usize;
        while chars.peek() == Some(&'\\') {
            chars.next();
            run += 1;
        }

        let doubled = match run {
            1 => 2,
            2 if prev == Some('=') => 4,
            n => n,
        };
        for _ in 0..doubled {
            out.push('\\');
        }
        prev = Some('\\');
    }
}
