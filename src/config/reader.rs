// envgen: Session Environment Generator
//
// SPDX-FileCopyrightText: 2026 envgen contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logical line reader for one configuration file.
//!
//! ```text
//! physical lines          logical line
//! "A=1\"  +  "2"     ->   "A=1 2"        (odd trailing backslashes join)
//! "# note"           ->   (skipped)
//! "B=2   # inline"   ->   "B=2   "       (truncated at unescaped '#')
//! "C=\#tag"          ->   "C=\#tag"      (escaped '#' survives)
//! ```
//!
//! Continuation joining happens before comment truncation. An unterminated
//! continuation at end of file yields whatever was accumulated as the
//! final line.

use std::io::{self, BufRead};

/// Lazily yields the logical lines of one open file.
///
/// Finite and not restartable; tied to the underlying reader. Blank lines
/// and full-line comments are filtered out, inline comments are truncated,
/// and backslash continuations are joined.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    pub const fn new(inner: R) -> Self {
        Self { inner, done: false }
    }

    /// Reads one physical line with its newline stripped, or `None` at EOF.
    fn read_physical(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.inner.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }
}

/// Counts the backslashes at the end of `s`.
fn trailing_backslashes(s: &str) -> usize {
    s.bytes().rev().take_while(|&b| b == b'\\').count()
}

/// Truncates `line` at the first `#` not escaped by a backslash.
fn strip_inline_comment(line: &mut String) {
    let mut run = 0usize;
    let mut cut = None;
    for (i, b) in line.bytes().enumerate() {
        if b == b'\\' {
            run += 1;
        } else {
            if b == b'#' && run % 2 == 0 {
                cut = Some(i);
                break;
            }
            run = 0;
        }
    }
    if let Some(i) = cut {
        line.truncate(i);
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let mut logical = match self.read_physical() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };

            // an odd number of trailing backslashes continues the line
            while trailing_backslashes(&logical) % 2 == 1 {
                logical.pop();
                logical.push(' ');
                match self.read_physical() {
                    Ok(Some(next)) => logical.push_str(&next),
                    Ok(None) => {
                        self.done = true;
                        break;
                    }
                    Err(e) => {
                        self.done = true;
                        return Some(Err(e));
                    }
                }
            }

            let trimmed = logical.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            strip_inline_comment(&mut logical);
            return Some(Ok(logical));
        }
    }
}
