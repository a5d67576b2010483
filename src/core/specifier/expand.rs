// envgen: Session Environment Generator
//
// SPDX-FileCopyrightText: 2026 envgen contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Specifier expansion for one `KEY=VALUE` line.
//!
//! ```text
//! "KEY=%u:%(PATH)/bin %% %z"
//!   |   |      |       |   |
//!   |   |      |       |   '-- unbound: passes through as "%z"
//!   |   |      |       '------ "%%" -> "%"
//!   |   |      '-------------- env lookup, absent name elides
//!   |   '--------------------- table resolver, failure drops the line
//!   '------------------------- key copied verbatim, never scanned
//! ```

use tracing::debug;

use super::SpecifierTable;
use crate::core::env::EnvStore;
use crate::core::user::UserRecord;
use crate::error::ExpandError;

/// Minimum output buffer capacity.
const MIN_CAPACITY: usize = 32;

/// Grows `buf` so that `additional` more bytes fit, rounding the target
/// capacity up to the next power of two above [`MIN_CAPACITY`].
///
/// Substitutions can grow or shrink the text arbitrarily, so the final
/// length is unknowable up front; rounding keeps reallocation cost
/// amortized linear over the whole expansion.
fn reserve_amortized(buf: &mut String, additional: usize) {
    let needed = buf.len().saturating_add(additional);
    if needed > buf.capacity() {
        let target = needed.next_power_of_two().max(MIN_CAPACITY);
        buf.reserve(target - buf.len());
    }
}

/// Expands `%`-specifiers in the value portion of a `KEY=VALUE` line.
///
/// The portion up to and including the first `=` is copied verbatim and
/// never scanned, so keys cannot be rewritten by accident. Within the
/// value:
///
/// - `%%` emits one literal `%`;
/// - `%(NAME)` appends the value of the matching entry in `env`, or
///   nothing when the name is absent; a `%(` with no closing `)` is
///   emitted literally;
/// - `%c` with a bound resolver appends the resolver's output;
/// - `%c` with no binding passes through as `%c`;
/// - a `%` at the very end of the line is dropped.
///
/// Expansion is all-or-nothing: on error the partial buffer is discarded
/// and nothing observable changes.
///
/// # Errors
///
/// Returns [`ExpandError::MalformedLine`] if `text` has no `=`, or
/// propagates a resolver failure such as
/// [`ExpandError::InvalidSpecifier`].
pub fn expand(
    text: &str,
    table: &SpecifierTable,
    user: &UserRecord,
    env: &EnvStore,
) -> Result<String, ExpandError> {
    let eq = text.find('=').ok_or_else(|| ExpandError::MalformedLine {
        line: text.to_string(),
    })?;
    let (key, value) = text.split_at(eq + 1);

    let mut out = String::new();
    reserve_amortized(&mut out, text.len());
    out.push_str(key);

    let mut rest = value;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let Some(ch) = after.chars().next() else {
            // trailing lone '%', consumed without output
            rest = "";
            break;
        };

        match ch {
            '%' => {
                out.push('%');
                rest = &after[1..];
            }
            '(' => {
                if let Some(end) = after.find(')') {
                    let name = &after[1..end];
                    if let Some(found) = env.get(name) {
                        reserve_amortized(&mut out, found.len());
                        out.push_str(found);
                    } else {
                        debug!(name, "no such key, eliding reference");
                    }
                    rest = &after[end + 1..];
                } else {
                    // malformed token: emit "%(" and rescan after the '('
                    out.push_str("%(");
                    rest = &after[1..];
                }
            }
            other => {
                if let Some(resolver) = table.lookup(other) {
                    let expansion = resolver.resolve(other, user)?;
                    reserve_amortized(&mut out, expansion.len());
                    out.push_str(&expansion);
                } else {
                    out.push('%');
                    out.push(other);
                }
                rest = &after[other.len_utf8()..];
            }
        }
    }
    out.push_str(rest);

    Ok(out)
}
