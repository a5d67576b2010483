// envgen: Session Environment Generator
//
// SPDX-FileCopyrightText: 2026 envgen contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered, key-unique environment store.
//!
//! ```text
//! EnvStore: Vec<EnvEntry>
//! upsert("K=V")
//!   key found    -> replace value, keep position
//!   key missing  -> append
//! get("K")       -> Some("V")
//! iter()         -> entries in insertion order
//! ```

use crate::error::ExpandError;

/// One `KEY=VALUE` entry owned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    key: String,
    value: String,
}

impl EnvEntry {
    /// The key, without the `=` separator.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value, the text after the first `=`.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for EnvEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// An ordered collection of `KEY=VALUE` entries with unique keys.
///
/// Keys are case-sensitive. Insertion order is preserved for new keys; an
/// upsert of an existing key replaces its value in place, not its position.
/// The backing storage grows without a fixed cap.
#[derive(Debug, Clone, Default)]
pub struct EnvStore {
    entries: Vec<EnvEntry>,
}

impl EnvStore {
    /// Default `PATH` seeded before any configuration is read.
    pub const DEFAULT_PATH: &'static str =
        "/usr/local/sbin:/usr/local/bin:/usr/sbin:/usr/bin:/sbin:/bin";

    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a store seeded with the built-in defaults.
    ///
    /// The defaults sit at the bottom of the cascade; any configuration
    /// layer may override them.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        store.set("PATH", Self::DEFAULT_PATH);
        store.set("LANG", "C");
        store
    }

    /// Merges one fully expanded `KEY=VALUE` line into the store.
    ///
    /// The key boundary is the first `=` in the line. If the key is already
    /// present its value is replaced in place; otherwise the entry is
    /// appended.
    ///
    /// # Errors
    ///
    /// Returns [`ExpandError::MalformedLine`] if the line contains no `=`.
    pub fn upsert(&mut self, line: &str) -> Result<(), ExpandError> {
        let eq = line.find('=').ok_or_else(|| ExpandError::MalformedLine {
            line: line.to_string(),
        })?;
        let (key, value) = (&line[..eq], &line[eq + 1..]);
        self.set(key, value);
        Ok(())
    }

    /// Inserts or replaces an entry from already separated key and value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.value = value;
        } else {
            self.entries.push(EnvEntry { key, value });
        }
    }

    /// Looks up the value stored for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    /// Returns entries in store order.
    pub fn iter(&self) -> impl Iterator<Item = &EnvEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the store as `KEY=VALUE` lines in store order.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(entry.key());
            out.push('=');
            out.push_str(entry.value());
            out.push('\n');
        }
        out
    }
}

impl<'a> IntoIterator for &'a EnvStore {
    type Item = &'a EnvEntry;
    type IntoIter = std::slice::Iter<'a, EnvEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
