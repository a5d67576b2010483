// envgen: Session Environment Generator
//
// SPDX-FileCopyrightText: 2026 envgen contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Specifier table and built-in resolvers.
//!
//! ```text
//! SpecifierTable (ordered, linear lookup, first match wins)
//!   'p' -> Literal(PATH snapshot)
//!   'u' -> UserField (login name)
//!   'U' -> UserField (uid, decimal)
//!   's' -> UserField (shell path)
//!   'h' -> UserField (home path)
//!
//! Built once per run from the resolved UserRecord, immutable afterwards.
//! ```

pub mod expand;


pub use expand::expand;

use crate::core::user::UserRecord;
use crate::error::ExpandError;

/// How a bound specifier character produces its expansion.
#[derive(Debug, Clone)]
pub enum Resolver {
    /// A fixed string captured when the table was built.
    Literal(String),
    /// A field of the user record, selected by the specifier character.
    UserField,
}

impl Resolver {
    /// Produces the expansion for `specifier` against `user`.
    ///
    /// # Errors
    ///
    /// Returns [`ExpandError::InvalidSpecifier`] when a `UserField` resolver
    /// is bound to a character it does not understand.
    pub fn resolve(&self, specifier: char, user: &UserRecord) -> Result<String, ExpandError> {
        match self {
            Self::Literal(s) => Ok(s.clone()),
            Self::UserField => match specifier {
                'u' => Ok(user.name().to_owned()),
                'U' => Ok(user.uid().to_string()),
                's' => Ok(user.shell().display().to_string()),
                'h' => Ok(user.home().display().to_string()),
                other => Err(ExpandError::InvalidSpecifier { specifier: other }),
            },
        }
    }
}

/// One specifier binding in the table.
#[derive(Debug, Clone)]
pub struct SpecifierEntry {
    ch: char,
    resolver: Resolver,
}

/// An ordered sequence of specifier bindings.
///
/// Lookup is linear by character; the first match wins. The table is built
/// once per run and read-only during expansion.
#[derive(Debug, Clone, Default)]
pub struct SpecifierTable {
    entries: Vec<SpecifierEntry>,
}

impl SpecifierTable {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds the standard table.
    ///
    /// `path_snapshot` is the invoking process's own `PATH`, captured before
    /// any configuration is loaded; it backs the `%p` specifier. The user
    /// fields are resolved lazily against the record passed to
    /// [`expand`](expand::expand).
    #[must_use]
    pub fn standard(path_snapshot: impl Into<String>) -> Self {
        let mut table = Self::new();
        table.bind('p', Resolver::Literal(path_snapshot.into()));
        table.bind('u', Resolver::UserField);
        table.bind('U', Resolver::UserField);
        table.bind('s', Resolver::UserField);
        table.bind('h', Resolver::UserField);
        table
    }

    /// Appends a binding. Earlier bindings for the same character shadow
    /// later ones.
    pub fn bind(&mut self, ch: char, resolver: Resolver) {
        self.entries.push(SpecifierEntry { ch, resolver });
    }

    /// Finds the first resolver bound to `ch`, if any.
    #[must_use]
    pub fn lookup(&self, ch: char) -> Option<&Resolver> {
        self.entries
            .iter()
            .find(|entry| entry.ch == ch)
            .map(|entry| &entry.resolver)
    }
}
