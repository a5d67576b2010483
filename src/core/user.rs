// envgen: Session Environment Generator
//
// SPDX-FileCopyrightText: 2026 envgen contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! User record resolution.
//!
//! ```text
//! UserRecord { name, uid, shell, home }
//! current()     effective uid -> passwd lookup
//! lookup(uid)   explicit uid  -> passwd lookup
//! ```
//!
//! The record backs the `%u`, `%U`, `%s` and `%h` specifiers and supplies
//! the home directory the XDG defaults derive from. Resolution failure is
//! fatal: without a user record no environment can be generated.

use std::path::{Path, PathBuf};

use nix::unistd::{self, Uid};

use crate::error::UserError;

/// The resolved identity of the user the environment is generated for.
#[derive(Debug, Clone)]
pub struct UserRecord {
    name: String,
    uid: u32,
    shell: PathBuf,
    home: PathBuf,
}

impl UserRecord {
    /// Builds a record from explicit fields, bypassing the user database.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        uid: u32,
        shell: impl Into<PathBuf>,
        home: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            uid,
            shell: shell.into(),
            home: home.into(),
        }
    }

    /// Resolves the record for the effective uid of the calling process.
    ///
    /// # Errors
    ///
    /// Returns a [`UserError`] if the uid has no passwd entry or the user
    /// database cannot be queried.
    pub fn current() -> Result<Self, UserError> {
        Self::lookup(unistd::geteuid().as_raw())
    }

    /// Resolves the record for an explicit uid.
    ///
    /// # Errors
    ///
    /// Returns a [`UserError`] if the uid has no passwd entry or the user
    /// database cannot be queried.
    pub fn lookup(uid: u32) -> Result<Self, UserError> {
        let user = unistd::User::from_uid(Uid::from_raw(uid))
            .map_err(|errno| UserError::LookupFailed { uid, errno })?
            .ok_or(UserError::NoPasswdEntry { uid })?;

        Ok(Self {
            name: user.name,
            uid,
            shell: user.shell,
            home: user.dir,
        })
    }

    /// Login name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Numeric uid.
    #[must_use]
    pub const fn uid(&self) -> u32 {
        self.uid
    }

    /// Login shell path.
    #[must_use]
    pub fn shell(&self) -> &Path {
        &self.shell
    }

    /// Home directory path.
    #[must_use]
    pub fn home(&self) -> &Path {
        &self.home
    }
}
