// envgen: Session Environment Generator
//
// SPDX-FileCopyrightText: 2026 envgen contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! XDG base-directory resolution.
//!
//! ```text
//! XDG_CONFIG_HOME  (env, non-empty)  else  $HOME/.config
//! XDG_DATA_HOME    (env, non-empty)  else  $HOME/.local/share
//! XDG_CACHE_HOME   (env, non-empty)  else  $HOME/.cache
//! ```
//!
//! Resolved once per run into an explicit struct that is passed down,
//! never cached globally. The three variables are also synthesized into
//! the store as their own cascade layer.

use std::path::{Path, PathBuf};

use crate::core::env::EnvStore;
use crate::core::user::UserRecord;

/// The per-user XDG base directories.
#[derive(Debug, Clone)]
pub struct XdgDirs {
    config_home: PathBuf,
    data_home: PathBuf,
    cache_home: PathBuf,
}

impl XdgDirs {
    /// Builds the directories from explicit paths.
    #[must_use]
    pub fn new(
        config_home: impl Into<PathBuf>,
        data_home: impl Into<PathBuf>,
        cache_home: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config_home: config_home.into(),
            data_home: data_home.into(),
            cache_home: cache_home.into(),
        }
    }

    /// Resolves the directories from the process environment, falling back
    /// to defaults under the user's home directory.
    #[must_use]
    pub fn resolve(user: &UserRecord) -> Self {
        Self::resolve_from(user, |var| std::env::var(var).ok())
    }

    /// Resolves the directories through an explicit environment lookup.
    ///
    /// An unset or empty variable falls back to the home-derived default.
    pub fn resolve_from(user: &UserRecord, getenv: impl Fn(&str) -> Option<String>) -> Self {
        let dir = |var: &str, default: &str| match getenv(var) {
            Some(v) if !v.is_empty() => PathBuf::from(v),
            _ => user.home().join(default),
        };

        Self {
            config_home: dir("XDG_CONFIG_HOME", ".config"),
            data_home: dir("XDG_DATA_HOME", ".local/share"),
            cache_home: dir("XDG_CACHE_HOME", ".cache"),
        }
    }

    #[must_use]
    pub fn config_home(&self) -> &Path {
        &self.config_home
    }

    #[must_use]
    pub fn data_home(&self) -> &Path {
        &self.data_home
    }

    #[must_use]
    pub fn cache_home(&self) -> &Path {
        &self.cache_home
    }

    /// Upserts the three base-directory variables into the store.
    pub fn synthesize_into(&self, store: &mut EnvStore) {
        store.set("XDG_CONFIG_HOME", self.config_home.display().to_string());
        store.set("XDG_DATA_HOME", self.data_home.display().to_string());
        store.set("XDG_CACHE_HOME", self.cache_home.display().to_string());
    }
}
