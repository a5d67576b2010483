// envgen: Session Environment Generator
//
// SPDX-FileCopyrightText: 2026 envgen contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cascading configuration loader.
//!
//! ```text
//! Layer order (low -> high, later upserts win per key)
//! 1. built-in defaults                 (seeded into the store)
//! 2. locale.conf                       (user file, else /etc/locale.conf)
//! 3. /etc/environment
//! 4. /etc/environment.d/*             (lexical order)
//! 5. XDG base dirs                     (synthesized directly)
//! 6. $XDG_CONFIG_HOME/environment
//! 7. $XDG_CONFIG_HOME/environment.d/*  (lexical order)
//! 8. $HOME/.pam_environment
//! ```
//!
//! A missing source is skipped silently; any other I/O failure is reported
//! and the cascade continues. A line that fails to expand is dropped;
//! lines merged before a mid-file failure stay merged.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::reader::LineReader;
use super::xdg::XdgDirs;
use crate::core::env::EnvStore;
use crate::core::specifier::{SpecifierTable, expand};
use crate::core::user::UserRecord;
use crate::error::SourceError;

/// The candidate sources one run visits, in cascade order.
///
/// Built explicitly from the user record and the XDG directories so tests
/// can point every path into a scratch tree.
#[derive(Debug, Clone)]
pub struct Layout {
    /// User-level locale file, tried before the system one.
    pub locale_user: PathBuf,
    /// System locale file, consulted only when the user file cannot be
    /// opened at all.
    pub locale_system: PathBuf,
    /// System-wide environment file.
    pub system_environment: PathBuf,
    /// System drop-in directory.
    pub system_dropins: PathBuf,
    /// User environment file.
    pub user_environment: PathBuf,
    /// User drop-in directory.
    pub user_dropins: PathBuf,
    /// Legacy per-user PAM environment file.
    pub pam_environment: PathBuf,
    /// Omits the system-level layers when set.
    pub skip_system: bool,
}

impl Layout {
    /// Resolves the standard source locations for one user.
    #[must_use]
    pub fn resolve(user: &UserRecord, xdg: &XdgDirs) -> Self {
        Self {
            locale_user: xdg.config_home().join("locale.conf"),
            locale_system: PathBuf::from("/etc/locale.conf"),
            system_environment: PathBuf::from("/etc/environment"),
            system_dropins: PathBuf::from("/etc/environment.d"),
            user_environment: xdg.config_home().join("environment"),
            user_dropins: xdg.config_home().join("environment.d"),
            pam_environment: user.home().join(".pam_environment"),
            skip_system: false,
        }
    }
}

/// Drives the cascade: opens each source, feeds its logical lines through
/// the expander and merges the results into the store.
#[derive(Debug)]
pub struct Cascade<'a> {
    table: &'a SpecifierTable,
    user: &'a UserRecord,
}

impl<'a> Cascade<'a> {
    #[must_use]
    pub const fn new(table: &'a SpecifierTable, user: &'a UserRecord) -> Self {
        Self { table, user }
    }

    /// Loads every layer of `layout` into `store`, in cascade order.
    pub fn run(&self, store: &mut EnvStore, layout: &Layout, xdg: &XdgDirs) {
        if layout.skip_system {
            self.load_file(store, &layout.locale_user);
        } else {
            self.load_fallback_pair(store, &layout.locale_user, &layout.locale_system);
            self.load_file(store, &layout.system_environment);
            self.load_dropin_dir(store, &layout.system_dropins);
        }

        xdg.synthesize_into(store);

        self.load_file(store, &layout.user_environment);
        self.load_dropin_dir(store, &layout.user_dropins);
        self.load_file(store, &layout.pam_environment);
    }

    /// Loads one configuration file into the store.
    ///
    /// Returns whether the file could be opened. A missing file is skipped
    /// silently; any other open or read failure is reported and already
    /// merged lines stay merged.
    pub fn load_file(&self, store: &mut EnvStore, path: &Path) -> bool {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "source not found, skipping");
                return false;
            }
            Err(e) => {
                let err = SourceError::Read {
                    path: path.display().to_string(),
                    source: e,
                };
                warn!(error = %err, "failed to open source");
                return false;
            }
        };

        debug!(path = %path.display(), "loading source");
        for line in LineReader::new(BufReader::new(file)) {
            match line {
                Ok(line) => self.merge_line(store, &line, path),
                Err(e) => {
                    let err = SourceError::Read {
                        path: path.display().to_string(),
                        source: e,
                    };
                    warn!(error = %err, "abandoning source");
                    break;
                }
            }
        }
        true
    }

    /// Tries the user-level file; only when it cannot be opened at all is
    /// the system-level file consulted. The two are never merged.
    pub fn load_fallback_pair(&self, store: &mut EnvStore, user_path: &Path, system_path: &Path) {
        if !self.load_file(store, user_path) {
            self.load_file(store, system_path);
        }
    }

    /// Loads every non-hidden regular file of a drop-in directory, in
    /// lexical order by name so precedence is deterministic.
    pub fn load_dropin_dir(&self, store: &mut EnvStore, dir: &Path) {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %dir.display(), "drop-in directory not found, skipping");
                return;
            }
            Err(e) => {
                let err = SourceError::Enumerate {
                    path: dir.display().to_string(),
                    source: e,
                };
                warn!(error = %err, "failed to enumerate drop-in directory");
                return;
            }
        };

        let mut names: Vec<OsString> = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(path = %dir.display(), error = %e, "failed to read directory entry");
                    continue;
                }
            };
            let name = entry.file_name();
            if name.as_encoded_bytes().starts_with(b".") {
                continue;
            }
            if !entry.path().is_file() {
                continue;
            }
            names.push(name);
        }
        names.sort();

        for name in names {
            self.load_file(store, &dir.join(name));
        }
    }

    /// Expands one logical line and merges it; a failed line is dropped
    /// with a warning and contributes nothing.
    fn merge_line(&self, store: &mut EnvStore, line: &str, path: &Path) {
        match expand(line, self.table, self.user, store) {
            Ok(expanded) => {
                if let Err(e) = store.upsert(&expanded) {
                    warn!(path = %path.display(), error = %e, "dropping line");
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "dropping line");
            }
        }
    }
}
