// envgen: Session Environment Generator
//
// SPDX-FileCopyrightText: 2026 envgen contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            EnvgenError
//!                 |
//!      +-----+----+----+------+
//!      |     |         |      |
//!      v     v         v      v
//!   Expand Source    User  Io/Other
//!    Box    Box       Box   Box
//!
//! Sub-errors (unboxed internally):
//!   Expand  MalformedLine, InvalidSpecifier
//!   Source  NotFound, Read, Enumerate
//!   User    NoPasswdEntry, LookupFailed
//!
//! Recovery policy:
//!   Source::NotFound          skip the source
//!   Source::Read/Enumerate    report, continue with next source
//!   Expand::*                 drop the line, keep the file
//!   User::*                   fatal, no environment can be built
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvgenError`].
pub type EnvgenResult<T> = std::result::Result<T, EnvgenError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum EnvgenError {
    /// Specifier expansion failed for a configuration line.
    #[error("expansion error: {0}")]
    Expand(#[from] Box<ExpandError>),

    /// A configuration source could not be read.
    #[error("source error: {0}")]
    Source(#[from] Box<SourceError>),

    /// The user record could not be resolved.
    #[error("user error: {0}")]
    User(#[from] Box<UserError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvgenError {
                fn from(err: $error) -> Self {
                    EnvgenError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ExpandError => Expand,
    SourceError => Source,
    UserError => User,
    std::io::Error => Io,
}

// --- Expansion Errors ---

/// Errors raised while expanding `%`-specifiers in one `KEY=VALUE` line.
///
/// Any of these drops the offending line; nothing partially expanded ever
/// reaches the environment store.
#[derive(Debug, Error)]
pub enum ExpandError {
    /// The line has no `=` separator, so there is no key to protect.
    #[error("line has no '=' separator: {line}")]
    MalformedLine { line: String },

    /// A resolver was invoked for a specifier it does not understand.
    #[error("invalid specifier '%{specifier}' for this resolver")]
    InvalidSpecifier { specifier: char },
}

// --- Source Errors ---

/// Errors tied to one configuration file or drop-in directory.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Source does not exist. Recovered by skipping it.
    #[error("source not found: {path}")]
    NotFound { path: String },

    /// Opening or reading the source failed mid-way.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Enumerating a drop-in directory failed.
    #[error("failed to enumerate '{path}': {source}")]
    Enumerate {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- User Errors ---

/// Errors resolving the user record the specifier table is built from.
#[derive(Debug, Error)]
pub enum UserError {
    /// The uid has no passwd entry.
    #[error("no passwd entry for uid {uid}")]
    NoPasswdEntry { uid: u32 },

    /// The user database itself could not be queried.
    #[error("user database lookup failed for uid {uid}: {errno}")]
    LookupFailed { uid: u32, errno: nix::errno::Errno },
}
