// envgen: Session Environment Generator
//
// SPDX-FileCopyrightText: 2026 envgen contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI for envgen using clap derive.
//!
//! ```text
//! envgen [options]
//!   -u, --uid UID          generate for an explicit uid
//!   -l, --log-level N      console verbosity (0-5)
//!       --file-log-level N file verbosity (overrides --log-level)
//!       --log-file FILE    write diagnostics to a file
//!       --skip-system      omit /etc layers
//! ```
//!
//! The tool has a single job, so there are no subcommands: it prints the
//! assembled environment, one `KEY=VALUE` per line, to stdout.

#[cfg(test)]
mod tests;

use clap::Parser;
use std::path::PathBuf;

/// Session environment generator.
///
/// Builds a user's session environment from layered configuration files
/// (/etc/environment, environment.d drop-ins, locale.conf, XDG variables,
/// ~/.pam_environment), expanding %-specifiers in values.
#[derive(Debug, Parser)]
#[command(
    name = "envgen",
    author,
    version,
    about = "Session environment generator",
    after_help = "SPECIFIERS:\n\n\
                  Values may contain %-specifiers, expanded per line:\n\
                  %u login name, %U uid, %s shell, %h home directory,\n\
                  %p the PATH envgen itself was started with, %% a literal\n\
                  percent sign, and %(KEY) the value of an already merged\n\
                  entry. An unknown %x passes through unchanged.\n\n\
                  Later configuration layers override earlier ones per key;\n\
                  drop-in files apply in lexical order by name."
)]
pub struct Cli {
    /// Numeric uid whose passwd record drives %u, %U, %s and %h.
    /// Defaults to the effective uid of the calling process.
    #[arg(short = 'u', long = "uid", value_name = "UID")]
    pub uid: Option<u32>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Skips the system-level layers (/etc/locale.conf, /etc/environment
    /// and /etc/environment.d).
    #[arg(long = "skip-system")]
    pub skip_system: bool,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
