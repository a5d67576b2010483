// envgen: Session Environment Generator
//
// SPDX-FileCopyrightText: 2026 envgen contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> UserRecord --> SpecifierTable
//!                                  |
//!                                  v
//!               EnvStore::with_defaults() --> Cascade::run
//!                                  |
//!                                  v
//!                      KEY=VALUE lines on stdout
//! ```

use std::io::Write;
use std::process::ExitCode;

use envgen::cli::{self, Cli};
use envgen::config::{Cascade, Layout, XdgDirs};
use envgen::core::env::EnvStore;
use envgen::core::specifier::SpecifierTable;
use envgen::core::user::UserRecord;
use envgen::error::Result;
use envgen::logging::{LogConfig, LogLevel, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_log_config(cli: &Cli) -> LogConfig {
    let console_level = cli
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::WARN);

    let file_level = cli
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(cli.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn run(cli: &Cli) -> Result<()> {
    let user = match cli.uid {
        Some(uid) => UserRecord::lookup(uid),
        None => UserRecord::current(),
    }?;

    // the %p snapshot is taken before any configuration is loaded
    let path_snapshot = std::env::var("PATH").unwrap_or_default();
    let table = SpecifierTable::standard(path_snapshot);

    let xdg = XdgDirs::resolve(&user);
    let mut layout = Layout::resolve(&user, &xdg);
    layout.skip_system = cli.skip_system;

    let mut store = EnvStore::with_defaults();
    Cascade::new(&table, &user).run(&mut store, &layout, &xdg);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for entry in &store {
        writeln!(out, "{entry}")?;
    }

    Ok(())
}
