// envgen: Session Environment Generator
//
// SPDX-FileCopyrightText: 2026 envgen contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::Cli;
use clap::Parser;

#[test]
fn test_parse_defaults() {
    let cli = Cli::try_parse_from(["envgen"]).unwrap();
    assert_eq!(cli.uid, None);
    assert_eq!(cli.log_level, None);
    assert!(!cli.skip_system);
}

#[test]
fn test_parse_uid_and_levels() {
    let cli = Cli::try_parse_from(["envgen", "-u", "1000", "-l", "4"]).unwrap();
    assert_eq!(cli.uid, Some(1000));
    assert_eq!(cli.log_level, Some(4));
}

#[test]
fn test_parse_log_file() {
    let cli =
        Cli::try_parse_from(["envgen", "--log-file", "/tmp/envgen.log", "--file-log-level", "5"])
            .unwrap();
    assert_eq!(cli.log_file.as_deref(), Some(std::path::Path::new("/tmp/envgen.log")));
    assert_eq!(cli.file_log_level, Some(5));
}

#[test]
fn test_parse_skip_system() {
    let cli = Cli::try_parse_from(["envgen", "--skip-system"]).unwrap();
    assert!(cli.skip_system);
}

#[test]
fn test_rejects_out_of_range_level() {
    assert!(Cli::try_parse_from(["envgen", "-l", "7"]).is_err());
}
