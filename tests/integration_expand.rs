// envgen: Session Environment Generator
//
// SPDX-FileCopyrightText: 2026 envgen contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for specifier expansion over realistic files.

use std::fs;
use std::path::Path;

use envgen::config::Cascade;
use envgen::core::env::EnvStore;
use envgen::core::specifier::SpecifierTable;
use envgen::core::user::UserRecord;
use tempfile::TempDir;

fn test_user() -> UserRecord {
    UserRecord::new("simon", 1000, "/bin/zsh", "/home/simon")
}

fn load(content: &str) -> EnvStore {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("environment");
    fs::write(&path, content).unwrap();

    let user = test_user();
    let table = SpecifierTable::standard("/usr/bin:/bin");
    let mut store = EnvStore::new();
    Cascade::new(&table, &user).load_file(&mut store, &path);
    store
}

#[test]
fn realistic_pam_environment() {
    let store = load(
        "# personal session environment\n\
         GOPATH=%h/go\n\
         PATH=%p:%(GOPATH)/bin\n\
         \n\
         EDITOR=vim          # fallback: vi\n\
         MAIL_USER=%u@example.org\n",
    );

    assert_eq!(store.get("GOPATH"), Some("/home/simon/go"));
    assert_eq!(store.get("PATH"), Some("/usr/bin:/bin:/home/simon/go/bin"));
    assert_eq!(store.get("EDITOR"), Some("vim          "));
    assert_eq!(store.get("MAIL_USER"), Some("simon@example.org"));
}

#[test]
fn references_resolve_against_earlier_lines_only() {
    let store = load("A=%(B)x\nB=set\nC=%(B)y\n");

    // B was not merged yet when A expanded
    assert_eq!(store.get("A"), Some("x"));
    assert_eq!(store.get("C"), Some("sety"));
}

#[test]
fn continued_lines_expand_as_one() {
    let store = load("MESSAGE=hello \\\nfrom %u\n");
    assert_eq!(store.get("MESSAGE"), Some("hello  from simon"));
}

#[test]
fn unknown_specifiers_survive_verbatim() {
    let store = load("FMT=%Y-%m-%d\n");
    assert_eq!(store.get("FMT"), Some("%Y-%m-%d"));
}

#[test]
fn invalid_resolver_drops_only_that_line() {
    // bind 'x' to the user-field resolver, which rejects it at resolve time
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("environment");
    fs::write(&path, "OK=1\nBAD=%x\nALSO_OK=2\n").unwrap();

    let user = test_user();
    let mut table = SpecifierTable::new();
    table.bind('x', envgen::core::specifier::Resolver::UserField);

    let mut store = EnvStore::new();
    Cascade::new(&table, &user).load_file(&mut store, &path);

    assert_eq!(store.get("OK"), Some("1"));
    assert_eq!(store.get("BAD"), None);
    assert_eq!(store.get("ALSO_OK"), Some("2"));
}

#[test]
fn percent_literal_in_real_value() {
    let store = load("NICENESS=100%% cpu\n");
    assert_eq!(store.get("NICENESS"), Some("100% cpu"));
}

#[test]
fn load_file_reports_missing_source() {
    let user = test_user();
    let table = SpecifierTable::standard("");
    let mut store = EnvStore::new();

    let opened = Cascade::new(&table, &user).load_file(&mut store, Path::new("/nonexistent/file"));
    assert!(!opened);
    assert!(store.is_empty());
}
