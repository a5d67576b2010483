// envgen: Session Environment Generator
//
// SPDX-FileCopyrightText: 2026 envgen contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the cascading loader.
//!
//! Each test builds a scratch filesystem tree with tempfile and points the
//! layout at it, so no real /etc or $HOME is touched.

use std::fs;
use std::path::Path;

use envgen::config::{Cascade, Layout, XdgDirs};
use envgen::core::env::EnvStore;
use envgen::core::specifier::SpecifierTable;
use envgen::core::user::UserRecord;
use tempfile::TempDir;

fn scratch_user(root: &Path) -> UserRecord {
    UserRecord::new("simon", 1000, "/bin/zsh", root.join("home"))
}

fn scratch_layout(root: &Path) -> Layout {
    let config = root.join("home/.config");
    Layout {
        locale_user: config.join("locale.conf"),
        locale_system: root.join("etc/locale.conf"),
        system_environment: root.join("etc/environment"),
        system_dropins: root.join("etc/environment.d"),
        user_environment: config.join("environment"),
        user_dropins: config.join("environment.d"),
        pam_environment: root.join("home/.pam_environment"),
        skip_system: false,
    }
}

fn scratch_xdg(root: &Path) -> XdgDirs {
    XdgDirs::new(
        root.join("home/.config"),
        root.join("home/.local/share"),
        root.join("home/.cache"),
    )
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn run_cascade(root: &Path) -> EnvStore {
    let user = scratch_user(root);
    let table = SpecifierTable::standard("/usr/bin:/bin");
    let mut store = EnvStore::with_defaults();
    Cascade::new(&table, &user).run(&mut store, &scratch_layout(root), &scratch_xdg(root));
    store
}

#[test]
fn empty_tree_yields_defaults_and_xdg() {
    let tmp = TempDir::new().unwrap();
    let store = run_cascade(tmp.path());

    assert_eq!(store.get("PATH"), Some(EnvStore::DEFAULT_PATH));
    assert_eq!(store.get("LANG"), Some("C"));
    let config_home = tmp.path().join("home/.config").display().to_string();
    assert_eq!(store.get("XDG_CONFIG_HOME"), Some(config_home.as_str()));
    assert!(store.get("XDG_DATA_HOME").is_some());
    assert!(store.get("XDG_CACHE_HOME").is_some());
}

#[test]
fn locale_user_file_shadows_system_file() {
    let tmp = TempDir::new().unwrap();
    write(
        &tmp.path().join("home/.config/locale.conf"),
        "LANG=en_US.UTF-8\n",
    );
    write(&tmp.path().join("etc/locale.conf"), "LANG=de_DE.UTF-8\n");

    let store = run_cascade(tmp.path());
    assert_eq!(store.get("LANG"), Some("en_US.UTF-8"));
}

#[test]
fn locale_falls_back_to_system_file() {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("etc/locale.conf"), "LANG=de_DE.UTF-8\n");

    let store = run_cascade(tmp.path());
    assert_eq!(store.get("LANG"), Some("de_DE.UTF-8"));
}

#[test]
fn dropins_apply_in_lexical_order() {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("etc/environment.d/20-b"), "FOO=twenty\n");
    write(&tmp.path().join("etc/environment.d/10-a"), "FOO=ten\nBAR=1\n");

    let store = run_cascade(tmp.path());
    assert_eq!(store.get("FOO"), Some("twenty"));
    assert_eq!(store.get("BAR"), Some("1"));
}

#[test]
fn hidden_and_non_regular_dropin_entries_are_skipped() {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("etc/environment.d/10-real"), "FOO=real\n");
    write(&tmp.path().join("etc/environment.d/.hidden"), "FOO=hidden\n");
    fs::create_dir_all(tmp.path().join("etc/environment.d/subdir")).unwrap();

    let store = run_cascade(tmp.path());
    assert_eq!(store.get("FOO"), Some("real"));
}

#[test]
fn later_layers_override_earlier_ones() {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("etc/environment"), "EDITOR=nano\nFOO=etc\n");
    write(
        &tmp.path().join("home/.config/environment"),
        "EDITOR=vim\n",
    );
    write(
        &tmp.path().join("home/.pam_environment"),
        "FOO=pam\n",
    );

    let store = run_cascade(tmp.path());
    assert_eq!(store.get("EDITOR"), Some("vim"));
    assert_eq!(store.get("FOO"), Some("pam"));
}

#[test]
fn skip_system_omits_etc_layers() {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("etc/environment"), "FOO=etc\n");
    write(&tmp.path().join("etc/locale.conf"), "LANG=de_DE.UTF-8\n");
    write(
        &tmp.path().join("home/.config/environment"),
        "BAR=user\n",
    );

    let user = scratch_user(tmp.path());
    let table = SpecifierTable::standard("/usr/bin:/bin");
    let mut layout = scratch_layout(tmp.path());
    layout.skip_system = true;

    let mut store = EnvStore::with_defaults();
    Cascade::new(&table, &user).run(&mut store, &layout, &scratch_xdg(tmp.path()));

    assert_eq!(store.get("FOO"), None);
    assert_eq!(store.get("LANG"), Some("C"), "system locale not consulted");
    assert_eq!(store.get("BAR"), Some("user"));
}

#[test]
fn path_references_chain_across_layers() {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("etc/environment"), "PATH=%(PATH):/etc-bin\n");
    write(
        &tmp.path().join("home/.pam_environment"),
        "PATH=%(PATH):/home-bin\n",
    );

    let store = run_cascade(tmp.path());
    let expected = format!("{}:/etc-bin:/home-bin", EnvStore::DEFAULT_PATH);
    assert_eq!(store.get("PATH"), Some(expected.as_str()));
}

#[test]
fn malformed_lines_are_dropped_but_file_continues() {
    let tmp = TempDir::new().unwrap();
    write(
        &tmp.path().join("etc/environment"),
        "GOOD=1\nNOEQUALS\nALSO_GOOD=2\n",
    );

    let store = run_cascade(tmp.path());
    assert_eq!(store.get("GOOD"), Some("1"));
    assert_eq!(store.get("ALSO_GOOD"), Some("2"));
    assert_eq!(store.get("NOEQUALS"), None);
}

#[test]
fn output_preserves_first_insertion_order() {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("etc/environment"), "ZZZ=1\nAAA=2\n");
    write(&tmp.path().join("home/.pam_environment"), "ZZZ=9\n");

    let store = run_cascade(tmp.path());
    let keys: Vec<&str> = store.iter().map(envgen::core::env::EnvEntry::key).collect();

    let zzz = keys.iter().position(|k| *k == "ZZZ").unwrap();
    let aaa = keys.iter().position(|k| *k == "AAA").unwrap();
    assert!(zzz < aaa, "overridden key keeps its original position");
    assert_eq!(store.get("ZZZ"), Some("9"));
}
