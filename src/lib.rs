// envgen: Session Environment Generator
//
// SPDX-FileCopyrightText: 2026 envgen contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                  main.rs
//!                     |
//!              cli (clap) + logging
//!                     |
//!                     v
//!         ,-----------------------,
//!         |        config         |
//!         |  Cascade over layered |
//!         |  files and drop-ins   |
//!         '---+--------+------+---'
//!             |        |      |
//!             v        v      v
//!        LineReader  expand  XdgDirs
//!                      |
//!                      v
//!                  EnvStore
//!            (ordered, unique keys)
//!
//!   +--------------------------------------+
//!   |  core   env store, specifiers, user  |
//!   +--------------------------------------+
//!   |  foundation   error, logging         |
//!   +--------------------------------------+
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
