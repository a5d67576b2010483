// envgen: Session Environment Generator
//
// SPDX-FileCopyrightText: 2026 envgen contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules: the environment store and the specifier engine.
//!
//! ```text
//!             core
//!              |
//!     +--------+--------+
//!     |        |        |
//!     v        v        v
//!    env   specifier   user
//!     |        |        |
//! EnvStore  Table    UserRecord
//! EnvEntry  expand()  passwd via nix
//! ```

pub mod env;
pub mod specifier;
pub mod user;
