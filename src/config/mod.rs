// envgen: Session Environment Generator
//
// SPDX-FileCopyrightText: 2026 envgen contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sources and the cascade that merges them.
//!
//! # Source Hierarchy
//!
//! ```text
//! Priority (low -> high)
//! 1. built-in defaults
//! 2. locale.conf (user, else system)
//! 3. /etc/environment
//! 4. /etc/environment.d/
//! 5. XDG base-directory variables
//! 6. $XDG_CONFIG_HOME/environment
//! 7. $XDG_CONFIG_HOME/environment.d/
//! 8. $HOME/.pam_environment
//! ```
//!
//! # File Format
//!
//! ```text
//! # comment
//! KEY=VALUE            first '=' separates, later ones are literal
//! GOPATH=%h/go         %-specifiers expand in values only
//! PATH=%(PATH):/extra  references to already merged keys
//! LONG=a b \
//!      c               backslash continuation joins with a space
//! ```

pub mod cascade;
pub mod reader;
pub mod xdg;


pub use cascade::{Cascade, Layout};
pub use reader::LineReader;
pub use xdg::XdgDirs;
