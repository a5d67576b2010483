// envgen: Session Environment Generator
//
// SPDX-FileCopyrightText: 2026 envgen contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment store.
//!
//! ```text
//! EnvStore (ordered Vec<EnvEntry>, unique keys)
//! Sources: with_defaults(), cascade upserts
//! Ops: upsert/set/get/iter/render
//! ```
//!
//! - **Case-sensitive keys**: `PATH` and `path` are distinct entries
//! - **Position-stable upsert**: replacing a value keeps the entry's slot
//! - **Unbounded**: no fixed entry cap

pub mod store;


pub use store::{EnvEntry, EnvStore};
