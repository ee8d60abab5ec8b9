// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Test tooling shared by the slicer crates.

pub mod table;
pub mod tracing;

pub use table::{RandomTable, random_table};
pub use tracing::init_tracing;
