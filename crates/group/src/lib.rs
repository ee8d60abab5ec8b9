// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Group-by index construction.
//!
//! Given a table and an ordered list of grouping columns, [`build_index`]
//! produces one label column per grouping column plus one row-index list per
//! group. Groups are ordered lexicographically over the grouping columns:
//! categorical columns contribute every declared level (observed or not) in
//! level order followed by a missing bucket when one is needed, all other
//! columns contribute their observed distinct values in ascending order with
//! undefined values last.
//!
//! Internally the index is a partition tree with one level per grouping
//! column. The tree is sized first, then materialized depth-first into
//! pre-sized output buffers.

mod config;
mod grouped;
mod index;
mod metadata;
mod output;
mod partition;
mod range;

pub use config::{DEFAULT_ROWS_COLUMN, GroupingConfig};
pub use grouped::GroupedColumns;
pub use index::build_index;
pub use metadata::GroupingMetadata;
pub use slicer_type::{Error, Result};
