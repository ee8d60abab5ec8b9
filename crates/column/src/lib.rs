// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Columnar tables as seen by the grouping engine.
//!
//! A [`Columns`] is an ordered set of equally long, named [`Column`]s. Scalar
//! columns keep their values next to a validity [`BitVec`]; categorical columns
//! keep 1-based level codes with `0` reserved for a missing value. Every
//! groupable non-categorical column exposes the [`RowKey`] contract, which is
//! the only way the grouping engine looks at its values.

mod bitvec;
mod column;
mod columns;
pub mod container;
mod data;
mod key;

pub use bitvec::BitVec;
pub use column::Column;
pub use columns::Columns;
pub use container::{CategoricalContainer, Container};
pub use data::ColumnData;
pub use key::{KeyElement, RowKey};
