// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::{Deref, Index};

use serde::{Deserialize, Serialize};
use slicer_type::{Error, Result};

use crate::Column;

/// An ordered set of named columns that all have the same length.
///
/// The row count is derived from the columns, never stored on its own, so a
/// deserialized table goes through the same length check as [`Columns::new`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawColumns", into = "RawColumns")]
pub struct Columns {
	columns: Vec<Column>,
	row_count: usize,
}

#[derive(Serialize, Deserialize)]
struct RawColumns {
	columns: Vec<Column>,
}

impl TryFrom<RawColumns> for Columns {
	type Error = Error;

	fn try_from(raw: RawColumns) -> Result<Self> {
		Columns::try_new(raw.columns)
	}
}

impl From<Columns> for RawColumns {
	fn from(columns: Columns) -> Self {
		RawColumns {
			columns: columns.columns,
		}
	}
}

impl Deref for Columns {
	type Target = [Column];

	fn deref(&self) -> &Self::Target {
		&self.columns
	}
}

impl Index<usize> for Columns {
	type Output = Column;

	fn index(&self, index: usize) -> &Self::Output {
		self.columns.index(index)
	}
}

impl Columns {
	/// # Panics
	///
	/// Panics if the columns differ in length; see [`Columns::try_new`].
	pub fn new(columns: Vec<Column>) -> Self {
		match Self::try_new(columns) {
			Ok(columns) => columns,
			Err(err) => panic!("{err}"),
		}
	}

	pub fn try_new(columns: Vec<Column>) -> Result<Self> {
		let n = columns.first().map_or(0, |c| c.data.len());
		if let Some(column) = columns.iter().find(|c| c.data.len() != n) {
			return Err(Error::ColumnLengthMismatch {
				name: column.name.clone(),
				len: column.data.len(),
				expected: n,
			});
		}

		Ok(Self {
			columns,
			row_count: n,
		})
	}

	pub fn row_count(&self) -> usize {
		self.row_count
	}

	pub fn column_count(&self) -> usize {
		self.columns.len()
	}

	pub fn column(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|c| c.name == name)
	}
}
