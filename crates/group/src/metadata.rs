// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use slicer_column::Column;
use slicer_type::{Error, Result, Value};

/// The result of grouping a table.
///
/// Group `i` is described by element `i` of every label column in
/// [`keys`](Self::keys) and by the row positions in
/// [`group_rows(i)`](Self::group_rows). Groups are in output order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGroupingMetadata")]
pub struct GroupingMetadata {
	keys: Vec<Column>,
	rows: Vec<Vec<usize>>,
	rows_column: String,
	implicit_missing: Vec<bool>,
}

impl GroupingMetadata {
	/// Assemble metadata from label columns and row-index lists. Every label
	/// column must have one entry per row-index list.
	///
	/// # Panics
	///
	/// Panics if a label column's length differs from the number of groups.
	pub fn new(keys: Vec<Column>, rows: Vec<Vec<usize>>, rows_column: impl Into<String>) -> Self {
		match Self::try_new(keys, rows, rows_column) {
			Ok(metadata) => metadata,
			Err(err) => panic!("{err}"),
		}
	}

	/// Like [`new`](Self::new), but reports a label column of the wrong
	/// length as an error.
	pub fn try_new(keys: Vec<Column>, rows: Vec<Vec<usize>>, rows_column: impl Into<String>) -> Result<Self> {
		if let Some(key) = keys.iter().find(|k| k.data.len() != rows.len()) {
			return Err(Error::ColumnLengthMismatch {
				name: key.name.clone(),
				len: key.data.len(),
				expected: rows.len(),
			});
		}

		let implicit_missing = keys
			.iter()
			.map(|k| k.data.as_categorical().is_some_and(|c| c.has_missing()))
			.collect();

		Ok(Self {
			keys,
			rows,
			rows_column: rows_column.into(),
			implicit_missing,
		})
	}

	pub fn ngroups(&self) -> usize {
		self.rows.len()
	}

	pub fn keys(&self) -> &[Column] {
		&self.keys
	}

	pub fn key(&self, name: &str) -> Option<&Column> {
		self.keys.iter().find(|k| k.name == name)
	}

	pub fn key_names(&self) -> impl Iterator<Item = &str> {
		self.keys.iter().map(|k| k.name.as_str())
	}

	/// Names of the result columns: the grouping columns followed by the
	/// row-index-list column.
	pub fn column_names(&self) -> Vec<&str> {
		self.key_names().chain(std::iter::once(self.rows_column.as_str())).collect()
	}

	pub fn rows(&self) -> &[Vec<usize>] {
		&self.rows
	}

	pub fn group_rows(&self, group: usize) -> &[usize] {
		&self.rows[group]
	}

	pub fn rows_column(&self) -> &str {
		&self.rows_column
	}

	/// Per key column, whether it is categorical and produced a missing
	/// group.
	pub fn implicit_missing(&self) -> &[bool] {
		&self.implicit_missing
	}

	pub fn has_implicit_missing(&self, name: &str) -> bool {
		self.keys.iter().zip(&self.implicit_missing).any(|(k, &missing)| missing && k.name == name)
	}

	pub fn implicit_missing_columns(&self) -> impl Iterator<Item = &str> {
		self.keys.iter().zip(&self.implicit_missing).filter(|(_, missing)| **missing).map(|(k, _)| k.name.as_str())
	}

	/// The key values of one group, in key column order.
	pub fn group_key(&self, group: usize) -> Vec<Value> {
		self.keys.iter().map(|k| k.data.get_value(group)).collect()
	}

	pub fn group_sizes(&self) -> Vec<usize> {
		self.rows.iter().map(Vec::len).collect()
	}

	pub fn max_group_size(&self) -> usize {
		self.rows.iter().map(Vec::len).max().unwrap_or(0)
	}

	/// Number of rows covered by all groups together.
	pub fn total_rows(&self) -> usize {
		self.rows.iter().map(Vec::len).sum()
	}

	/// For each of `row_count` rows, the ordinal of the group holding it.
	///
	/// Rows not covered by any group get `None`.
	pub fn group_indices(&self, row_count: usize) -> Vec<Option<usize>> {
		let mut result = vec![None; row_count];
		for (group, rows) in self.rows.iter().enumerate() {
			for &row in rows {
				if let Some(slot) = result.get_mut(row) {
					*slot = Some(group);
				}
			}
		}
		result
	}
}

/// Serialized form without the derived missing flags, which are always
/// recomputed from the label columns.
#[derive(Deserialize)]
struct RawGroupingMetadata {
	keys: Vec<Column>,
	rows: Vec<Vec<usize>>,
	rows_column: String,
}

impl TryFrom<RawGroupingMetadata> for GroupingMetadata {
	type Error = Error;

	fn try_from(raw: RawGroupingMetadata) -> Result<Self> {
		Self::try_new(raw.keys, raw.rows, raw.rows_column)
	}
}
