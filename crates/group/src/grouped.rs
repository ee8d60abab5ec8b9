// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use slicer_column::Columns;
use slicer_type::{Error, Result};
use tracing::{debug, instrument};

use crate::{build_index, config::GroupingConfig, metadata::GroupingMetadata};

/// A table together with its grouping columns and, once built, its grouping
/// metadata.
#[derive(Clone, Debug)]
pub struct GroupedColumns {
	columns: Columns,
	keys: Vec<String>,
	groups: Option<GroupingMetadata>,
}

impl GroupedColumns {
	/// Group `columns` by `keys` and build the index right away.
	#[instrument(name = "group::grouped::new", level = "debug", skip(columns, config))]
	pub fn new(columns: Columns, keys: &[&str], config: &GroupingConfig) -> Result<Self> {
		let mut result = Self::lazy(columns, keys)?;
		result.force(config)?;
		Ok(result)
	}

	/// Group `columns` by `keys` without building the index yet. Unknown or
	/// ineligible columns surface on [`force`](Self::force).
	pub fn lazy(columns: Columns, keys: &[&str]) -> Result<Self> {
		if keys.is_empty() {
			return Err(Error::NoGroupingColumns);
		}

		Ok(Self {
			columns,
			keys: keys.iter().map(|k| k.to_string()).collect(),
			groups: None,
		})
	}

	/// Attach grouping metadata computed earlier.
	///
	/// The metadata must account for every row of `columns` exactly once in
	/// total, otherwise the state is rejected as corrupt.
	#[instrument(name = "group::grouped::from_groups", level = "debug", skip_all)]
	pub fn from_groups(columns: Columns, groups: GroupingMetadata) -> Result<Self> {
		if groups.keys().is_empty() {
			return Err(Error::NoGroupingColumns);
		}

		let rows = columns.row_count();
		let group_rows = groups.total_rows();
		if rows != group_rows {
			return Err(Error::CorruptGroupingState {
				rows,
				group_rows,
			});
		}

		let keys = groups.key_names().map(str::to_string).collect();
		Ok(Self {
			columns,
			keys,
			groups: Some(groups),
		})
	}

	/// Build the grouping metadata on first call and return it.
	pub fn force(&mut self, config: &GroupingConfig) -> Result<&GroupingMetadata> {
		let groups = match self.groups.take() {
			Some(groups) => groups,
			None => {
				let keys: Vec<&str> = self.keys.iter().map(String::as_str).collect();
				let groups = build_index(&self.columns, &keys, config)?;
				debug!(ngroups = groups.ngroups(), "grouping metadata built");
				groups
			}
		};
		Ok(self.groups.insert(groups))
	}

	pub fn is_built(&self) -> bool {
		self.groups.is_some()
	}

	/// The grouping metadata, if it has been built.
	pub fn groups(&self) -> Option<&GroupingMetadata> {
		self.groups.as_ref()
	}

	pub fn columns(&self) -> &Columns {
		&self.columns
	}

	pub fn keys(&self) -> &[String] {
		&self.keys
	}

	/// Drop the grouping and hand back the table.
	pub fn ungroup(self) -> Columns {
		self.columns
	}
}
