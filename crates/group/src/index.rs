// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use slicer_column::{Column, ColumnData, Columns};
use slicer_type::{Error, Result};
use tracing::{debug, instrument, warn};

use crate::{
	config::GroupingConfig,
	metadata::GroupingMetadata,
	output::OutputSlots,
	partition::{Builder, KeyColumn, KeyKind},
	range::RowRange,
};

/// Build the group-by index of `columns` over the grouping columns named in
/// `keys`, in that order.
///
/// With no keys the whole table is a single group.
#[instrument(name = "group::build_index", level = "debug", skip(columns, config), fields(rows = columns.row_count()))]
pub fn build_index(columns: &Columns, keys: &[&str], config: &GroupingConfig) -> Result<GroupingMetadata> {
	let resolved = resolve_keys(columns, keys)?;

	let tree = Builder::new(&resolved, config.parallel_threshold).build(0, RowRange::All(columns.row_count()));
	let ngroups = tree.size();
	debug!(ngroups, "partition tree built");

	let mut labels: Vec<ColumnData> = resolved.iter().map(|key| key.data.empty_like(ngroups)).collect();
	let mut rows = vec![Vec::new(); ngroups];
	tree.materialize(&resolved, &mut labels, OutputSlots::new(&mut rows));

	let key_columns = keys.iter().zip(labels).map(|(name, data)| Column::new(*name, data)).collect();
	let metadata = GroupingMetadata::new(key_columns, rows, config.rows_column.clone());

	if config.warn_implicit_missing {
		for name in metadata.implicit_missing_columns() {
			warn!("categorical column `{}` contains implicit missing values", name);
		}
	}

	Ok(metadata)
}

/// Look up every grouping column and pick how it is partitioned.
fn resolve_keys<'a>(columns: &'a Columns, keys: &[&str]) -> Result<Vec<KeyColumn<'a>>> {
	keys.iter()
		.map(|&name| {
			let column = columns.column(name).ok_or_else(|| Error::UnknownColumn {
				name: name.to_string(),
			})?;

			let ineligible = || Error::IneligibleType {
				name: name.to_string(),
				ty: column.data.get_type(),
			};

			if !column.data.get_type().is_groupable() {
				return Err(ineligible());
			}

			let kind = match &column.data {
				ColumnData::Categorical(container) => KeyKind::Categorical(container),
				data => KeyKind::General(data.row_key().ok_or_else(ineligible)?),
			};

			Ok(KeyColumn {
				data: &column.data,
				kind,
			})
		})
		.collect()
}
