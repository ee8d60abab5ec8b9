// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use slicer_column::{CategoricalContainer, ColumnData};

use super::{Builder, KeyColumn, Partition};
use crate::{output::OutputSlots, range::RowRange};

/// Splits rows by a categorical column.
///
/// There is one child per declared level, in level order, whether or not any
/// row carries that level. Rows with the missing code go to a trailing extra
/// child, which exists only when at least one such row was seen.
#[derive(Debug)]
pub(crate) struct CategoricalPartition {
	depth: usize,
	nlevels: usize,
	has_missing: bool,
	children: Vec<Partition>,
	size: usize,
}

impl CategoricalPartition {
	pub(crate) fn new(builder: &Builder<'_>, depth: usize, rows: RowRange, container: &CategoricalContainer) -> Self {
		let nlevels = container.nlevels();

		// buckets[nlevels] collects the missing code
		let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); nlevels + 1];
		for row in rows.iter() {
			match container.code(row) {
				CategoricalContainer::MISSING => buckets[nlevels].push(row),
				code => buckets[code as usize - 1].push(row),
			}
		}

		let has_missing = !buckets[nlevels].is_empty();
		if !has_missing {
			buckets.pop();
		}

		let children = builder.build_children(depth + 1, rows.len(), buckets);
		let size = children.iter().map(Partition::size).sum();

		Self {
			depth,
			nlevels,
			has_missing,
			children,
			size,
		}
	}

	pub(crate) fn size(&self) -> usize {
		self.size
	}

	pub(crate) fn materialize(&self, keys: &[KeyColumn<'_>], labels: &mut [ColumnData], mut out: OutputSlots<'_>) {
		debug_assert_eq!(self.children.len(), self.nlevels + self.has_missing as usize);

		for (idx, child) in self.children.iter().enumerate() {
			let slots = out.split_front(child.size());
			let range = slots.range();
			child.materialize(keys, labels, slots);

			let code = if idx < self.nlevels {
				idx as u32 + 1
			} else {
				CategoricalContainer::MISSING
			};
			labels[self.depth].fill_code(range.start, range.len, code);
		}
		debug_assert!(out.is_empty());
	}
}
