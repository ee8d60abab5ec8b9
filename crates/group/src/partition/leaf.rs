// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::output::OutputSlots;

/// One fully resolved group.
#[derive(Debug)]
pub(crate) struct LeafPartition {
	rows: Vec<usize>,
}

impl LeafPartition {
	pub(crate) fn new(rows: Vec<usize>) -> Self {
		Self {
			rows,
		}
	}

	pub(crate) fn size(&self) -> usize {
		1
	}

	pub(crate) fn materialize(&self, out: OutputSlots<'_>) {
		out.write_group(self.rows.clone());
	}
}
