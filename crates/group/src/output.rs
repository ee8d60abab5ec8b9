// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::mem;

use crate::range::OutputRange;

/// The part of the output one partition node owns: its span of group
/// ordinals and exactly the row-index-list slots of that span.
///
/// Children get disjoint spans carved off the front with
/// [`split_front`](Self::split_front), so a node can only ever write the
/// groups below it.
#[derive(Debug)]
pub(crate) struct OutputSlots<'r> {
	range: OutputRange,
	rows: &'r mut [Vec<usize>],
}

impl<'r> OutputSlots<'r> {
	/// Slots for the whole output, ordinals `0..rows.len()`.
	pub(crate) fn new(rows: &'r mut [Vec<usize>]) -> Self {
		Self {
			range: OutputRange::new(0, rows.len()),
			rows,
		}
	}

	pub(crate) fn range(&self) -> OutputRange {
		self.range
	}

	pub(crate) fn len(&self) -> usize {
		self.rows.len()
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Hand the first `len` slots to a child; `self` keeps the rest.
	pub(crate) fn split_front(&mut self, len: usize) -> OutputSlots<'r> {
		let (front, rest) = mem::take(&mut self.rows).split_at_mut(len);
		self.rows = rest;
		OutputSlots {
			range: self.range.split_front(len),
			rows: front,
		}
	}

	/// Store the row-index list of the single group these slots cover.
	pub(crate) fn write_group(mut self, rows: Vec<usize>) {
		debug_assert_eq!(self.len(), 1, "a leaf owns exactly one slot");
		self.rows[0] = rows;
	}
}

#[cfg(test)]
mod tests {
	use super::OutputSlots;
	use crate::range::OutputRange;

	#[test]
	fn test_split_hands_out_disjoint_slots() {
		let mut rows = vec![Vec::new(); 4];
		let mut slots = OutputSlots::new(&mut rows);

		let first = slots.split_front(1);
		assert_eq!(first.range(), OutputRange::new(0, 1));
		first.write_group(vec![7, 9]);

		let mut middle = slots.split_front(2);
		assert_eq!(middle.range(), OutputRange::new(1, 2));
		middle.split_front(1).write_group(vec![]);
		middle.split_front(1).write_group(vec![3]);
		assert!(middle.is_empty());

		slots.split_front(1).write_group(vec![0]);
		assert!(slots.is_empty());
		assert_eq!(slots.range(), OutputRange::new(4, 0));

		assert_eq!(rows, vec![vec![7, 9], vec![], vec![3], vec![0]]);
	}
}
