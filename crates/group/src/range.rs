// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// The rows a partition node looks at.
///
/// The root sees every row of the table; `All` stands for `0..n` without
/// allocating it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum RowRange {
	All(usize),
	Rows(Vec<usize>),
}

impl RowRange {
	pub(crate) fn len(&self) -> usize {
		match self {
			RowRange::All(n) => *n,
			RowRange::Rows(rows) => rows.len(),
		}
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub(crate) fn iter(&self) -> impl Iterator<Item = usize> + '_ {
		let none: &[usize] = &[];
		let (all, rows) = match self {
			RowRange::All(n) => (0..*n, none.iter()),
			RowRange::Rows(rows) => (0..0, rows.iter()),
		};
		all.chain(rows.copied())
	}

	pub(crate) fn into_rows(self) -> Vec<usize> {
		match self {
			RowRange::All(n) => (0..n).collect(),
			RowRange::Rows(rows) => rows,
		}
	}
}

/// A contiguous span of group ordinals in the output buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct OutputRange {
	pub(crate) start: usize,
	pub(crate) len: usize,
}

impl OutputRange {
	pub(crate) fn new(start: usize, len: usize) -> Self {
		Self {
			start,
			len,
		}
	}

	/// Split off the first `len` ordinals; `self` keeps the remainder.
	pub(crate) fn split_front(&mut self, len: usize) -> OutputRange {
		debug_assert!(len <= self.len, "cannot split {len} ordinals off a span of {}", self.len);
		let front = OutputRange::new(self.start, len);
		self.start += len;
		self.len -= len;
		front
	}
}
