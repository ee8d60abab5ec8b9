// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The partition tree behind a group-by index.
//!
//! Each depth of the tree splits its rows by one grouping column; the last
//! depth holds one leaf per group. Nodes cache their leaf count at
//! construction so the materializer can size every output buffer before a
//! single group is written.

use rayon::prelude::*;
use slicer_column::{CategoricalContainer, ColumnData, RowKey};

use crate::{output::OutputSlots, range::RowRange};

mod categorical;
mod general;
mod leaf;

pub(crate) use categorical::CategoricalPartition;
pub(crate) use general::GeneralPartition;
pub(crate) use leaf::LeafPartition;

/// A grouping column resolved for partitioning.
pub(crate) struct KeyColumn<'a> {
	pub(crate) data: &'a ColumnData,
	pub(crate) kind: KeyKind<'a>,
}

pub(crate) enum KeyKind<'a> {
	Categorical(&'a CategoricalContainer),
	General(&'a dyn RowKey),
}

#[derive(Debug)]
pub(crate) enum Partition {
	Leaf(LeafPartition),
	Categorical(CategoricalPartition),
	General(GeneralPartition),
}

impl Partition {
	/// Number of leaves in this subtree.
	pub(crate) fn size(&self) -> usize {
		match self {
			Partition::Leaf(leaf) => leaf.size(),
			Partition::Categorical(node) => node.size(),
			Partition::General(node) => node.size(),
		}
	}

	/// Write this subtree's groups into `out`, which must span exactly
	/// [`size`](Self::size) ordinals. Label columns are written only over the
	/// span of `out`.
	pub(crate) fn materialize(&self, keys: &[KeyColumn<'_>], labels: &mut [ColumnData], out: OutputSlots<'_>) {
		debug_assert_eq!(out.len(), self.size());
		match self {
			Partition::Leaf(leaf) => leaf.materialize(out),
			Partition::Categorical(node) => node.materialize(keys, labels, out),
			Partition::General(node) => node.materialize(keys, labels, out),
		}
	}
}

/// Builds the partition tree for one set of grouping columns.
pub(crate) struct Builder<'a> {
	keys: &'a [KeyColumn<'a>],
	parallel_threshold: Option<usize>,
}

impl<'a> Builder<'a> {
	pub(crate) fn new(keys: &'a [KeyColumn<'a>], parallel_threshold: Option<usize>) -> Self {
		Self {
			keys,
			parallel_threshold,
		}
	}

	pub(crate) fn build(&self, depth: usize, rows: RowRange) -> Partition {
		match self.keys.get(depth) {
			None => Partition::Leaf(LeafPartition::new(rows.into_rows())),
			Some(key) => match key.kind {
				KeyKind::Categorical(container) => {
					Partition::Categorical(CategoricalPartition::new(self, depth, rows, container))
				}
				KeyKind::General(row_key) => {
					Partition::General(GeneralPartition::new(self, depth, rows, row_key))
				}
			},
		}
	}

	/// Build one child per bucket, keeping bucket order.
	fn build_children(&self, depth: usize, parent_rows: usize, buckets: Vec<Vec<usize>>) -> Vec<Partition> {
		match self.parallel_threshold {
			Some(threshold) if parent_rows >= threshold && buckets.len() > 1 => buckets
				.into_par_iter()
				.map(|rows| self.build(depth, RowRange::Rows(rows)))
				.collect(),
			_ => buckets.into_iter().map(|rows| self.build(depth, RowRange::Rows(rows))).collect(),
		}
	}
}
