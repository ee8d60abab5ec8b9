// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use slicer_column::{ColumnData, RowKey};
use smallvec::SmallVec;

use super::{Builder, KeyColumn, Partition};
use crate::{output::OutputSlots, range::RowRange};

#[derive(Debug)]
struct GeneralChild {
	/// A row holding this child's key value. `None` only for the
	/// placeholder child of an empty row range.
	representative: Option<usize>,
	partition: Partition,
}

/// Splits rows by the distinct values of a non-categorical column, ordered
/// by the column's row ordering.
#[derive(Debug)]
pub(crate) struct GeneralPartition {
	depth: usize,
	children: Vec<GeneralChild>,
	size: usize,
}

struct Bucket {
	representative: usize,
	rows: Vec<usize>,
}

impl GeneralPartition {
	pub(crate) fn new(builder: &Builder<'_>, depth: usize, rows: RowRange, key: &dyn RowKey) -> Self {
		// An empty range still yields one child so that categorical levels
		// above it keep their (empty) group.
		if rows.is_empty() {
			let partition = builder.build(depth + 1, RowRange::Rows(Vec::new()));
			let size = partition.size();
			return Self {
				depth,
				children: vec![GeneralChild {
					representative: None,
					partition,
				}],
				size,
			};
		}

		let mut buckets = bucket_rows(&rows, key);
		buckets.sort_unstable_by(|l, r| key.cmp_rows(l.representative, r.representative));

		let representatives: Vec<usize> = buckets.iter().map(|b| b.representative).collect();
		let partitions =
			builder.build_children(depth + 1, rows.len(), buckets.into_iter().map(|b| b.rows).collect());

		let children: Vec<GeneralChild> = representatives
			.into_iter()
			.zip(partitions)
			.map(|(representative, partition)| GeneralChild {
				representative: Some(representative),
				partition,
			})
			.collect();
		let size = children.iter().map(|child| child.partition.size()).sum();

		Self {
			depth,
			children,
			size,
		}
	}

	pub(crate) fn size(&self) -> usize {
		self.size
	}

	pub(crate) fn materialize(&self, keys: &[KeyColumn<'_>], labels: &mut [ColumnData], mut out: OutputSlots<'_>) {
		let source = keys[self.depth].data;

		for child in &self.children {
			let slots = out.split_front(child.partition.size());
			let range = slots.range();
			child.partition.materialize(keys, labels, slots);
			labels[self.depth].fill_from(range.start, range.len, source, child.representative);
		}
		debug_assert!(out.is_empty());
	}
}

/// Group rows into buckets of equal key, in first-seen order.
fn bucket_rows(rows: &RowRange, key: &dyn RowKey) -> Vec<Bucket> {
	let mut index: HashMap<u64, SmallVec<[usize; 1]>> = HashMap::new();
	let mut buckets: Vec<Bucket> = Vec::new();

	for row in rows.iter() {
		let candidates = index.entry(key.hash_row(row)).or_default();
		match candidates.iter().find(|&&b| key.eq_rows(buckets[b].representative, row)) {
			Some(&b) => buckets[b].rows.push(row),
			None => {
				candidates.push(buckets.len());
				buckets.push(Bucket {
					representative: row,
					rows: vec![row],
				});
			}
		}
	}

	buckets
}

#[cfg(test)]
mod tests {
	use std::cmp::Ordering;

	use slicer_column::{Column, ColumnData, Columns, RowKey};
	use slicer_type::Value;

	use super::bucket_rows;
	use crate::{
		output::OutputSlots,
		partition::{Builder, KeyColumn, KeyKind},
		range::RowRange,
	};

	fn run(columns: &Columns) -> (usize, Vec<ColumnData>, Vec<Vec<usize>>) {
		let keys: Vec<KeyColumn<'_>> = columns
			.iter()
			.map(|column| KeyColumn {
				data: &column.data,
				kind: match &column.data {
					ColumnData::Categorical(container) => KeyKind::Categorical(container),
					data => KeyKind::General(data.row_key().unwrap()),
				},
			})
			.collect();
		let tree = Builder::new(&keys, None).build(0, RowRange::All(columns.row_count()));
		let size = tree.size();
		let mut labels: Vec<ColumnData> = keys.iter().map(|k| k.data.empty_like(size)).collect();
		let mut rows = vec![Vec::new(); size];
		tree.materialize(&keys, &mut labels, OutputSlots::new(&mut rows));
		(size, labels, rows)
	}

	#[test]
	fn test_distinct_values_sorted() {
		let columns = Columns::new(vec![Column::int4("n", [3, 1, 3, 2, 1])]);
		let (size, labels, rows) = run(&columns);

		assert_eq!(size, 3);
		assert_eq!(rows, vec![vec![1, 4], vec![3], vec![0, 2]]);
		let values: Vec<Value> = (0..size).map(|i| labels[0].get_value(i)).collect();
		assert_eq!(values, vec![Value::int4(1), Value::int4(2), Value::int4(3)]);
	}

	#[test]
	fn test_undefined_is_its_own_group_sorted_last() {
		let columns = Columns::new(vec![Column::utf8_with_validity(
			"s",
			["b", "", "a", ""],
			[true, false, true, false],
		)]);
		let (size, labels, rows) = run(&columns);

		assert_eq!(size, 3);
		assert_eq!(rows, vec![vec![2], vec![0], vec![1, 3]]);
		assert_eq!(labels[0].get_value(2), Value::Undefined);
	}

	#[test]
	fn test_float_zero_and_nan_collapse() {
		let columns = Columns::new(vec![Column::float8("f", [f64::NAN, 0.0, -0.0, 1.5, f64::NAN])]);
		let (size, _, rows) = run(&columns);

		assert_eq!(size, 3);
		assert_eq!(rows, vec![vec![1, 2], vec![3], vec![0, 4]]);
	}

	#[test]
	fn test_empty_range_keeps_placeholder_under_categorical() {
		let columns = Columns::new(vec![
			Column::categorical("c", ["a", "b"], [Some("a"), Some("a")]),
			Column::int8("n", [7, 7]),
		]);
		let (size, labels, rows) = run(&columns);

		assert_eq!(size, 2);
		assert_eq!(rows, vec![vec![0, 1], vec![]]);
		assert_eq!(labels[0].get_value(1), Value::level("b"));
		assert_eq!(labels[1].get_value(0), Value::int8(7));
		assert_eq!(labels[1].get_value(1), Value::Undefined);
	}

	struct Colliding(Vec<i32>);

	impl RowKey for Colliding {
		fn hash_row(&self, _row: usize) -> u64 {
			42
		}

		fn eq_rows(&self, l: usize, r: usize) -> bool {
			self.0[l] == self.0[r]
		}

		fn cmp_rows(&self, l: usize, r: usize) -> Ordering {
			self.0[l].cmp(&self.0[r])
		}
	}

	#[test]
	fn test_hash_collisions_stay_apart() {
		let key = Colliding(vec![5, 6, 5, 7]);
		let buckets = bucket_rows(&RowRange::All(4), &key);

		let rows: Vec<Vec<usize>> = buckets.into_iter().map(|b| b.rows).collect();
		assert_eq!(rows, vec![vec![0, 2], vec![1], vec![3]]);
	}
}
