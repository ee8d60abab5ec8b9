// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use slicer_type::OrderedF64;
use xxhash_rust::xxh3::xxh3_64;

use crate::Container;

const UNDEFINED_HASH: u64 = 0x9e37_79b9_7f4a_7c15;

/// Equality, hashing and total order over the rows of one column.
///
/// `eq_rows(l, r)` implies `hash_row(l) == hash_row(r)`, and `cmp_rows` is a
/// total order consistent with `eq_rows`. Undefined rows are equal to each
/// other and sort after every defined row.
pub trait RowKey: Send + Sync {
	fn hash_row(&self, row: usize) -> u64;

	fn eq_rows(&self, l: usize, r: usize) -> bool;

	fn cmp_rows(&self, l: usize, r: usize) -> Ordering;
}

/// Per-value half of [`RowKey`], implemented for every groupable scalar.
pub trait KeyElement: Send + Sync {
	fn key_hash(&self) -> u64;

	fn key_eq(&self, other: &Self) -> bool;

	fn key_cmp(&self, other: &Self) -> Ordering;
}

impl KeyElement for bool {
	fn key_hash(&self) -> u64 {
		xxh3_64(&[*self as u8])
	}

	fn key_eq(&self, other: &Self) -> bool {
		self == other
	}

	fn key_cmp(&self, other: &Self) -> Ordering {
		self.cmp(other)
	}
}

impl KeyElement for i32 {
	fn key_hash(&self) -> u64 {
		xxh3_64(&self.to_le_bytes())
	}

	fn key_eq(&self, other: &Self) -> bool {
		self == other
	}

	fn key_cmp(&self, other: &Self) -> Ordering {
		self.cmp(other)
	}
}

impl KeyElement for i64 {
	fn key_hash(&self) -> u64 {
		xxh3_64(&self.to_le_bytes())
	}

	fn key_eq(&self, other: &Self) -> bool {
		self == other
	}

	fn key_cmp(&self, other: &Self) -> Ordering {
		self.cmp(other)
	}
}

impl KeyElement for f64 {
	fn key_hash(&self) -> u64 {
		xxh3_64(&OrderedF64::new(*self).canonical_bits().to_le_bytes())
	}

	fn key_eq(&self, other: &Self) -> bool {
		OrderedF64::total_eq(*self, *other)
	}

	fn key_cmp(&self, other: &Self) -> Ordering {
		OrderedF64::total_cmp(*self, *other)
	}
}

impl KeyElement for String {
	fn key_hash(&self) -> u64 {
		xxh3_64(self.as_bytes())
	}

	fn key_eq(&self, other: &Self) -> bool {
		self == other
	}

	// bytewise, independent of locale
	fn key_cmp(&self, other: &Self) -> Ordering {
		self.as_bytes().cmp(other.as_bytes())
	}
}

impl<T: KeyElement> RowKey for Container<T> {
	fn hash_row(&self, row: usize) -> u64 {
		self.get(row).map_or(UNDEFINED_HASH, KeyElement::key_hash)
	}

	fn eq_rows(&self, l: usize, r: usize) -> bool {
		match (self.get(l), self.get(r)) {
			(Some(l), Some(r)) => l.key_eq(r),
			(None, None) => true,
			_ => false,
		}
	}

	fn cmp_rows(&self, l: usize, r: usize) -> Ordering {
		match (self.get(l), self.get(r)) {
			(Some(l), Some(r)) => l.key_cmp(r),
			(None, None) => Ordering::Equal,
			(Some(_), None) => Ordering::Less,
			(None, Some(_)) => Ordering::Greater,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cmp::Ordering;

	use crate::{BitVec, Container, RowKey};

	#[test]
	fn test_undefined_rows_are_equal_and_last() {
		let container = Container::new(vec![3i64, 0, 1, 0], BitVec::from_slice(&[true, false, true, false]));
		assert!(container.eq_rows(1, 3));
		assert_eq!(container.hash_row(1), container.hash_row(3));
		assert!(!container.eq_rows(0, 1));
		assert_eq!(container.cmp_rows(1, 0), Ordering::Greater);
		assert_eq!(container.cmp_rows(2, 0), Ordering::Less);
	}

	#[test]
	fn test_float_zero_and_nan_classes() {
		let container = Container::from_vec(vec![0.0f64, -0.0, f64::NAN, f64::NAN, 7.5]);
		assert!(container.eq_rows(0, 1));
		assert_eq!(container.hash_row(0), container.hash_row(1));
		assert!(container.eq_rows(2, 3));
		assert_eq!(container.hash_row(2), container.hash_row(3));
		assert_eq!(container.cmp_rows(4, 2), Ordering::Less);
	}

	#[test]
	fn test_strings_compare_bytewise() {
		let container = Container::from_vec(vec!["b".to_string(), "B".to_string(), "a".to_string()]);
		assert_eq!(container.cmp_rows(1, 0), Ordering::Less);
		assert_eq!(container.cmp_rows(2, 0), Ordering::Less);
		assert_eq!(container.cmp_rows(1, 2), Ordering::Less);
	}
}
