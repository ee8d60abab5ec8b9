// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{self, Display, Formatter},
	hash::{Hash, Hasher},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

/// An `f64` with a total order and a lawful `Eq`/`Hash`.
///
/// `-0.0` and `0.0` are the same value, every NaN is the same value, and NaN
/// sorts after all numbers.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedF64(f64);

impl OrderedF64 {
	pub fn new(value: f64) -> Self {
		Self(value)
	}

	/// Bit pattern used for hashing: all NaNs collapse to one pattern and
	/// negative zero collapses to positive zero.
	pub fn canonical_bits(&self) -> u64 {
		if self.0.is_nan() {
			f64::NAN.to_bits()
		} else if self.0 == 0.0 {
			0.0f64.to_bits()
		} else {
			self.0.to_bits()
		}
	}

	pub fn total_cmp(l: f64, r: f64) -> Ordering {
		match (l.is_nan(), r.is_nan()) {
			(true, true) => Ordering::Equal,
			(true, false) => Ordering::Greater,
			(false, true) => Ordering::Less,
			(false, false) => l.partial_cmp(&r).unwrap_or(Ordering::Equal),
		}
	}

	pub fn total_eq(l: f64, r: f64) -> bool {
		Self::total_cmp(l, r) == Ordering::Equal
	}
}

impl From<f64> for OrderedF64 {
	fn from(value: f64) -> Self {
		Self(value)
	}
}

impl From<OrderedF64> for f64 {
	fn from(value: OrderedF64) -> Self {
		value.0
	}
}

impl Deref for OrderedF64 {
	type Target = f64;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl PartialEq for OrderedF64 {
	fn eq(&self, other: &Self) -> bool {
		Self::total_eq(self.0, other.0)
	}
}

impl Eq for OrderedF64 {}

impl PartialOrd for OrderedF64 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF64 {
	fn cmp(&self, other: &Self) -> Ordering {
		Self::total_cmp(self.0, other.0)
	}
}

impl Hash for OrderedF64 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		state.write_u64(self.canonical_bits())
	}
}

impl Display for OrderedF64 {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}
