// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use slicer_type::{Error, GetType, Type};

use crate::BitVec;

mod categorical;

pub use categorical::CategoricalContainer;

/// Values of one scalar column plus a validity mask (bit set = defined).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawContainer<T>")]
pub struct Container<T> {
	data: Vec<T>,
	bitvec: BitVec,
}

#[derive(Deserialize)]
struct RawContainer<T> {
	data: Vec<T>,
	bitvec: BitVec,
}

impl<T> TryFrom<RawContainer<T>> for Container<T> {
	type Error = Error;

	fn try_from(raw: RawContainer<T>) -> Result<Self, Self::Error> {
		if raw.data.len() != raw.bitvec.len() {
			return Err(Error::ValidityLengthMismatch {
				values: raw.data.len(),
				validity: raw.bitvec.len(),
			});
		}
		Ok(Self {
			data: raw.data,
			bitvec: raw.bitvec,
		})
	}
}

impl<T> Container<T> {
	pub fn new(data: Vec<T>, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self {
			data,
			bitvec,
		}
	}

	pub fn from_vec(data: Vec<T>) -> Self {
		let len = data.len();
		Self {
			data,
			bitvec: BitVec::repeat(len, true),
		}
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.data.len(), self.bitvec.len());
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn get(&self, idx: usize) -> Option<&T> {
		if self.is_defined(idx) {
			self.data.get(idx)
		} else {
			None
		}
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		idx < self.len() && self.bitvec.get(idx)
	}
}

impl<T: Default + Clone> Container<T> {
	pub fn undefined(len: usize) -> Self {
		Self {
			data: vec![T::default(); len],
			bitvec: BitVec::repeat(len, false),
		}
	}

	/// Overwrite `len` slots starting at `start` with `value`, or with
	/// undefined slots when `value` is `None`.
	pub fn fill(&mut self, start: usize, len: usize, value: Option<&T>) {
		let slots = &mut self.data[start..start + len];
		match value {
			Some(value) => slots.fill(value.clone()),
			None => slots.fill(T::default()),
		}
		self.bitvec.set_range(start, len, value.is_some());
	}
}

impl<T: GetType> Container<T> {
	pub fn get_type(&self) -> Type {
		T::get_type()
	}
}
