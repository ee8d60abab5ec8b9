// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug, Formatter};

use serde::{Deserialize, Serialize};

/// A growable, byte-backed bit vector used for validity masks.
///
/// Serialized as a plain list of booleans so the byte buffer and the length
/// can never disagree.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<bool>", into = "Vec<bool>")]
pub struct BitVec {
	bits: Vec<u8>,
	len: usize,
}

impl BitVec {
	fn with_capacity(capacity: usize) -> Self {
		Self {
			bits: Vec::with_capacity(capacity.div_ceil(8)),
			len: 0,
		}
	}

	pub fn repeat(len: usize, value: bool) -> Self {
		let fill = if value {
			0xFF
		} else {
			0x00
		};
		let mut result = Self {
			bits: vec![fill; len.div_ceil(8)],
			len,
		};
		result.clear_tail();
		result
	}

	pub fn from_slice(values: &[bool]) -> Self {
		let mut result = Self::with_capacity(values.len());
		for &value in values {
			result.push(value);
		}
		result
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn get(&self, idx: usize) -> bool {
		debug_assert!(idx < self.len, "bit index {idx} out of bounds for length {}", self.len);
		self.bits[idx / 8] & (1 << (idx % 8)) != 0
	}

	pub fn set(&mut self, idx: usize, value: bool) {
		debug_assert!(idx < self.len, "bit index {idx} out of bounds for length {}", self.len);
		let mask = 1 << (idx % 8);
		if value {
			self.bits[idx / 8] |= mask;
		} else {
			self.bits[idx / 8] &= !mask;
		}
	}

	/// Set `len` consecutive bits starting at `start` to `value`.
	pub fn set_range(&mut self, start: usize, len: usize, value: bool) {
		for idx in start..start + len {
			self.set(idx, value);
		}
	}

	pub fn push(&mut self, value: bool) {
		if self.len % 8 == 0 {
			self.bits.push(0);
		}
		self.len += 1;
		self.set(self.len - 1, value);
	}

	pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
		(0..self.len).map(|idx| self.get(idx))
	}

	fn clear_tail(&mut self) {
		let rem = self.len % 8;
		if rem != 0 {
			if let Some(last) = self.bits.last_mut() {
				*last &= (1u8 << rem) - 1;
			}
		}
	}
}

impl From<Vec<bool>> for BitVec {
	fn from(values: Vec<bool>) -> Self {
		Self::from_slice(&values)
	}
}

impl From<BitVec> for Vec<bool> {
	fn from(bitvec: BitVec) -> Self {
		bitvec.iter().collect()
	}
}

impl Debug for BitVec {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("BitVec[")?;
		for bit in self.iter() {
			f.write_str(if bit {
				"1"
			} else {
				"0"
			})?;
		}
		f.write_str("]")
	}
}
