// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, sync::Arc};

use serde::{Deserialize, Serialize};

/// Integer-coded values over a closed set of declared levels.
///
/// Codes are 1-based positions into `levels`; [`Self::MISSING`] marks a row
/// that carries no level at all.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawCategorical")]
pub struct CategoricalContainer {
	codes: Vec<u32>,
	levels: Arc<[String]>,
}

#[derive(Deserialize)]
struct RawCategorical {
	codes: Vec<u32>,
	levels: Vec<String>,
}

impl From<RawCategorical> for CategoricalContainer {
	fn from(raw: RawCategorical) -> Self {
		Self::new(raw.levels, raw.codes)
	}
}

impl CategoricalContainer {
	pub const MISSING: u32 = 0;

	/// Codes outside `1..=levels.len()` are stored as missing.
	pub fn new(levels: impl Into<Arc<[String]>>, codes: impl IntoIterator<Item = u32>) -> Self {
		let levels = levels.into();
		let nlevels = levels.len() as u32;
		let codes = codes
			.into_iter()
			.map(|code| {
				if code <= nlevels {
					code
				} else {
					Self::MISSING
				}
			})
			.collect();
		Self {
			codes,
			levels,
		}
	}

	/// Encode level names; `None` and names outside the declared levels
	/// become missing.
	pub fn from_values<'a>(levels: impl Into<Arc<[String]>>, values: impl IntoIterator<Item = Option<&'a str>>) -> Self {
		let levels: Arc<[String]> = levels.into();
		let mut lookup: HashMap<&str, u32> = HashMap::with_capacity(levels.len());
		for (idx, level) in levels.iter().enumerate() {
			lookup.entry(level.as_str()).or_insert(idx as u32 + 1);
		}
		let codes = values
			.into_iter()
			.map(|value| value.and_then(|name| lookup.get(name).copied()).unwrap_or(Self::MISSING))
			.collect();
		Self {
			codes,
			levels,
		}
	}

	/// A container of `len` missing codes sharing `levels`.
	pub fn missing(levels: Arc<[String]>, len: usize) -> Self {
		Self {
			codes: vec![Self::MISSING; len],
			levels,
		}
	}

	pub fn len(&self) -> usize {
		self.codes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.codes.is_empty()
	}

	pub fn nlevels(&self) -> usize {
		self.levels.len()
	}

	pub fn levels(&self) -> &Arc<[String]> {
		&self.levels
	}

	pub fn codes(&self) -> &[u32] {
		&self.codes
	}

	pub fn code(&self, row: usize) -> u32 {
		self.codes[row]
	}

	pub fn has_missing(&self) -> bool {
		self.codes.contains(&Self::MISSING)
	}

	/// Level name behind a code, `None` for the missing code.
	pub fn level(&self, code: u32) -> Option<&str> {
		if code == Self::MISSING {
			return None;
		}
		self.levels.get(code as usize - 1).map(String::as_str)
	}

	pub fn fill(&mut self, start: usize, len: usize, code: u32) {
		debug_assert!(code as usize <= self.nlevels());
		self.codes[start..start + len].fill(code);
	}
}

#[cfg(test)]
mod tests {
	use super::CategoricalContainer;

	fn levels() -> Vec<String> {
		vec!["lo".to_string(), "mid".to_string(), "hi".to_string()]
	}

	#[test]
	fn test_from_values_encodes_one_based() {
		let container = CategoricalContainer::from_values(levels(), [Some("hi"), None, Some("lo"), Some("??")]);
		assert_eq!(container.codes(), &[3, 0, 1, 0]);
		assert_eq!(container.level(3), Some("hi"));
		assert_eq!(container.level(CategoricalContainer::MISSING), None);
		assert!(container.has_missing());
	}

	#[test]
	fn test_out_of_range_codes_become_missing() {
		let container = CategoricalContainer::new(levels(), [1, 4, 3]);
		assert_eq!(container.codes(), &[1, 0, 3]);
	}

	#[test]
	fn test_deserialize_normalizes_out_of_range_codes() {
		let container: CategoricalContainer =
			serde_json::from_str(r#"{"codes":[1,5,2,0],"levels":["a","b"]}"#).unwrap();
		assert_eq!(container.codes(), &[1, 0, 2, 0]);
		assert_eq!(container.nlevels(), 2);
	}

	#[test]
	fn test_from_values_first_duplicate_level_wins() {
		let levels = vec!["x".to_string(), "y".to_string(), "x".to_string()];
		let container = CategoricalContainer::from_values(levels, [Some("x"), Some("y")]);
		assert_eq!(container.codes(), &[1, 2]);
	}

	#[test]
	fn test_fill() {
		let mut container = CategoricalContainer::missing(levels().into(), 4);
		container.fill(1, 2, 2);
		assert_eq!(container.codes(), &[0, 2, 2, 0]);
	}
}
