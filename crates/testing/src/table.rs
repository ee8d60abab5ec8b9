// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Seeded random tables for property-style grouping tests.

use rand::{Rng, SeedableRng, rngs::StdRng};
use slicer_column::{Column, Columns};

const WORDS: [&str; 5] = ["alpha", "beta", "gamma", "delta", ""];
const FLOATS: [f64; 6] = [0.0, -0.0, 1.5, -2.25, f64::NAN, f64::INFINITY];

/// Declared levels of the `fct` column. `unused` never occurs in the data.
pub const LEVELS: [&str; 4] = ["low", "mid", "high", "unused"];

/// Builder for a table holding one column of every groupable type.
///
/// Columns, in order: `flag` (bool), `small` (int4), `big` (int8), `real`
/// (float8), `word` (utf8) and `fct` (categorical over [`LEVELS`]). Values are
/// drawn from small domains so groups repeat.
#[derive(Debug, Clone)]
pub struct RandomTable {
	seed: u64,
	rows: usize,
	undefined: f64,
}

impl RandomTable {
	pub fn new(seed: u64, rows: usize) -> Self {
		Self {
			seed,
			rows,
			undefined: 0.1,
		}
	}

	/// Probability that a value is undefined (or missing, for `fct`).
	pub fn with_undefined(mut self, probability: f64) -> Self {
		self.undefined = probability;
		self
	}

	pub fn build(self) -> Columns {
		let mut rng = StdRng::seed_from_u64(self.seed);
		let n = self.rows;
		let p = self.undefined;

		let validity = |rng: &mut StdRng| -> Vec<bool> { (0..n).map(|_| !rng.gen_bool(p)).collect() };

		let flag: Vec<bool> = (0..n).map(|_| rng.gen_bool(0.5)).collect();
		let flag_valid = validity(&mut rng);

		let small: Vec<i32> = (0..n).map(|_| rng.gen_range(-3..4)).collect();
		let small_valid = validity(&mut rng);

		let big: Vec<i64> = (0..n).map(|_| rng.gen_range(0..3) * 1_000_000_000_000).collect();
		let big_valid = validity(&mut rng);

		let real: Vec<f64> = (0..n).map(|_| FLOATS[rng.gen_range(0..FLOATS.len())]).collect();
		let real_valid = validity(&mut rng);

		let word: Vec<&str> = (0..n).map(|_| WORDS[rng.gen_range(0..WORDS.len())]).collect();
		let word_valid = validity(&mut rng);

		// only the first three levels are ever drawn
		let fct: Vec<Option<&str>> =
			(0..n).map(|_| if rng.gen_bool(p) { None } else { Some(LEVELS[rng.gen_range(0..3)]) }).collect();

		Columns::new(vec![
			Column::bool_with_validity("flag", flag, flag_valid),
			Column::int4_with_validity("small", small, small_valid),
			Column::int8_with_validity("big", big, big_valid),
			Column::float8_with_validity("real", real, real_valid),
			Column::utf8_with_validity("word", word, word_valid),
			Column::categorical("fct", LEVELS, fct),
		])
	}
}

/// Shorthand for `RandomTable::new(seed, rows).build()`.
pub fn random_table(seed: u64, rows: usize) -> Columns {
	RandomTable::new(seed, rows).build()
}
