// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// Name of the row-index-list column unless configured otherwise.
pub const DEFAULT_ROWS_COLUMN: &str = ".rows";

/// Settings for one grouping request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
	/// Reserved name of the row-index-list column in the result.
	pub rows_column: String,
	/// Emit a warning for each categorical key column that ends up with a
	/// missing-value group.
	pub warn_implicit_missing: bool,
	/// Build sibling subtrees on the rayon pool once a node sees at least
	/// this many rows. `None` keeps the build on the calling thread.
	pub parallel_threshold: Option<usize>,
}

impl Default for GroupingConfig {
	fn default() -> Self {
		Self {
			rows_column: DEFAULT_ROWS_COLUMN.to_string(),
			warn_implicit_missing: true,
			parallel_threshold: None,
		}
	}
}

impl GroupingConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_rows_column(mut self, name: impl Into<String>) -> Self {
		self.rows_column = name.into();
		self
	}

	pub fn with_warn_implicit_missing(mut self, warn: bool) -> Self {
		self.warn_implicit_missing = warn;
		self
	}

	pub fn with_parallel_threshold(mut self, rows: usize) -> Self {
		self.parallel_threshold = Some(rows);
		self
	}
}
