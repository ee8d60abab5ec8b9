// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod diagnostic;

pub use diagnostic::{Diagnostic, IntoDiagnostic};

use crate::Type;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("column `{name}` is unknown")]
	UnknownColumn {
		name: String,
	},

	#[error("column `{name}` can't be used as a grouping variable because it's a {ty}")]
	IneligibleType {
		name: String,
		ty: Type,
	},

	#[error("corrupt grouping state, contains {rows} rows, and {group_rows} rows in groups")]
	CorruptGroupingState {
		rows: usize,
		group_rows: usize,
	},

	#[error("no variables to group by")]
	NoGroupingColumns,

	#[error("column `{name}` has {len} rows, but all columns must have the same length of {expected} rows")]
	ColumnLengthMismatch {
		name: String,
		len: usize,
		expected: usize,
	},

	#[error("column holds {values} values, but its validity mask covers {validity} rows")]
	ValidityLengthMismatch {
		values: usize,
		validity: usize,
	},
}

impl IntoDiagnostic for Error {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			Error::UnknownColumn {
				name,
			} => diagnostic::group::unknown_column(&name),
			Error::IneligibleType {
				name,
				ty,
			} => diagnostic::group::ineligible_type(&name, ty),
			Error::CorruptGroupingState {
				rows,
				group_rows,
			} => diagnostic::group::corrupt_grouping_state(rows, group_rows),
			Error::NoGroupingColumns => diagnostic::group::no_grouping_columns(),
			Error::ColumnLengthMismatch {
				name,
				len,
				expected,
			} => diagnostic::column::length_mismatch(&name, len, expected),
			Error::ValidityLengthMismatch {
				values,
				validity,
			} => diagnostic::column::validity_length_mismatch(values, validity),
		}
	}
}
