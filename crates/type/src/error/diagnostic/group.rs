// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{Type, error::diagnostic::Diagnostic};

pub fn unknown_column(name: &str) -> Diagnostic {
	Diagnostic {
		code: "GROUP_001".to_string(),
		message: format!("column `{}` is unknown", name),
		column: Some(name.to_string()),
		label: Some("this column does not exist in the grouped table".to_string()),
		help: Some("check for typos or ensure the column is defined in the input".to_string()),
		notes: vec![],
	}
}

pub fn ineligible_type(name: &str, ty: Type) -> Diagnostic {
	Diagnostic {
		code: "GROUP_002".to_string(),
		message: format!("column `{}` can't be used as a grouping variable because it's a {}", name, ty),
		column: Some(name.to_string()),
		label: Some(format!("{} values have no equality or ordering", ty)),
		help: Some("group by a scalar or categorical column instead".to_string()),
		notes: vec!["nested list columns can never serve as grouping keys".to_string()],
	}
}

pub fn corrupt_grouping_state(rows: usize, group_rows: usize) -> Diagnostic {
	Diagnostic {
		code: "GROUP_003".to_string(),
		message: format!("corrupt grouping state, contains {} rows, and {} rows in groups", rows, group_rows),
		column: None,
		label: Some("row-index lists do not partition the table".to_string()),
		help: Some("rebuild the grouping from the table instead of reusing it".to_string()),
		notes: vec!["every row must belong to exactly one group".to_string()],
	}
}

pub fn no_grouping_columns() -> Diagnostic {
	Diagnostic {
		code: "GROUP_004".to_string(),
		message: "no variables to group by".to_string(),
		column: None,
		label: None,
		help: Some("supply at least one grouping column".to_string()),
		notes: vec![],
	}
}
