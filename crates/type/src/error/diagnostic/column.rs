// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub fn length_mismatch(name: &str, len: usize, expected: usize) -> Diagnostic {
	Diagnostic {
		code: "COLUMN_001".to_string(),
		message: format!(
			"column `{}` has {} rows, but all columns must have the same length of {} rows",
			name, len, expected
		),
		column: Some(name.to_string()),
		label: Some(format!("expected {} rows", expected)),
		help: Some("every column of a table must hold one value per row".to_string()),
		notes: vec![],
	}
}

pub fn validity_length_mismatch(values: usize, validity: usize) -> Diagnostic {
	Diagnostic {
		code: "COLUMN_002".to_string(),
		message: format!("column holds {} values, but its validity mask covers {} rows", values, validity),
		column: None,
		label: Some("values and validity mask disagree".to_string()),
		help: Some("the validity mask needs exactly one bit per value".to_string()),
		notes: vec![],
	}
}
