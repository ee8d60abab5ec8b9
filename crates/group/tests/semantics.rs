// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use slicer_column::{Column, Columns};
use slicer_group::{GroupedColumns, GroupingConfig, GroupingMetadata, build_index};
use slicer_testing::init_tracing;
use slicer_type::{Error, IntoDiagnostic, Type, Value};

fn group(columns: &Columns, keys: &[&str]) -> GroupingMetadata {
	init_tracing();
	build_index(columns, keys, &GroupingConfig::default()).unwrap()
}

fn keys_of(metadata: &GroupingMetadata) -> Vec<Vec<Value>> {
	(0..metadata.ngroups()).map(|i| metadata.group_key(i)).collect()
}

#[test]
fn test_two_columns_compose() {
	let columns = Columns::new(vec![Column::utf8("a", ["x", "x", "y"]), Column::int4("b", [1, 2, 1])]);
	let metadata = group(&columns, &["a", "b"]);

	assert_eq!(
		keys_of(&metadata),
		vec![
			vec![Value::utf8("x"), Value::int4(1)],
			vec![Value::utf8("x"), Value::int4(2)],
			vec![Value::utf8("y"), Value::int4(1)],
		]
	);
	assert_eq!(metadata.rows(), &[vec![0], vec![1], vec![2]]);
	assert_eq!(metadata.column_names(), vec!["a", "b", ".rows"]);
}

#[test]
fn test_unobserved_levels_are_kept_in_level_order() {
	let columns = Columns::new(vec![Column::categorical(
		"size",
		["small", "medium", "large"],
		[Some("large"), Some("small"), Some("large")],
	)]);
	let metadata = group(&columns, &["size"]);

	assert_eq!(
		keys_of(&metadata),
		vec![vec![Value::level("small")], vec![Value::level("medium")], vec![Value::level("large")]]
	);
	assert_eq!(metadata.group_sizes(), vec![1, 0, 2]);
	assert!(!metadata.has_implicit_missing("size"));
}

#[test]
fn test_general_values_distinct_and_sorted() {
	let columns = Columns::new(vec![Column::utf8_with_validity(
		"name",
		["pear", "apple", "", "pear", "Zebra"],
		[true, true, false, true, true],
	)]);
	let metadata = group(&columns, &["name"]);

	assert_eq!(
		keys_of(&metadata),
		vec![
			vec![Value::utf8("Zebra")],
			vec![Value::utf8("apple")],
			vec![Value::utf8("pear")],
			vec![Value::Undefined],
		]
	);
	assert_eq!(metadata.rows(), &[vec![4], vec![1], vec![0, 3], vec![2]]);
}

#[test]
fn test_missing_bucket_last_and_flagged() {
	let columns = Columns::new(vec![
		Column::categorical("c", ["a", "b"], [Some("b"), None, Some("a"), None]),
		Column::bool("flag", [true, false, true, true]),
	]);
	let metadata = group(&columns, &["c", "flag"]);

	assert_eq!(
		keys_of(&metadata),
		vec![
			vec![Value::level("a"), Value::Boolean(true)],
			vec![Value::level("b"), Value::Boolean(true)],
			vec![Value::Undefined, Value::Boolean(false)],
			vec![Value::Undefined, Value::Boolean(true)],
		]
	);
	assert_eq!(metadata.rows(), &[vec![2], vec![0], vec![1], vec![3]]);
	assert_eq!(metadata.implicit_missing(), &[true, false]);
	assert_eq!(metadata.implicit_missing_columns().collect::<Vec<_>>(), vec!["c"]);
}

#[test]
fn test_empty_level_propagates_single_placeholder() {
	let columns = Columns::new(vec![
		Column::categorical("c", ["used", "unused"], [Some("used"), Some("used"), Some("used")]),
		Column::int8("n", [3, 1, 3]),
	]);
	let metadata = group(&columns, &["c", "n"]);

	assert_eq!(
		keys_of(&metadata),
		vec![
			vec![Value::level("used"), Value::int8(1)],
			vec![Value::level("used"), Value::int8(3)],
			vec![Value::level("unused"), Value::Undefined],
		]
	);
	assert_eq!(metadata.rows(), &[vec![1], vec![0, 2], vec![]]);
}

#[test]
fn test_empty_level_propagates_through_nested_categorical() {
	let columns = Columns::new(vec![
		Column::categorical("outer", ["a", "b"], [Some("a")]),
		Column::categorical("inner", ["x", "y"], [Some("y")]),
	]);
	let metadata = group(&columns, &["outer", "inner"]);

	assert_eq!(metadata.ngroups(), 4);
	assert_eq!(metadata.rows(), &[vec![], vec![0], vec![], vec![]]);
}

#[test]
fn test_custom_rows_column() {
	let columns = Columns::new(vec![Column::int4("n", [1])]);
	let config = GroupingConfig::new().with_rows_column("__idx");
	let metadata = build_index(&columns, &["n"], &config).unwrap();

	assert_eq!(metadata.rows_column(), "__idx");
	assert_eq!(metadata.column_names(), vec!["n", "__idx"]);
}

#[test]
fn test_unknown_column_error() {
	let columns = Columns::new(vec![Column::int4("n", [1])]);
	let err = build_index(&columns, &["m"], &GroupingConfig::default()).unwrap_err();

	assert_eq!(
		err,
		Error::UnknownColumn {
			name: "m".to_string()
		}
	);
	assert_eq!(err.into_diagnostic().code, "GROUP_001");
}

#[test]
fn test_ineligible_type_error() {
	let columns = Columns::new(vec![Column::int4("n", [1]), Column::list("tags", [vec![Value::utf8("t")]])]);
	let err = build_index(&columns, &["n", "tags"], &GroupingConfig::default()).unwrap_err();

	assert_eq!(
		err,
		Error::IneligibleType {
			name: "tags".to_string(),
			ty: Type::List
		}
	);
	assert!(err.to_string().contains("tags"));
	assert!(err.to_string().contains("LIST"));
}

#[test]
fn test_corrupt_grouping_state_error() {
	let columns = Columns::new(vec![Column::int4("n", [1, 2, 2])]);
	let metadata = group(&columns, &["n"]);

	let longer = Columns::new(vec![Column::int4("n", [1, 2, 2, 2])]);
	let err = GroupedColumns::from_groups(longer, metadata).unwrap_err();

	assert_eq!(
		err,
		Error::CorruptGroupingState {
			rows: 4,
			group_rows: 3
		}
	);
	assert_eq!(err.to_string(), "corrupt grouping state, contains 4 rows, and 3 rows in groups");
}

#[test]
fn test_no_grouping_columns_error() {
	let columns = Columns::new(vec![Column::int4("n", [1])]);
	let err = GroupedColumns::lazy(columns, &[]).unwrap_err();

	assert_eq!(err, Error::NoGroupingColumns);
	assert_eq!(err.to_string(), "no variables to group by");
}

#[test]
fn test_grouped_columns_lazy_force() {
	let columns = Columns::new(vec![Column::int4("n", [2, 1, 2])]);
	let mut grouped = GroupedColumns::lazy(columns, &["n"]).unwrap();
	assert!(grouped.groups().is_none());

	let metadata = grouped.force(&GroupingConfig::default()).unwrap();
	assert_eq!(metadata.rows(), &[vec![1], vec![0, 2]]);
	assert_eq!(metadata.group_indices(3), vec![Some(1), Some(0), Some(1)]);
	assert!(grouped.is_built());
}

#[test]
fn test_deserialized_out_of_range_code_groups_as_missing() {
	let json = r#"{"columns":[{"name":"c","data":{"Categorical":{"codes":[1,5],"levels":["a","b"]}}}]}"#;
	let columns: Columns = serde_json::from_str(json).unwrap();
	let metadata = group(&columns, &["c"]);

	assert_eq!(keys_of(&metadata), vec![vec![Value::level("a")], vec![Value::level("b")], vec![Value::Undefined]]);
	assert_eq!(metadata.rows(), &[vec![0], vec![], vec![1]]);
	assert!(metadata.has_implicit_missing("c"));
}

#[test]
fn test_deserialized_row_count_follows_columns() {
	let json = r#"{"columns":[{"name":"n","data":{"Int4":{"data":[2,1],"bitvec":[true,true]}}}],"row_count":4}"#;
	let columns: Columns = serde_json::from_str(json).unwrap();
	assert_eq!(columns.row_count(), 2);

	let metadata = group(&columns, &["n"]);
	assert_eq!(metadata.rows(), &[vec![1], vec![0]]);
	assert_eq!(metadata.total_rows(), 2);
}
