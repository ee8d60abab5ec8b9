// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use slicer_type::Value;

use crate::ColumnData;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub data: ColumnData,
}

impl Deref for Column {
	type Target = ColumnData;

	fn deref(&self) -> &Self::Target {
		&self.data
	}
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
		Self {
			name: name.into(),
			data,
		}
	}

	pub fn bool(name: &str, values: impl IntoIterator<Item = bool>) -> Self {
		Self::new(name, ColumnData::bool(values))
	}

	pub fn bool_with_validity(
		name: &str,
		values: impl IntoIterator<Item = bool>,
		validity: impl IntoIterator<Item = bool>,
	) -> Self {
		Self::new(name, ColumnData::bool_with_validity(values, validity))
	}

	pub fn int4(name: &str, values: impl IntoIterator<Item = i32>) -> Self {
		Self::new(name, ColumnData::int4(values))
	}

	pub fn int4_with_validity(
		name: &str,
		values: impl IntoIterator<Item = i32>,
		validity: impl IntoIterator<Item = bool>,
	) -> Self {
		Self::new(name, ColumnData::int4_with_validity(values, validity))
	}

	pub fn int8(name: &str, values: impl IntoIterator<Item = i64>) -> Self {
		Self::new(name, ColumnData::int8(values))
	}

	pub fn int8_with_validity(
		name: &str,
		values: impl IntoIterator<Item = i64>,
		validity: impl IntoIterator<Item = bool>,
	) -> Self {
		Self::new(name, ColumnData::int8_with_validity(values, validity))
	}

	pub fn float8(name: &str, values: impl IntoIterator<Item = f64>) -> Self {
		Self::new(name, ColumnData::float8(values))
	}

	pub fn float8_with_validity(
		name: &str,
		values: impl IntoIterator<Item = f64>,
		validity: impl IntoIterator<Item = bool>,
	) -> Self {
		Self::new(name, ColumnData::float8_with_validity(values, validity))
	}

	pub fn utf8<'a>(name: &str, values: impl IntoIterator<Item = &'a str>) -> Self {
		Self::new(name, ColumnData::utf8(values.into_iter().map(|s| s.to_string())))
	}

	pub fn utf8_with_validity<'a>(
		name: &str,
		values: impl IntoIterator<Item = &'a str>,
		validity: impl IntoIterator<Item = bool>,
	) -> Self {
		Self::new(name, ColumnData::utf8_with_validity(values.into_iter().map(|s| s.to_string()), validity))
	}

	pub fn categorical<'a>(
		name: &str,
		levels: impl IntoIterator<Item = &'a str>,
		values: impl IntoIterator<Item = Option<&'a str>>,
	) -> Self {
		Self::new(name, ColumnData::categorical(levels, values))
	}

	pub fn categorical_codes<'a>(
		name: &str,
		levels: impl IntoIterator<Item = &'a str>,
		codes: impl IntoIterator<Item = u32>,
	) -> Self {
		Self::new(name, ColumnData::categorical_codes(levels, codes))
	}

	pub fn list(name: &str, values: impl IntoIterator<Item = Vec<Value>>) -> Self {
		Self::new(name, ColumnData::list(values))
	}
}
