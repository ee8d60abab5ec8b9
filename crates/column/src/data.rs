// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use slicer_type::{Type, Value};

use crate::{BitVec, CategoricalContainer, Container, RowKey};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Bool(Container<bool>),
	Int4(Container<i32>),
	Int8(Container<i64>),
	Float8(Container<f64>),
	Utf8(Container<String>),
	Categorical(CategoricalContainer),
	List(Container<Vec<Value>>),
}

impl ColumnData {
	pub fn bool(values: impl IntoIterator<Item = bool>) -> Self {
		ColumnData::Bool(Container::from_vec(values.into_iter().collect()))
	}

	pub fn bool_with_validity(values: impl IntoIterator<Item = bool>, validity: impl IntoIterator<Item = bool>) -> Self {
		ColumnData::Bool(with_validity(values, validity))
	}

	pub fn int4(values: impl IntoIterator<Item = i32>) -> Self {
		ColumnData::Int4(Container::from_vec(values.into_iter().collect()))
	}

	pub fn int4_with_validity(values: impl IntoIterator<Item = i32>, validity: impl IntoIterator<Item = bool>) -> Self {
		ColumnData::Int4(with_validity(values, validity))
	}

	pub fn int8(values: impl IntoIterator<Item = i64>) -> Self {
		ColumnData::Int8(Container::from_vec(values.into_iter().collect()))
	}

	pub fn int8_with_validity(values: impl IntoIterator<Item = i64>, validity: impl IntoIterator<Item = bool>) -> Self {
		ColumnData::Int8(with_validity(values, validity))
	}

	pub fn float8(values: impl IntoIterator<Item = f64>) -> Self {
		ColumnData::Float8(Container::from_vec(values.into_iter().collect()))
	}

	pub fn float8_with_validity(
		values: impl IntoIterator<Item = f64>,
		validity: impl IntoIterator<Item = bool>,
	) -> Self {
		ColumnData::Float8(with_validity(values, validity))
	}

	pub fn utf8(values: impl IntoIterator<Item = String>) -> Self {
		ColumnData::Utf8(Container::from_vec(values.into_iter().collect()))
	}

	pub fn utf8_with_validity(
		values: impl IntoIterator<Item = String>,
		validity: impl IntoIterator<Item = bool>,
	) -> Self {
		ColumnData::Utf8(with_validity(values, validity))
	}

	pub fn categorical<'a>(
		levels: impl IntoIterator<Item = &'a str>,
		values: impl IntoIterator<Item = Option<&'a str>>,
	) -> Self {
		let levels: Vec<String> = levels.into_iter().map(str::to_string).collect();
		ColumnData::Categorical(CategoricalContainer::from_values(levels, values))
	}

	pub fn categorical_codes<'a>(levels: impl IntoIterator<Item = &'a str>, codes: impl IntoIterator<Item = u32>) -> Self {
		let levels: Vec<String> = levels.into_iter().map(str::to_string).collect();
		ColumnData::Categorical(CategoricalContainer::new(levels, codes))
	}

	pub fn list(values: impl IntoIterator<Item = Vec<Value>>) -> Self {
		ColumnData::List(Container::from_vec(values.into_iter().collect()))
	}
}

fn with_validity<T>(values: impl IntoIterator<Item = T>, validity: impl IntoIterator<Item = bool>) -> Container<T> {
	let data: Vec<T> = values.into_iter().collect();
	let validity: Vec<bool> = validity.into_iter().collect();
	assert_eq!(data.len(), validity.len(), "values and validity must have the same length");
	Container::new(data, BitVec::from_slice(&validity))
}

impl ColumnData {
	pub fn len(&self) -> usize {
		match self {
			ColumnData::Bool(container) => container.len(),
			ColumnData::Int4(container) => container.len(),
			ColumnData::Int8(container) => container.len(),
			ColumnData::Float8(container) => container.len(),
			ColumnData::Utf8(container) => container.len(),
			ColumnData::Categorical(container) => container.len(),
			ColumnData::List(container) => container.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Bool(container) => container.get_type(),
			ColumnData::Int4(container) => container.get_type(),
			ColumnData::Int8(container) => container.get_type(),
			ColumnData::Float8(container) => container.get_type(),
			ColumnData::Utf8(container) => container.get_type(),
			ColumnData::Categorical(_) => Type::Categorical,
			ColumnData::List(_) => Type::List,
		}
	}

	pub fn get_value(&self, row: usize) -> Value {
		match self {
			ColumnData::Bool(container) => container.get(row).map_or(Value::Undefined, |v| Value::Boolean(*v)),
			ColumnData::Int4(container) => container.get(row).map_or(Value::Undefined, |v| Value::Int4(*v)),
			ColumnData::Int8(container) => container.get(row).map_or(Value::Undefined, |v| Value::Int8(*v)),
			ColumnData::Float8(container) => container.get(row).map_or(Value::Undefined, |v| Value::float8(*v)),
			ColumnData::Utf8(container) => {
				container.get(row).map_or(Value::Undefined, |v| Value::Utf8(v.clone()))
			}
			ColumnData::Categorical(container) => container
				.codes()
				.get(row)
				.and_then(|&code| container.level(code))
				.map_or(Value::Undefined, Value::level),
			ColumnData::List(container) => container.get(row).map_or(Value::Undefined, |v| Value::List(v.clone())),
		}
	}

	/// The equality/ordering contract for this column, if it has one.
	///
	/// Categorical columns are partitioned by their codes instead, and list
	/// columns have no contract at all.
	pub fn row_key(&self) -> Option<&dyn RowKey> {
		match self {
			ColumnData::Bool(container) => Some(container),
			ColumnData::Int4(container) => Some(container),
			ColumnData::Int8(container) => Some(container),
			ColumnData::Float8(container) => Some(container),
			ColumnData::Utf8(container) => Some(container),
			ColumnData::Categorical(_) | ColumnData::List(_) => None,
		}
	}

	pub fn as_categorical(&self) -> Option<&CategoricalContainer> {
		match self {
			ColumnData::Categorical(container) => Some(container),
			_ => None,
		}
	}

	/// A column of the same type and attributes with `len` undefined slots.
	pub fn empty_like(&self, len: usize) -> ColumnData {
		match self {
			ColumnData::Bool(_) => ColumnData::Bool(Container::undefined(len)),
			ColumnData::Int4(_) => ColumnData::Int4(Container::undefined(len)),
			ColumnData::Int8(_) => ColumnData::Int8(Container::undefined(len)),
			ColumnData::Float8(_) => ColumnData::Float8(Container::undefined(len)),
			ColumnData::Utf8(_) => ColumnData::Utf8(Container::undefined(len)),
			ColumnData::Categorical(container) => {
				ColumnData::Categorical(CategoricalContainer::missing(Arc::clone(container.levels()), len))
			}
			ColumnData::List(_) => ColumnData::List(Container::undefined(len)),
		}
	}

	/// Write the value of `source` at `row` into `len` slots starting at
	/// `start`; `None` writes undefined slots.
	pub fn fill_from(&mut self, start: usize, len: usize, source: &ColumnData, row: Option<usize>) {
		match (self, source) {
			(ColumnData::Bool(target), ColumnData::Bool(source)) => {
				target.fill(start, len, row.and_then(|row| source.get(row)))
			}
			(ColumnData::Int4(target), ColumnData::Int4(source)) => {
				target.fill(start, len, row.and_then(|row| source.get(row)))
			}
			(ColumnData::Int8(target), ColumnData::Int8(source)) => {
				target.fill(start, len, row.and_then(|row| source.get(row)))
			}
			(ColumnData::Float8(target), ColumnData::Float8(source)) => {
				target.fill(start, len, row.and_then(|row| source.get(row)))
			}
			(ColumnData::Utf8(target), ColumnData::Utf8(source)) => {
				target.fill(start, len, row.and_then(|row| source.get(row)))
			}
			(ColumnData::Categorical(target), ColumnData::Categorical(source)) => target.fill(
				start,
				len,
				row.map_or(CategoricalContainer::MISSING, |row| source.code(row)),
			),
			(ColumnData::List(target), ColumnData::List(source)) => {
				target.fill(start, len, row.and_then(|row| source.get(row)))
			}
			(target, source) => unreachable!(
				"label column of type {} filled from column of type {}",
				target.get_type(),
				source.get_type()
			),
		}
	}

	/// Write a categorical code into `len` slots starting at `start`.
	pub fn fill_code(&mut self, start: usize, len: usize, code: u32) {
		match self {
			ColumnData::Categorical(target) => target.fill(start, len, code),
			target => unreachable!("categorical code written into a {} column", target.get_type()),
		}
	}
}
