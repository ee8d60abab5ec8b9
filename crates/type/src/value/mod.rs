// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

mod ordered_f64;
mod r#type;

pub use ordered_f64::OrderedF64;
pub use r#type::{GetType, Type};

/// A single cell, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// A UTF-8 encoded text
	Utf8(String),
	/// A declared level of a categorical column, by name
	Level(String),
	/// A nested list of values
	List(Vec<Value>),
}

impl Value {
	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Int4(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		Value::Float8(OrderedF64::new(v.into()))
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn level(v: impl Into<String>) -> Self {
		Value::Level(v.into())
	}
}

impl PartialOrd for Value {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match (self, other) {
			(Value::Boolean(l), Value::Boolean(r)) => l.partial_cmp(r),
			(Value::Int4(l), Value::Int4(r)) => l.partial_cmp(r),
			(Value::Int8(l), Value::Int8(r)) => l.partial_cmp(r),
			(Value::Float8(l), Value::Float8(r)) => l.partial_cmp(r),
			(Value::Utf8(l), Value::Utf8(r)) => l.partial_cmp(r),
			(Value::Level(l), Value::Level(r)) => l.partial_cmp(r),
			(Value::List(l), Value::List(r)) => l.partial_cmp(r),
			(Value::Undefined, Value::Undefined) => Some(Ordering::Equal),
			(Value::Undefined, _) => Some(Ordering::Greater),
			(_, Value::Undefined) => Some(Ordering::Less),
			_ => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("Undefined"),
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Utf8(value) => Display::fmt(value, f),
			Value::Level(value) => Display::fmt(value, f),
			Value::List(values) => {
				f.write_str("[")?;
				for (idx, value) in values.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(value, f)?;
				}
				f.write_str("]")
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cmp::Ordering;

	use super::Value;

	#[test]
	fn test_undefined_sorts_after_defined() {
		assert_eq!(Value::Undefined.partial_cmp(&Value::int4(1)), Some(Ordering::Greater));
		assert_eq!(Value::utf8("a").partial_cmp(&Value::Undefined), Some(Ordering::Less));
	}

	#[test]
	fn test_mismatched_types_are_unordered() {
		assert_eq!(Value::int4(1).partial_cmp(&Value::int8(1)), None);
	}

	#[test]
	fn test_display_list() {
		let value = Value::List(vec![Value::int4(1), Value::Undefined, Value::utf8("x")]);
		assert_eq!(value.to_string(), "[1, Undefined, x]");
	}
}
