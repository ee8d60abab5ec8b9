// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod error;
pub mod value;

pub use error::{Diagnostic, Error, IntoDiagnostic};
pub use value::{GetType, OrderedF64, Type, Value};

pub type Result<T> = std::result::Result<T, Error>;
