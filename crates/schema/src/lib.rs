// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Dialect-independent building blocks for declaring table columns.
//!
//! A column starts life as a builder produced by a dialect factory function.
//! The builder carries configuration only and knows nothing about tables.
//! Calling [`ColumnBuilder::build`] binds that configuration to a
//! [`TableRef`] and yields an immutable descriptor implementing [`Column`].

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod column;
pub mod error;
pub mod table;

pub use column::{
	BuildColumn, Column, ColumnBuilder, DataType, ValueKind,
	args::{ColumnArgs, NameOrConfig},
	casing::Casing,
	config::{ColumnConfig, ColumnDefault},
	enum_values::EnumValues,
};
pub use error::{Diagnostic, DiagnosticColumn, Error, IntoDiagnostic, SchemaError};
pub use table::{TableId, TableRef};

pub type Result<T> = std::result::Result<T, Error>;
