// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::Serialize;

use crate::column::DataType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ColumnDefault {
	/// Literal value, quoted by the query compiler.
	Value(String),
	/// Raw SQL expression, emitted verbatim.
	Sql(String),
}

/// Settings shared by every column family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnConfig {
	pub name: String,
	pub not_null: bool,
	pub default: Option<ColumnDefault>,
	pub has_default: bool,
	pub primary_key: bool,
	pub is_unique: bool,
	pub unique_name: Option<String>,
	pub data_type: DataType,
	pub column_type: &'static str,
}

impl ColumnConfig {
	pub fn new(name: impl Into<String>, data_type: DataType, column_type: &'static str) -> Self {
		Self {
			name: name.into(),
			not_null: false,
			default: None,
			has_default: false,
			primary_key: false,
			is_unique: false,
			unique_name: None,
			data_type,
			column_type,
		}
	}
}
