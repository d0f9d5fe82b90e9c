// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Debug, Display, Formatter},
	sync::Arc,
};

use serde::Serialize;

use crate::{
	column::{
		config::{ColumnConfig, ColumnDefault},
		enum_values::EnumValues,
	},
	error::SchemaError,
	table::TableRef,
};

pub mod args;
pub mod casing;
pub mod config;
pub mod enum_values;

/// Logical kind of the values a column holds, independent of dialect.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
	String,
}

impl Display for DataType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			DataType::String => f.write_str("string"),
		}
	}
}

/// The value shape consumers should expect from a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueKind {
	/// Any value of the logical data type.
	Scalar(DataType),
	/// Exactly one of the listed strings.
	Enum(EnumValues),
}

/// Pre-bind configuration of a single column.
///
/// Modifiers consume the builder and hand it back, so definitions chain:
/// `text("bio").not_null().default_value("")`.
pub trait ColumnBuilder: Sized {
	type Column: Column;

	fn config(&self) -> &ColumnConfig;

	fn config_mut(&mut self) -> &mut ColumnConfig;

	/// Binds the configuration to `table`. Can be called repeatedly; each
	/// call yields an independent descriptor over the same configuration.
	fn build(&self, table: &TableRef) -> Self::Column;

	fn name(&self) -> &str {
		&self.config().name
	}

	fn named(mut self, name: impl Into<String>) -> Self {
		self.config_mut().name = name.into();
		self
	}

	fn not_null(mut self) -> Self {
		self.config_mut().not_null = true;
		self
	}

	fn default_value(mut self, value: impl Into<String>) -> Self {
		let config = self.config_mut();
		config.default = Some(ColumnDefault::Value(value.into()));
		config.has_default = true;
		self
	}

	fn default_sql(mut self, expression: impl Into<String>) -> Self {
		let config = self.config_mut();
		config.default = Some(ColumnDefault::Sql(expression.into()));
		config.has_default = true;
		self
	}

	/// Marks the column as primary key, which implies NOT NULL.
	fn primary_key(mut self) -> Self {
		let config = self.config_mut();
		config.primary_key = true;
		config.not_null = true;
		self
	}

	fn unique(mut self) -> Self {
		let config = self.config_mut();
		config.is_unique = true;
		config.unique_name = None;
		self
	}

	fn unique_named(mut self, name: impl Into<String>) -> Self {
		let config = self.config_mut();
		config.is_unique = true;
		config.unique_name = Some(name.into());
		self
	}
}

/// Finalized column bound to its table.
pub trait Column: Debug + Send + Sync {
	fn table(&self) -> &TableRef;

	fn config(&self) -> &ColumnConfig;

	/// Type keyword emitted into DDL.
	fn sql_type(&self) -> String;

	fn enum_values(&self) -> Option<&EnumValues> {
		None
	}

	fn name(&self) -> &str {
		&self.config().name
	}

	fn data_type(&self) -> DataType {
		self.config().data_type
	}

	fn column_type(&self) -> &'static str {
		self.config().column_type
	}

	fn not_null(&self) -> bool {
		self.config().not_null
	}

	fn has_default(&self) -> bool {
		self.config().has_default
	}

	fn default(&self) -> Option<&ColumnDefault> {
		self.config().default.as_ref()
	}

	fn primary_key(&self) -> bool {
		self.config().primary_key
	}

	fn is_unique(&self) -> bool {
		self.config().is_unique
	}

	fn unique_name(&self) -> Option<&str> {
		self.config().unique_name.as_deref()
	}

	fn value_kind(&self) -> ValueKind {
		match self.enum_values() {
			Some(values) => ValueKind::Enum(values.clone()),
			None => ValueKind::Scalar(self.data_type()),
		}
	}

	/// Checks a value about to be written; `None` stands for SQL NULL.
	fn validate(&self, value: Option<&str>) -> crate::Result<()> {
		if value.is_none() && self.not_null() {
			return Err(SchemaError::NullNotAllowed {
				column: self.name().to_string(),
				sql_type: self.sql_type(),
			}
			.into());
		}
		Ok(())
	}
}

/// Object-safe view of a [`ColumnBuilder`], used where builders of
/// different families are collected together.
pub trait BuildColumn: Send + Sync {
	fn column_config(&self) -> &ColumnConfig;

	fn column_config_mut(&mut self) -> &mut ColumnConfig;

	fn build_column(&self, table: &TableRef) -> Arc<dyn Column>;
}

impl<B> BuildColumn for B
where
	B: ColumnBuilder + Send + Sync,
	B::Column: 'static,
{
	fn column_config(&self) -> &ColumnConfig {
		ColumnBuilder::config(self)
	}

	fn column_config_mut(&mut self) -> &mut ColumnConfig {
		ColumnBuilder::config_mut(self)
	}

	fn build_column(&self, table: &TableRef) -> Arc<dyn Column> {
		Arc::new(self.build(table))
	}
}
