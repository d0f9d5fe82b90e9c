// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use reifydb_schema::{
	Column, ColumnArgs, ColumnBuilder, ColumnConfig, DataType, EnumValues, Error, SchemaError, TableRef,
};
use serde::Serialize;
use tracing::instrument;

use crate::column::unique_key_name;

const COLUMN_TYPE: &str = "MySqlText";

/// The four MySQL text types, smallest to largest.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextType {
	/// Up to 255 bytes
	TinyText,
	/// Up to 64 KiB
	Text,
	/// Up to 16 MiB
	MediumText,
	/// Up to 4 GiB
	LongText,
}

impl TextType {
	pub fn as_sql(&self) -> &'static str {
		match self {
			TextType::TinyText => "tinytext",
			TextType::Text => "text",
			TextType::MediumText => "mediumtext",
			TextType::LongText => "longtext",
		}
	}

	/// Largest value, in bytes, the type can store.
	pub fn max_bytes(&self) -> u64 {
		match self {
			TextType::TinyText => (1 << 8) - 1,
			TextType::Text => (1 << 16) - 1,
			TextType::MediumText => (1 << 24) - 1,
			TextType::LongText => (1 << 32) - 1,
		}
	}

	pub fn to_u8(&self) -> u8 {
		match self {
			TextType::TinyText => 0x01,
			TextType::Text => 0x02,
			TextType::MediumText => 0x03,
			TextType::LongText => 0x04,
		}
	}

	pub fn from_u8(value: u8) -> reifydb_schema::Result<Self> {
		match value {
			0x01 => Ok(TextType::TinyText),
			0x02 => Ok(TextType::Text),
			0x03 => Ok(TextType::MediumText),
			0x04 => Ok(TextType::LongText),
			_ => Err(SchemaError::UnknownSqlType {
				sql_type: format!("0x{:02X}", value),
			}
			.into()),
		}
	}
}

impl Display for TextType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_sql())
	}
}

impl FromStr for TextType {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"tinytext" => Ok(TextType::TinyText),
			"text" => Ok(TextType::Text),
			"mediumtext" => Ok(TextType::MediumText),
			"longtext" => Ok(TextType::LongText),
			_ => Err(SchemaError::UnknownSqlType {
				sql_type: s.to_string(),
			}
			.into()),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextConfig {
	pub enum_values: Option<EnumValues>,
}

impl TextConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_enum(mut self, values: EnumValues) -> Self {
		self.enum_values = Some(values);
		self
	}

	/// Config restricted to `values`; fails when the list is empty.
	pub fn enumerated<I, S>(values: I) -> reifydb_schema::Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Ok(Self::new().with_enum(EnumValues::new(values)?))
	}
}

impl From<TextConfig> for ColumnArgs<TextConfig> {
	fn from(config: TextConfig) -> Self {
		ColumnArgs::resolve(Some(reifydb_schema::NameOrConfig::Config(config)), None)
	}
}

#[derive(Debug, Clone)]
pub struct MySqlTextBuilder {
	config: ColumnConfig,
	text_type: TextType,
	enum_values: Option<EnumValues>,
}

impl MySqlTextBuilder {
	pub fn new(name: impl Into<String>, text_type: TextType, config: TextConfig) -> Self {
		Self {
			config: ColumnConfig::new(name, DataType::String, COLUMN_TYPE),
			text_type,
			enum_values: config.enum_values,
		}
	}

	pub fn text_type(&self) -> TextType {
		self.text_type
	}

	pub fn enum_values(&self) -> Option<&EnumValues> {
		self.enum_values.as_ref()
	}
}

impl ColumnBuilder for MySqlTextBuilder {
	type Column = MySqlText;

	fn config(&self) -> &ColumnConfig {
		&self.config
	}

	fn config_mut(&mut self) -> &mut ColumnConfig {
		&mut self.config
	}

	#[instrument(
		name = "schema::mysql::text::build",
		level = "trace",
		skip_all,
		fields(table = %table.name(), column = %self.config.name, text_type = %self.text_type)
	)]
	fn build(&self, table: &TableRef) -> MySqlText {
		MySqlText::new(table.clone(), self.config.clone(), self.text_type, self.enum_values.clone())
	}
}

/// A text column bound to its table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MySqlText {
	table: TableRef,
	#[serde(flatten)]
	config: ColumnConfig,
	text_type: TextType,
	enum_values: Option<EnumValues>,
}

impl MySqlText {
	fn new(table: TableRef, mut config: ColumnConfig, text_type: TextType, enum_values: Option<EnumValues>) -> Self {
		if config.is_unique && config.unique_name.is_none() {
			config.unique_name = Some(unique_key_name(table.name(), &[config.name.as_str()]));
		}

		Self {
			table,
			config,
			text_type,
			enum_values,
		}
	}

	pub fn text_type(&self) -> TextType {
		self.text_type
	}
}

impl Column for MySqlText {
	fn table(&self) -> &TableRef {
		&self.table
	}

	fn config(&self) -> &ColumnConfig {
		&self.config
	}

	fn sql_type(&self) -> String {
		self.text_type.as_sql().to_string()
	}

	fn enum_values(&self) -> Option<&EnumValues> {
		self.enum_values.as_ref()
	}

	/// Checks a value about to be written to this column.
	///
	/// `None` stands for SQL NULL. Capacity is checked in UTF-8 bytes.
	fn validate(&self, value: Option<&str>) -> reifydb_schema::Result<()> {
		let Some(value) = value else {
			if self.config.not_null {
				return Err(SchemaError::NullNotAllowed {
					column: self.config.name.clone(),
					sql_type: self.sql_type(),
				}
				.into());
			}
			return Ok(());
		};

		if let Some(values) = &self.enum_values {
			if !values.contains(value) {
				return Err(SchemaError::EnumValueNotAllowed {
					column: self.config.name.clone(),
					sql_type: self.sql_type(),
					value: value.to_string(),
					allowed: values.to_vec(),
				}
				.into());
			}
		}

		let actual = value.len();
		let max = self.text_type.max_bytes();
		if actual as u64 > max {
			return Err(SchemaError::ValueExceedsCapacity {
				column: self.config.name.clone(),
				sql_type: self.sql_type(),
				actual,
				max,
			}
			.into());
		}

		Ok(())
	}
}

pub fn tinytext(args: impl Into<ColumnArgs<TextConfig>>) -> MySqlTextBuilder {
	text_builder(TextType::TinyText, args.into())
}

pub fn text(args: impl Into<ColumnArgs<TextConfig>>) -> MySqlTextBuilder {
	text_builder(TextType::Text, args.into())
}

pub fn mediumtext(args: impl Into<ColumnArgs<TextConfig>>) -> MySqlTextBuilder {
	text_builder(TextType::MediumText, args.into())
}

pub fn longtext(args: impl Into<ColumnArgs<TextConfig>>) -> MySqlTextBuilder {
	text_builder(TextType::LongText, args.into())
}

fn text_builder(text_type: TextType, args: ColumnArgs<TextConfig>) -> MySqlTextBuilder {
	MySqlTextBuilder::new(args.name, text_type, args.config)
}
