// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{collections::HashSet, sync::Arc};

use indexmap::IndexMap;
use reifydb_schema::{BuildColumn, Casing, Column, ColumnBuilder, SchemaError, TableRef};
use tracing::{debug, instrument};

/// Collects column builders under schema keys before binding them to a
/// table.
pub struct MySqlTableBuilder {
	name: String,
	casing: Casing,
	columns: Vec<(String, Box<dyn BuildColumn>)>,
}

impl MySqlTableBuilder {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			casing: Casing::default(),
			columns: Vec::new(),
		}
	}

	/// Casing applied to keys of columns registered without a name.
	pub fn casing(mut self, casing: Casing) -> Self {
		self.casing = casing;
		self
	}

	pub fn column<B>(mut self, key: impl Into<String>, builder: B) -> Self
	where
		B: ColumnBuilder + Send + Sync + 'static,
		B::Column: 'static,
	{
		self.columns.push((key.into(), Box::new(builder)));
		self
	}

	#[instrument(name = "schema::mysql::table::build", level = "trace", skip_all, fields(table = %self.name))]
	pub fn build(self) -> reifydb_schema::Result<MySqlTable> {
		if self.name.is_empty() {
			return Err(SchemaError::EmptyTableName.into());
		}

		let table = TableRef::new(self.name.as_str());
		let mut columns: IndexMap<String, Arc<dyn Column>> = IndexMap::with_capacity(self.columns.len());
		let mut names = HashSet::with_capacity(self.columns.len());

		for (key, mut builder) in self.columns {
			if key.is_empty() {
				return Err(SchemaError::EmptyColumnKey {
					table: self.name,
				}
				.into());
			}

			if columns.contains_key(&key) {
				return Err(SchemaError::DuplicateColumn {
					table: self.name,
					column: key,
				}
				.into());
			}

			if builder.column_config().name.is_empty() {
				let name = self.casing.apply(&key);
				debug!(key = %key, name = %name, "column name inferred from key");
				builder.column_config_mut().name = name;
			}

			let name = builder.column_config().name.clone();
			if !names.insert(name.clone()) {
				return Err(SchemaError::DuplicateColumn {
					table: self.name,
					column: name,
				}
				.into());
			}

			columns.insert(key, builder.build_column(&table));
		}

		debug!(table = %table, columns = columns.len(), "table defined");

		Ok(MySqlTable {
			table,
			columns,
		})
	}
}

/// A table definition owning its bound column descriptors.
#[derive(Debug)]
pub struct MySqlTable {
	table: TableRef,
	columns: IndexMap<String, Arc<dyn Column>>,
}

impl MySqlTable {
	pub fn builder(name: impl Into<String>) -> MySqlTableBuilder {
		MySqlTableBuilder::new(name)
	}

	pub fn table_ref(&self) -> &TableRef {
		&self.table
	}

	pub fn name(&self) -> &str {
		self.table.name()
	}

	/// Column registered under `key`.
	pub fn column(&self, key: &str) -> Option<&Arc<dyn Column>> {
		self.columns.get(key)
	}

	/// Column whose SQL name is `name`.
	pub fn column_by_name(&self, name: &str) -> Option<&Arc<dyn Column>> {
		self.columns.values().find(|c| c.name() == name)
	}

	/// Columns in registration order, with their keys.
	pub fn columns(&self) -> impl Iterator<Item = (&str, &Arc<dyn Column>)> {
		self.columns.iter().map(|(key, column)| (key.as_str(), column))
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{TextConfig, longtext, text, tinytext};

	#[test]
	fn test_empty_name_is_taken_from_key() {
		let table = MySqlTable::builder("users").column("bio", text(())).build().unwrap();
		let bio = table.column("bio").unwrap();
		assert_eq!(bio.name(), "bio");
		assert_eq!(bio.table(), table.table_ref());
	}

	#[test]
	fn test_explicit_name_wins_over_key() {
		let table = MySqlTable::builder("users").column("bio", text("biography")).build().unwrap();
		assert_eq!(table.column("bio").unwrap().name(), "biography");
		assert!(table.column_by_name("biography").is_some());
		assert!(table.column_by_name("bio").is_none());
	}

	#[test]
	fn test_casing_applies_to_inferred_names_only() {
		let table = MySqlTable::builder("users")
			.casing(Casing::SnakeCase)
			.column("displayName", tinytext(()))
			.column("aboutMe", longtext("aboutMe"))
			.build()
			.unwrap();

		assert_eq!(table.column("displayName").unwrap().name(), "display_name");
		assert_eq!(table.column("aboutMe").unwrap().name(), "aboutMe");
	}

	#[test]
	fn test_columns_keep_registration_order() {
		let table = MySqlTable::builder("posts")
			.column("title", tinytext(()))
			.column("body", longtext(()))
			.column("summary", text(()))
			.build()
			.unwrap();

		let keys: Vec<&str> = table.columns().map(|(key, _)| key).collect();
		assert_eq!(keys, ["title", "body", "summary"]);
		assert_eq!(table.len(), 3);
		assert!(!table.is_empty());
	}

	#[test]
	fn test_empty_table_name() {
		let err = MySqlTable::builder("").build().unwrap_err();
		assert_eq!(err.code(), "SCHEMA_006");
	}

	#[test]
	fn test_empty_key() {
		let err = MySqlTable::builder("users").column("", text("bio")).build().unwrap_err();
		assert_eq!(err.code(), "SCHEMA_007");
	}

	#[test]
	fn test_duplicate_key() {
		let err = MySqlTable::builder("users").column("bio", text(())).column("bio", text(())).build().unwrap_err();
		assert_eq!(err.code(), "SCHEMA_008");
	}

	#[test]
	fn test_duplicate_resolved_name() {
		let err = MySqlTable::builder("users")
			.column("bio", text(()))
			.column("about", text("bio"))
			.build()
			.unwrap_err();
		assert_eq!(err.code(), "SCHEMA_008");
		assert_eq!(err.diagnostic().message, "column 'bio' is defined more than once in table 'users'");
	}

	#[test]
	fn test_registered_columns_validate_values() {
		let table = MySqlTable::builder("posts")
			.column("title", tinytext(()).not_null())
			.column("status", text(TextConfig::enumerated(["draft", "published"]).unwrap()))
			.build()
			.unwrap();

		let title = table.column("title").unwrap();
		assert!(title.validate(Some("hello")).is_ok());
		assert_eq!(title.validate(None).unwrap_err().code(), "SCHEMA_005");
		assert_eq!(title.validate(Some("a".repeat(256).as_str())).unwrap_err().code(), "SCHEMA_004");

		let status = table.column("status").unwrap();
		assert!(status.validate(Some("published")).is_ok());
		assert!(status.validate(None).is_ok());
		assert_eq!(status.validate(Some("archived")).unwrap_err().code(), "SCHEMA_003");
	}
}
