// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use reifydb_schema::{Casing, Column, ColumnBuilder, ColumnDefault, DataType, EnumValues, TableRef, ValueKind};
use reifydb_schema_mysql::{MySqlTable, TextConfig, TextType, longtext, mediumtext, text, tinytext};
use serde_json::json;

#[test]
fn test_text_without_arguments() {
	let builder = text(());
	assert_eq!(builder.name(), "");
	assert_eq!(builder.text_type(), TextType::Text);
	assert!(builder.enum_values().is_none());

	let column = builder.build(&TableRef::new("users"));
	assert_eq!(column.sql_type(), "text");
}

#[test]
fn test_tinytext_with_name() {
	let builder = tinytext("bio");
	assert_eq!(builder.name(), "bio");
	assert_eq!(builder.text_type(), TextType::TinyText);

	let column = builder.build(&TableRef::new("users"));
	assert_eq!(column.name(), "bio");
	assert_eq!(column.sql_type(), "tinytext");
}

#[test]
fn test_mediumtext_with_config() {
	let builder = mediumtext(TextConfig::enumerated(["a", "b"]).unwrap());
	assert_eq!(builder.name(), "");
	assert_eq!(builder.text_type(), TextType::MediumText);

	let column = builder.build(&TableRef::new("users"));
	assert_eq!(column.sql_type(), "mediumtext");
	assert_eq!(column.enum_values().map(|v| v.to_vec()), Some(vec!["a".to_string(), "b".to_string()]));
}

#[test]
fn test_longtext_with_name_and_config() {
	let builder = longtext(("notes", TextConfig::enumerated(["x"]).unwrap()));
	assert_eq!(builder.name(), "notes");
	assert_eq!(builder.text_type(), TextType::LongText);

	let column = builder.build(&TableRef::new("users"));
	assert_eq!(column.name(), "notes");
	assert_eq!(column.sql_type(), "longtext");
	assert_eq!(&**column.enum_values().unwrap(), &["x"]);
}

#[test]
fn test_every_factory_emits_its_keyword() {
	let table = TableRef::new("documents");
	let cases = [
		(tinytext(()), "tinytext"),
		(text(()), "text"),
		(mediumtext(()), "mediumtext"),
		(longtext(()), "longtext"),
	];

	for (builder, expected) in cases {
		let column = builder.build(&table);
		assert_eq!(column.sql_type(), expected);
		assert_eq!(column.text_type().to_string(), expected);
		assert_eq!(column.data_type(), DataType::String);
		assert_eq!(column.column_type(), "MySqlText");
	}
}

#[test]
fn test_building_twice_binds_independent_tables() {
	let values = EnumValues::new(["draft", "published"]).unwrap();
	let builder = text(("status", TextConfig::new().with_enum(values.clone())));

	let users = TableRef::new("users");
	let posts = TableRef::new("posts");
	let a = builder.build(&users);
	let b = builder.build(&posts);

	assert_eq!(a.table(), &users);
	assert_eq!(b.table(), &posts);
	assert_ne!(a.table(), b.table());

	assert_eq!(a.text_type(), b.text_type());
	assert_eq!(a.name(), b.name());
	assert!(a.enum_values().unwrap().ptr_eq(b.enum_values().unwrap()));
}

#[test]
fn test_enum_values_are_shared_from_factory_call() {
	let values = EnumValues::new(["low", "medium", "high"]).unwrap();
	let builder = tinytext(("priority", TextConfig::new().with_enum(values.clone())));
	let column = builder.build(&TableRef::new("tasks"));

	let exposed = column.enum_values().unwrap();
	assert!(exposed.ptr_eq(&values));
	assert_eq!(&**exposed, &["low", "medium", "high"]);
	assert_eq!(column.value_kind(), ValueKind::Enum(values));
}

#[test]
fn test_modifiers_survive_build() {
	let column = text("slug")
		.not_null()
		.default_value("untitled")
		.unique()
		.build(&TableRef::new("posts"));

	assert!(column.not_null());
	assert!(column.has_default());
	assert_eq!(column.default(), Some(&ColumnDefault::Value("untitled".to_string())));
	assert!(!column.primary_key());
	assert_eq!(column.unique_name(), Some("posts_slug_unique"));
}

#[test]
fn test_table_registration_end_to_end() {
	let table = MySqlTable::builder("articles")
		.casing(Casing::SnakeCase)
		.column("headline", tinytext(()).not_null())
		.column("bodyText", longtext(()))
		.column("state", text(TextConfig::enumerated(["draft", "live"]).unwrap()).default_value("draft"))
		.build()
		.unwrap();

	let names: Vec<(&str, String, String)> =
		table.columns().map(|(key, column)| (key, column.name().to_string(), column.sql_type())).collect();
	assert_eq!(
		names,
		vec![
			("headline", "headline".to_string(), "tinytext".to_string()),
			("bodyText", "body_text".to_string(), "longtext".to_string()),
			("state", "state".to_string(), "text".to_string()),
		]
	);

	let state = table.column("state").unwrap();
	assert_eq!(state.value_kind(), ValueKind::Enum(EnumValues::new(["draft", "live"]).unwrap()));
	assert!(table.columns().all(|(_, column)| column.table() == table.table_ref()));
}

#[test]
fn test_descriptor_snapshot() {
	let table = TableRef::new("users");
	let column = mediumtext(("role", TextConfig::enumerated(["admin", "member"]).unwrap())).not_null().build(&table);

	let snapshot = serde_json::to_value(&column).unwrap();
	assert_eq!(
		snapshot,
		json!({
			"table": {"id": table.id().0, "name": "users"},
			"name": "role",
			"not_null": true,
			"default": null,
			"has_default": false,
			"primary_key": false,
			"is_unique": false,
			"unique_name": null,
			"data_type": "string",
			"column_type": "MySqlText",
			"text_type": "mediumtext",
			"enum_values": ["admin", "member"],
		})
	);
}

#[test]
fn test_validation_through_table() {
	let table = MySqlTable::builder("users")
		.column("bio", tinytext(()).not_null())
		.column("role", text(TextConfig::enumerated(["admin", "member"]).unwrap()))
		.build()
		.unwrap();

	let bio = table.column("bio").unwrap();
	assert!(bio.validate(Some("hello")).is_ok());
	assert_eq!(bio.validate(None).unwrap_err().code(), "SCHEMA_005");

	let role = table.column_by_name("role").unwrap();
	assert!(role.validate(Some("member")).is_ok());
	let err = role.validate(Some("guest")).unwrap_err();
	assert_eq!(err.code(), "SCHEMA_003");
	assert_eq!(err.diagnostic().help.as_deref(), Some("Use one of: admin, member"));
}
