// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, DiagnosticColumn, IntoDiagnostic, SchemaError};

impl IntoDiagnostic for SchemaError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			SchemaError::EmptyEnumValues => Diagnostic {
				code: "SCHEMA_001".to_string(),
				message,
				column: None,
				label: Some("empty enum constraint".to_string()),
				help: Some("Provide at least one allowed value, or omit the enum option entirely".to_string()),
				notes: vec!["An enum constraint narrows a text column to a fixed set of values".to_string()],
			},

			SchemaError::UnknownSqlType {
				sql_type,
			} => Diagnostic {
				code: "SCHEMA_002".to_string(),
				message,
				column: None,
				label: Some("unknown type".to_string()),
				help: Some(format!("'{}' does not name a type of this column family", sql_type)),
				notes: vec![],
			},

			SchemaError::EnumValueNotAllowed {
				column,
				sql_type,
				value: _,
				allowed,
			} => Diagnostic {
				code: "SCHEMA_003".to_string(),
				message,
				column: Some(DiagnosticColumn {
					name: column,
					sql_type,
				}),
				label: Some("value outside enum constraint".to_string()),
				help: Some(format!("Use one of: {}", allowed.join(", "))),
				notes: vec![],
			},

			SchemaError::ValueExceedsCapacity {
				column,
				sql_type,
				actual: _,
				max,
			} => {
				let help = format!(
					"The {} type holds at most {} bytes. Consider shortening the value or using a larger text type",
					sql_type, max
				);
				Diagnostic {
					code: "SCHEMA_004".to_string(),
					message,
					column: Some(DiagnosticColumn {
						name: column,
						sql_type,
					}),
					label: Some("capacity exceeded".to_string()),
					help: Some(help),
					notes: vec!["Capacity is measured in UTF-8 bytes, not characters".to_string()],
				}
			}

			SchemaError::NullNotAllowed {
				column,
				sql_type,
			} => Diagnostic {
				code: "SCHEMA_005".to_string(),
				message,
				column: Some(DiagnosticColumn {
					name: column,
					sql_type,
				}),
				label: Some("null in NOT NULL column".to_string()),
				help: Some("Provide a value, or declare the column without not_null()".to_string()),
				notes: vec![],
			},

			SchemaError::EmptyTableName => Diagnostic {
				code: "SCHEMA_006".to_string(),
				message,
				column: None,
				label: Some("empty table name".to_string()),
				help: Some("Give the table a non-empty name".to_string()),
				notes: vec![],
			},

			SchemaError::EmptyColumnKey {
				table: _,
			} => Diagnostic {
				code: "SCHEMA_007".to_string(),
				message,
				column: None,
				label: Some("empty column key".to_string()),
				help: Some("Every column is registered under a non-empty key".to_string()),
				notes: vec![],
			},

			SchemaError::DuplicateColumn {
				table: _,
				column,
			} => Diagnostic {
				code: "SCHEMA_008".to_string(),
				message,
				column: None,
				label: Some("duplicate column".to_string()),
				help: Some(format!("Rename one of the '{}' columns", column)),
				notes: vec!["Column names are compared after casing has been applied to keys".to_string()],
			},
		}
	}
}
