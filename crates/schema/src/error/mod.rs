// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

mod diagnostic;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub column: Option<DiagnosticColumn>,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticColumn {
	pub name: String,
	pub sql_type: String,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.code, self.message)
	}
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
	#[error("enum constraint requires at least one value")]
	EmptyEnumValues,

	#[error("unknown SQL type '{sql_type}'")]
	UnknownSqlType {
		sql_type: String,
	},

	#[error("value '{value}' is not allowed in column '{column}'")]
	EnumValueNotAllowed {
		column: String,
		sql_type: String,
		value: String,
		allowed: Vec<String>,
	},

	#[error("value of {actual} bytes exceeds the {max} byte capacity of column '{column}'")]
	ValueExceedsCapacity {
		column: String,
		sql_type: String,
		actual: usize,
		max: u64,
	},

	#[error("column '{column}' does not accept null")]
	NullNotAllowed {
		column: String,
		sql_type: String,
	},

	#[error("table name must not be empty")]
	EmptyTableName,

	#[error("column key in table '{table}' must not be empty")]
	EmptyColumnKey {
		table: String,
	},

	#[error("column '{column}' is defined more than once in table '{table}'")]
	DuplicateColumn {
		table: String,
		column: String,
	},
}

/// A schema failure rendered as a [`Diagnostic`].
#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Box<Diagnostic>);

impl Error {
	pub fn diagnostic(&self) -> &Diagnostic {
		&self.0
	}

	pub fn into_diagnostic(self) -> Diagnostic {
		*self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl std::error::Error for Error {}

impl From<SchemaError> for Error {
	fn from(err: SchemaError) -> Self {
		Error(Box::new(err.into_diagnostic()))
	}
}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(Box::new(diagnostic))
	}
}
