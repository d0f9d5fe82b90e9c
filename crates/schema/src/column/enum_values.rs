// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{Error, SchemaError};

/// Ordered, non-empty list of values a column accepts, kept as given.
///
/// Cloning shares the underlying list; every builder and descriptor derived
/// from one factory call points at the same allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct EnumValues(Arc<[String]>);

impl EnumValues {
	pub fn new<I, S>(values: I) -> crate::Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let values: Vec<String> = values.into_iter().map(Into::into).collect();
		if values.is_empty() {
			debug!("rejected empty enum constraint");
			return Err(SchemaError::EmptyEnumValues.into());
		}

		trace!(count = values.len(), "enum constraint created");
		Ok(Self(values.into()))
	}

	pub fn contains(&self, value: &str) -> bool {
		self.0.iter().any(|v| v == value)
	}

	/// True when both lists are the same shared allocation.
	pub fn ptr_eq(&self, other: &EnumValues) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}

	pub fn to_vec(&self) -> Vec<String> {
		self.0.to_vec()
	}
}

impl Deref for EnumValues {
	type Target = [String];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl PartialEq for EnumValues {
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

impl Eq for EnumValues {}

impl TryFrom<Vec<String>> for EnumValues {
	type Error = Error;

	fn try_from(values: Vec<String>) -> Result<Self, Self::Error> {
		EnumValues::new(values)
	}
}

impl TryFrom<&[&str]> for EnumValues {
	type Error = Error;

	fn try_from(values: &[&str]) -> Result<Self, Self::Error> {
		EnumValues::new(values.iter().copied())
	}
}

impl From<EnumValues> for Vec<String> {
	fn from(values: EnumValues) -> Self {
		values.to_vec()
	}
}
