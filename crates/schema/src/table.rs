// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	hash::{Hash, Hasher},
	ops::Deref,
	sync::{
		Arc,
		atomic::{AtomicU64, Ordering},
	},
};

use serde::Serialize;

static TABLE_ID_SEQUENCE: AtomicU64 = AtomicU64::new(1);

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize)]
pub struct TableId(pub u64);

impl TableId {
	pub fn next() -> Self {
		TableId(TABLE_ID_SEQUENCE.fetch_add(1, Ordering::Relaxed))
	}
}

impl Deref for TableId {
	type Target = u64;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl PartialEq<u64> for TableId {
	fn eq(&self, other: &u64) -> bool {
		self.0.eq(other)
	}
}

impl From<TableId> for u64 {
	fn from(value: TableId) -> Self {
		value.0
	}
}

/// Handle to the table a column descriptor belongs to.
///
/// Holds the table's identity and name only, so descriptors never keep the
/// table's column set alive. Equality is identity: two handles are equal when
/// they carry the same [`TableId`].
#[derive(Debug, Clone, Serialize)]
pub struct TableRef {
	id: TableId,
	name: Arc<str>,
}

impl TableRef {
	pub fn new(name: impl Into<Arc<str>>) -> Self {
		Self {
			id: TableId::next(),
			name: name.into(),
		}
	}

	pub fn with_id(id: TableId, name: impl Into<Arc<str>>) -> Self {
		Self {
			id,
			name: name.into(),
		}
	}

	pub fn id(&self) -> TableId {
		self.id
	}

	pub fn name(&self) -> &str {
		&self.name
	}
}

impl PartialEq for TableRef {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TableRef {}

impl Hash for TableRef {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl Display for TableRef {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)
	}
}
