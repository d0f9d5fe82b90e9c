// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod text;

/// Name given to an unnamed unique constraint over `columns` of `table`.
pub fn unique_key_name(table: &str, columns: &[&str]) -> String {
	format!("{}_{}_unique", table, columns.join("_"))
}
