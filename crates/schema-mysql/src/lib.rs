// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! MySQL column families.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod column;
pub mod table;

pub use column::text::{MySqlText, MySqlTextBuilder, TextConfig, TextType, longtext, mediumtext, text, tinytext};
pub use reifydb_schema::{Column, ColumnBuilder, Error, Result};
pub use table::{MySqlTable, MySqlTableBuilder};
