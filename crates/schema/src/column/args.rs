// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// First positional argument of a column factory.
#[derive(Debug, Clone, PartialEq)]
pub enum NameOrConfig<C> {
	Name(String),
	Config(C),
}

/// Resolved `(name, config)` pair a column factory builds from.
///
/// Factories take `impl Into<ColumnArgs<C>>`, so each accepts `()`, a name,
/// a config, or a `(name, config)` tuple. Dialect crates add the
/// `From<TheirConfig>` conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnArgs<C> {
	pub name: String,
	pub config: C,
}

impl<C: Default> ColumnArgs<C> {
	/// A leading name is taken as the name and the second argument as the
	/// config; a leading config wins over the second argument and leaves
	/// the name empty.
	pub fn resolve(first: Option<NameOrConfig<C>>, second: Option<C>) -> Self {
		match first {
			Some(NameOrConfig::Name(name)) => Self {
				name,
				config: second.unwrap_or_default(),
			},
			Some(NameOrConfig::Config(config)) => Self {
				name: String::new(),
				config,
			},
			None => Self {
				name: String::new(),
				config: second.unwrap_or_default(),
			},
		}
	}
}

impl<C: Default> From<()> for ColumnArgs<C> {
	fn from(_: ()) -> Self {
		ColumnArgs::resolve(None, None)
	}
}

impl<C: Default> From<&str> for ColumnArgs<C> {
	fn from(name: &str) -> Self {
		ColumnArgs::resolve(Some(NameOrConfig::Name(name.to_string())), None)
	}
}

impl<C: Default> From<String> for ColumnArgs<C> {
	fn from(name: String) -> Self {
		ColumnArgs::resolve(Some(NameOrConfig::Name(name)), None)
	}
}

impl<C: Default> From<(&str, C)> for ColumnArgs<C> {
	fn from((name, config): (&str, C)) -> Self {
		ColumnArgs::resolve(Some(NameOrConfig::Name(name.to_string())), Some(config))
	}
}

impl<C: Default> From<(String, C)> for ColumnArgs<C> {
	fn from((name, config): (String, C)) -> Self {
		ColumnArgs::resolve(Some(NameOrConfig::Name(name)), Some(config))
	}
}
