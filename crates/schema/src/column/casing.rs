// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// How a schema key becomes a column name when the builder left it empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Casing {
	#[default]
	Preserve,
	SnakeCase,
	CamelCase,
}

impl Casing {
	pub fn apply(&self, key: &str) -> String {
		match self {
			Casing::Preserve => key.to_string(),
			Casing::SnakeCase => words(key).iter().map(|w| w.to_ascii_lowercase()).collect::<Vec<_>>().join("_"),
			Casing::CamelCase => {
				let mut result = String::with_capacity(key.len());
				for (i, word) in words(key).iter().enumerate() {
					if i == 0 {
						result.push_str(&word.to_ascii_lowercase());
					} else {
						let mut chars = word.chars();
						if let Some(first) = chars.next() {
							result.push(first.to_ascii_uppercase());
							result.push_str(chars.as_str());
						}
					}
				}
				result
			}
		}
	}
}

// Splits on separators, lower-to-upper transitions and the end of an
// acronym ("HTMLParser" -> "HTML", "Parser").
fn words(input: &str) -> Vec<String> {
	let chars: Vec<char> = input.chars().filter(|c| *c != '\'' && *c != '\u{2019}').collect();
	let mut words = Vec::new();
	let mut current = String::new();

	for (i, &c) in chars.iter().enumerate() {
		if !c.is_ascii_alphanumeric() {
			if !current.is_empty() {
				words.push(std::mem::take(&mut current));
			}
			continue;
		}

		let prev = i.checked_sub(1).map(|p| chars[p]);
		let next = chars.get(i + 1);
		let boundary = if c.is_ascii_uppercase() {
			let after_lower = prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit());
			let acronym_end =
				prev.is_some_and(|p| p.is_ascii_uppercase()) && next.is_some_and(|n| n.is_ascii_lowercase());
			after_lower || acronym_end
		} else {
			c.is_ascii_digit() && prev.is_some_and(|p| p.is_ascii_uppercase())
		};

		if boundary && !current.is_empty() {
			words.push(std::mem::take(&mut current));
		}
		current.push(c);
	}

	if !current.is_empty() {
		words.push(current);
	}
	words
}
