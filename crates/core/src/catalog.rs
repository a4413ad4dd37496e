//! Pre-built comparator strategies.
//!
//! A fixed, process-wide table of ready-to-use [`Comparator`] values
//! covering every (field, direction) pair across both families, plus
//! the [`DECLARED`] sentinel. Entries are immutable `Copy` values, so
//! the table needs no synchronization beyond its one-time index build.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::order::{Comparator, Direction, TextField, ToggleField};

/// Keep declaration order; apply no comparator.
pub const DECLARED: Comparator = Comparator::Declared;

/// Long name, A to Z.
pub const LONG_NAME_ASC: Comparator = Comparator::Text {
	field: TextField::LongName,
	direction: Direction::Ascending,
};

/// Long name, Z to A.
pub const LONG_NAME_DESC: Comparator = Comparator::Text {
	field: TextField::LongName,
	direction: Direction::Descending,
};

/// Short name, A to Z.
pub const SHORT_NAME_ASC: Comparator = Comparator::Text {
	field: TextField::ShortName,
	direction: Direction::Ascending,
};

/// Short name, Z to A.
pub const SHORT_NAME_DESC: Comparator = Comparator::Text {
	field: TextField::ShortName,
	direction: Direction::Descending,
};

/// Canonical key, A to Z.
pub const KEY_ASC: Comparator = Comparator::Text {
	field: TextField::Key,
	direction: Direction::Ascending,
};

/// Canonical key, Z to A.
pub const KEY_DESC: Comparator = Comparator::Text {
	field: TextField::Key,
	direction: Direction::Descending,
};

/// Usage text, A to Z.
pub const USAGE_ASC: Comparator = Comparator::Text {
	field: TextField::Usage,
	direction: Direction::Ascending,
};

/// Usage text, Z to A.
pub const USAGE_DESC: Comparator = Comparator::Text {
	field: TextField::Usage,
	direction: Direction::Descending,
};

/// Required flags before optional ones.
pub const REQUIRED_FIRST: Comparator = Comparator::Toggle {
	field: ToggleField::Required,
	direction: Direction::Ascending,
};

/// Required flags after optional ones.
pub const REQUIRED_LAST: Comparator = Comparator::Toggle {
	field: ToggleField::Required,
	direction: Direction::Descending,
};

/// Deprecated flags first.
pub const DEPRECATED_FIRST: Comparator = Comparator::Toggle {
	field: ToggleField::Deprecated,
	direction: Direction::Ascending,
};

/// Deprecated flags last.
pub const DEPRECATED_LAST: Comparator = Comparator::Toggle {
	field: ToggleField::Deprecated,
	direction: Direction::Descending,
};

/// Every catalog entry with its lookup name.
pub const ENTRIES: &[(&str, Comparator)] = &[
	("declared", DECLARED),
	("long", LONG_NAME_ASC),
	("long:desc", LONG_NAME_DESC),
	("short", SHORT_NAME_ASC),
	("short:desc", SHORT_NAME_DESC),
	("key", KEY_ASC),
	("key:desc", KEY_DESC),
	("usage", USAGE_ASC),
	("usage:desc", USAGE_DESC),
	("required-first", REQUIRED_FIRST),
	("required-last", REQUIRED_LAST),
	("deprecated-first", DEPRECATED_FIRST),
	("deprecated-last", DEPRECATED_LAST),
];

static BY_NAME: LazyLock<FxHashMap<&'static str, Comparator>> =
	LazyLock::new(|| ENTRIES.iter().copied().collect());

/// Looks up a pre-built comparator by its catalog name.
pub fn find(name: &str) -> Option<Comparator> {
	BY_NAME.get(name).copied()
}

/// Returns the catalog names in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
	ENTRIES.iter().map(|&(name, _)| name)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn find_resolves_every_listed_name() {
		for &(name, cmp) in ENTRIES {
			assert_eq!(find(name), Some(cmp), "missing catalog entry {name}");
		}
		assert_eq!(find("no-such-ordering"), None);
	}

	#[test]
	fn names_are_unique() {
		let mut seen: Vec<&str> = names().collect();
		seen.sort_unstable();
		seen.dedup();
		assert_eq!(seen.len(), ENTRIES.len());
	}

	#[test]
	fn sentinel_is_declared_order() {
		assert!(find("declared").expect("sentinel").is_declared_order());
	}

	#[test]
	fn covers_both_families_in_both_directions() {
		let toggles = ENTRIES
			.iter()
			.filter(|(_, c)| matches!(c, Comparator::Toggle { .. }))
			.count();
		let texts = ENTRIES
			.iter()
			.filter(|(_, c)| matches!(c, Comparator::Text { .. }))
			.count();
		assert_eq!(texts, 8);
		assert_eq!(toggles, 4);
	}
}
