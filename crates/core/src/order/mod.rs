//! Comparator strategies for flag ordering.
//!
//! A [`Comparator`] is a plain configuration value: a field selector
//! and a [`Direction`], dispatched through a single pure `less_than`
//! predicate. Strategies carry no state, so they are `Copy` and safe to
//! reuse across calls and threads.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::flag::FlagView;


/// Sort direction for a comparator strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	/// Smallest (or `true`-valued, for toggles) first.
	Ascending,
	/// Largest (or `true`-valued, for toggles) last.
	Descending,
}

/// String-valued flag attributes a comparator can select.
///
/// The selector is a closed enum, so the "unrecognized field" case of
/// looser designs is unrepresentable here; there is no fallback field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextField {
	/// The `--long` name.
	LongName,
	/// The `-s` short name.
	ShortName,
	/// The canonical key string (`PREFIX_ID`).
	Key,
	/// The usage/help text.
	Usage,
}

/// Boolean-valued flag attributes a comparator can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleField {
	/// Whether the flag is required.
	Required,
	/// Whether the flag is deprecated.
	Deprecated,
}

/// A configured ordering strategy over flag-like entities.
///
/// The only operation is [`less_than`](Comparator::less_than), the
/// strict ordering predicate a sorting algorithm plugs in directly.
/// [`Comparator::Declared`] is the sentinel meaning "no reordering":
/// its predicate is constantly `false`, so any stable sort leaves the
/// declaration order intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparator {
	/// Keep declaration order; compare nothing.
	Declared,
	/// Order by a string attribute.
	Text {
		/// Attribute to compare.
		field: TextField,
		/// Sort direction.
		direction: Direction,
	},
	/// Order by a boolean attribute.
	Toggle {
		/// Attribute to compare.
		field: ToggleField,
		/// Sort direction.
		direction: Direction,
	},
}

impl Comparator {
	/// Strict "first sorts before second" predicate.
	///
	/// An absent reference on either side yields `false` — sorting must
	/// never crash on partially-populated input, at the cost of the
	/// relation not being total when absences are present.
	///
	/// String fields compare ordinally (byte-wise, locale-free).
	/// Descending swaps the operands rather than negating the result,
	/// so equal values report `false` in both directions.
	///
	/// Toggle fields place `true`-valued flags first when ascending and
	/// last when descending. Equal attribute values report `false` in
	/// both directions: ties are unordered, keeping the relation
	/// irreflexive and safe for [`slice::sort_by`].
	pub fn less_than<F: FlagView + ?Sized>(&self, first: Option<&F>, second: Option<&F>) -> bool {
		let (Some(a), Some(b)) = (first, second) else {
			return false;
		};
		match *self {
			Self::Declared => false,
			Self::Text { field, direction } => {
				let lhs = text_value(a, field);
				let rhs = text_value(b, field);
				match direction {
					Direction::Ascending => lhs < rhs,
					Direction::Descending => rhs < lhs,
				}
			}
			Self::Toggle { field, direction } => {
				let lhs = toggle_value(a, field);
				let rhs = toggle_value(b, field);
				if lhs == rhs {
					return false;
				}
				match direction {
					Direction::Ascending => lhs,
					Direction::Descending => rhs,
				}
			}
		}
	}

	/// Returns true for the declaration-order sentinel.
	pub fn is_declared_order(&self) -> bool {
		matches!(self, Self::Declared)
	}
}

fn text_value<'a, F: FlagView + ?Sized>(flag: &'a F, field: TextField) -> Cow<'a, str> {
	match field {
		TextField::LongName => Cow::Borrowed(flag.long_name()),
		TextField::ShortName => Cow::Borrowed(flag.short_name()),
		TextField::Key => Cow::Owned(flag.key().canonical()),
		TextField::Usage => Cow::Borrowed(flag.usage()),
	}
}

fn toggle_value<F: FlagView + ?Sized>(flag: &F, field: ToggleField) -> bool {
	match field {
		ToggleField::Required => flag.is_required(),
		ToggleField::Deprecated => flag.is_deprecated(),
	}
}
