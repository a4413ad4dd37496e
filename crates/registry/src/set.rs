use std::cmp::Ordering;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};
use vexil_core::{Comparator, FlagView, catalog};

use crate::def::FlagDef;
use crate::error::DeclareError;

/// A bucket of declared flags.
///
/// Flags are stored in declaration order; secondary indexes by long
/// name, short name, and canonical key back the lookup methods. The
/// set's key prefix is fixed at construction and stamped into every
/// declared flag's [`FlagKey`](vexil_core::FlagKey).
#[derive(Debug, Default)]
pub struct FlagSet {
	prefix: String,
	flags: Vec<FlagDef>,
	by_long: FxHashMap<String, usize>,
	by_short: FxHashMap<String, usize>,
	by_key: FxHashMap<String, usize>,
}

impl FlagSet {
	/// Creates an empty set with no key prefix.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty set whose flags share a canonical key prefix.
	pub fn with_prefix(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			..Self::default()
		}
	}

	/// The raw prefix this set stamps into declared keys.
	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Declares a flag, populating its canonical key.
	///
	/// The key prefix comes from the set; the key id from the def's
	/// explicit override or its long name. Duplicate long names, short
	/// names, and canonical keys are rejected, as are names that
	/// sanitize to an empty identifier.
	pub fn declare(&mut self, mut def: FlagDef) -> Result<&FlagDef, DeclareError> {
		let source = def.key_source().to_string();
		{
			let key = def.key_mut();
			key.set_prefix(&self.prefix);
			key.set_id(&source);
		}
		if !def.key().is_set() {
			return Err(DeclareError::UnusableIdentifier(source));
		}

		let canonical = def.key().canonical();
		if self.by_long.contains_key(def.long_name()) {
			return Err(DeclareError::DuplicateLongName(def.long_name().to_string()));
		}
		if !def.short_name().is_empty() && self.by_short.contains_key(def.short_name()) {
			return Err(DeclareError::DuplicateShortName(
				def.short_name().to_string(),
			));
		}
		if self.by_key.contains_key(&canonical) {
			return Err(DeclareError::DuplicateKey(canonical));
		}

		if def.is_deprecated() {
			warn!(long = %def.long_name(), key = %canonical, "declared deprecated flag");
		} else {
			debug!(long = %def.long_name(), key = %canonical, "declared flag");
		}

		let index = self.flags.len();
		self.by_long.insert(def.long_name().to_string(), index);
		if !def.short_name().is_empty() {
			self.by_short.insert(def.short_name().to_string(), index);
		}
		self.by_key.insert(canonical, index);
		self.flags.push(def);
		Ok(&self.flags[index])
	}

	/// Number of declared flags.
	pub fn len(&self) -> usize {
		self.flags.len()
	}

	/// Returns true if no flags are declared.
	pub fn is_empty(&self) -> bool {
		self.flags.is_empty()
	}

	/// Iterates flags in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = &FlagDef> {
		self.flags.iter()
	}

	/// Resolves a flag by long name, then short name.
	pub fn get(&self, name: &str) -> Option<&FlagDef> {
		self.by_long
			.get(name)
			.or_else(|| self.by_short.get(name))
			.map(|&i| &self.flags[i])
	}

	/// Resolves a flag by its canonical key string.
	pub fn get_by_key(&self, canonical: &str) -> Option<&FlagDef> {
		self.by_key.get(canonical).map(|&i| &self.flags[i])
	}

	/// Suggests the closest declared long name for an unknown input.
	pub fn suggest(&self, name: &str) -> Option<&str> {
		self.flags
			.iter()
			.map(|f| f.long_name())
			.min_by_key(|k| strsim::levenshtein(name, k))
			.filter(|k| strsim::levenshtein(name, k) <= 3)
	}

	/// Returns the flags ordered by the given comparator.
	///
	/// The declaration-order sentinel short-circuits to the flags as
	/// declared; any other strategy drives a stable sort, so flags the
	/// comparator considers tied keep their declaration order.
	pub fn sorted(&self, comparator: Comparator) -> Vec<&FlagDef> {
		let mut view: Vec<&FlagDef> = self.flags.iter().collect();
		if comparator.is_declared_order() {
			return view;
		}
		view.sort_by(|a, b| {
			if comparator.less_than(Some(*a), Some(*b)) {
				Ordering::Less
			} else if comparator.less_than(Some(*b), Some(*a)) {
				Ordering::Greater
			} else {
				Ordering::Equal
			}
		});
		view
	}

	/// Returns the flags ordered by a named catalog strategy.
	///
	/// `None` if the name is not in the catalog; pair with
	/// [`catalog::names`] for error reporting.
	pub fn sorted_by_name(&self, name: &str) -> Option<Vec<&FlagDef>> {
		catalog::find(name).map(|cmp| self.sorted(cmp))
	}
}

impl<'a> IntoIterator for &'a FlagSet {
	type Item = &'a FlagDef;
	type IntoIter = std::slice::Iter<'a, FlagDef>;

	fn into_iter(self) -> Self::IntoIter {
		self.flags.iter()
	}
}
