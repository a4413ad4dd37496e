//! Canonical flag identifiers.

use crate::sanitize::sanitize;

/// Namespaced canonical identifier for a flag.
///
/// A key combines an optional namespace `prefix` (usually shared by
/// every flag in a registry) with a per-flag `id`, both stored in
/// sanitized form. The canonical string is `PREFIX_ID`, or just `ID`
/// when no prefix is set, or empty while the id is unset.
///
/// Keys are created empty at flag-declaration time and configured once;
/// after that they are read-only. Re-setting a field overwrites
/// silently — callers own the write-once discipline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FlagKey {
	prefix: String,
	id: String,
}

impl FlagKey {
	/// Creates an empty, unset key.
	pub const fn new() -> Self {
		Self {
			prefix: String::new(),
			id: String::new(),
		}
	}

	/// Stores the sanitized namespace prefix.
	///
	/// Empty or whitespace-only input leaves the prefix empty; no error.
	pub fn set_prefix(&mut self, raw: &str) {
		self.prefix = sanitize(raw);
	}

	/// Stores the sanitized per-flag identifier.
	///
	/// Intended to be called once at declaration time; calling again
	/// overwrites silently.
	pub fn set_id(&mut self, raw: &str) {
		self.id = sanitize(raw);
	}

	/// Returns the sanitized prefix (possibly empty).
	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Returns the sanitized id (possibly empty).
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Returns the canonical joined form.
	///
	/// Empty if the id is unset, the bare id if no prefix is set,
	/// otherwise `prefix_id`.
	pub fn canonical(&self) -> String {
		if self.id.is_empty() {
			String::new()
		} else if self.prefix.is_empty() {
			self.id.clone()
		} else {
			format!("{}_{}", self.prefix, self.id)
		}
	}

	/// Returns true once the id has been set to a non-empty value.
	pub fn is_set(&self) -> bool {
		!self.id.is_empty()
	}
}

impl std::fmt::Display for FlagKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.canonical())
	}
}

#[cfg(test)]
mod tests {
	use super::FlagKey;
	use crate::sanitize::sanitize;

	#[test]
	fn prefixed_canonical() {
		let mut key = FlagKey::new();
		key.set_prefix("app");
		key.set_id("port");
		assert_eq!(key.canonical(), "APP_PORT");
		assert!(key.is_set());
	}

	#[test]
	fn unprefixed_canonical() {
		let mut key = FlagKey::new();
		key.set_id("timeout");
		assert_eq!(key.canonical(), "TIMEOUT");
		assert!(key.is_set());
	}

	#[test]
	fn unset_id_means_empty_canonical() {
		let mut key = FlagKey::new();
		key.set_prefix("app");
		assert_eq!(key.canonical(), "");
		assert!(!key.is_set());
		assert_eq!(key.prefix(), "APP");
	}

	#[test]
	fn canonical_round_trips_through_sanitize() {
		let mut key = FlagKey::new();
		key.set_prefix("my app");
		key.set_id("max-retries");
		assert_eq!(
			key.canonical(),
			format!("{}_{}", sanitize("my app"), sanitize("max-retries"))
		);
	}

	#[test]
	fn whitespace_only_id_stays_unset() {
		let mut key = FlagKey::new();
		key.set_id("   ");
		assert!(!key.is_set());
		assert_eq!(key.canonical(), "");
	}

	#[test]
	fn re_set_overwrites_silently() {
		let mut key = FlagKey::new();
		key.set_id("old");
		key.set_id("new");
		assert_eq!(key.canonical(), "NEW");
	}

	#[test]
	fn display_is_canonical() {
		let mut key = FlagKey::new();
		key.set_prefix("app");
		key.set_id("port");
		assert_eq!(key.to_string(), "APP_PORT");
	}
}
