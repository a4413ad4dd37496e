use vexil_core::{FlagKey, FlagView};

/// Definition of a declared flag.
///
/// Built with the builder-style methods, then handed to
/// [`FlagSet::declare`](crate::FlagSet::declare), which populates the
/// canonical [`FlagKey`]. The key id defaults to the long name; use
/// [`key_id`](FlagDef::key_id) to override it before declaration.
#[derive(Debug, Clone)]
pub struct FlagDef {
	long: String,
	short: String,
	usage: String,
	key: FlagKey,
	key_id_override: Option<String>,
	required: bool,
	deprecated: bool,
}

impl FlagDef {
	/// Creates a definition for `--long` with everything else unset.
	pub fn new(long: impl Into<String>) -> Self {
		Self {
			long: long.into(),
			short: String::new(),
			usage: String::new(),
			key: FlagKey::new(),
			key_id_override: None,
			required: false,
			deprecated: false,
		}
	}

	/// Sets the short (`-s`) form.
	pub fn short(mut self, short: impl Into<String>) -> Self {
		self.short = short.into();
		self
	}

	/// Sets the usage/help text.
	pub fn usage(mut self, usage: impl Into<String>) -> Self {
		self.usage = usage.into();
		self
	}

	/// Marks the flag as required.
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Marks the flag as deprecated.
	pub fn deprecated(mut self) -> Self {
		self.deprecated = true;
		self
	}

	/// Overrides the key id derived from the long name.
	pub fn key_id(mut self, id: impl Into<String>) -> Self {
		self.key_id_override = Some(id.into());
		self
	}

	/// The raw id the canonical key should be derived from.
	pub(crate) fn key_source(&self) -> &str {
		self.key_id_override.as_deref().unwrap_or(&self.long)
	}

	pub(crate) fn key_mut(&mut self) -> &mut FlagKey {
		&mut self.key
	}
}

impl FlagView for FlagDef {
	fn long_name(&self) -> &str {
		&self.long
	}

	fn short_name(&self) -> &str {
		&self.short
	}

	fn usage(&self) -> &str {
		&self.usage
	}

	fn key(&self) -> &FlagKey {
		&self.key
	}

	fn is_required(&self) -> bool {
		self.required
	}

	fn is_deprecated(&self) -> bool {
		self.deprecated
	}
}
