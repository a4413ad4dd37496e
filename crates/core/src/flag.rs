//! Read-only capability trait for flag-like entities.

use crate::key::FlagKey;

/// Read-only view over a declared flag.
///
/// The ordering layer consumes flags exclusively through this trait; it
/// never constructs or mutates one. Any registry entity exposing these
/// accessors can be sorted by a [`Comparator`](crate::Comparator).
pub trait FlagView {
	/// The long (`--name`) form.
	fn long_name(&self) -> &str;

	/// The short (`-n`) form, possibly empty.
	fn short_name(&self) -> &str;

	/// Help text describing the flag.
	fn usage(&self) -> &str;

	/// The flag's canonical key.
	fn key(&self) -> &FlagKey;

	/// Whether the flag must be provided.
	fn is_required(&self) -> bool;

	/// Whether the flag is deprecated.
	fn is_deprecated(&self) -> bool;
}
