use thiserror::Error;

/// Errors raised while declaring flags into a [`FlagSet`](crate::FlagSet).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclareError {
	/// A flag with the same long name is already declared.
	#[error("duplicate long name: --{0}")]
	DuplicateLongName(String),
	/// A flag with the same short name is already declared.
	#[error("duplicate short name: -{0}")]
	DuplicateShortName(String),
	/// A flag with the same canonical key is already declared.
	#[error("duplicate canonical key: {0}")]
	DuplicateKey(String),
	/// The flag's identifier sanitizes to an empty string.
	#[error("flag name yields no usable identifier: {0:?}")]
	UnusableIdentifier(String),
}
