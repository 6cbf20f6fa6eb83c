//! Setup-time errors.
//!
//! Everything here is a wiring mistake in the provider set. Absence of data at
//! render time is never an error; providers report it by not applying.

/// A provider definition that cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
	/// A property formatter was given nothing to look up.
	#[error("provider {key:?} has no block-state properties to format")]
	NoProperties { key: &'static str },

	/// A property formatter's template has nowhere to put the value.
	#[error("provider {key:?} format {format:?} has no %s placeholder")]
	MissingPlaceholder { key: &'static str, format: &'static str },
}

/// Registration failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	#[error("duplicate provider key {key:?}")]
	DuplicateKey { key: &'static str },

	#[error("provider key must not be empty")]
	EmptyKey,

	#[error("invalid provider definition: {0}")]
	Provider(#[from] ProviderError),
}
