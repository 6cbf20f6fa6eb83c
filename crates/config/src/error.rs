//! Error types for configuration parsing.

use std::path::PathBuf;

use blockinfo_primitives::KeyParseError;
use thiserror::Error;

/// Errors that can occur when parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing KDL syntax.
	#[error("KDL parse error: {0}")]
	Kdl(#[from] kdl::KdlError),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A value has the wrong type.
	#[error("invalid value for {field}: expected {expected}")]
	InvalidValue {
		/// Dotted path of the offending field, e.g. `providers.agetext.active`.
		field: String,
		expected: &'static str,
	},

	/// A hotkey string does not parse.
	#[error("invalid hotkey {text:?} for provider {provider}: {source}")]
	InvalidHotkey {
		provider: String,
		text: String,
		#[source]
		source: KeyParseError,
	},
}

/// Non-fatal problems found while parsing or applying configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// A top-level or section node this version does not understand.
	UnknownNode {
		/// The enclosing section, or `None` at the top level.
		section: Option<&'static str>,
		name: String,
	},
	/// A provider entry carries an attribute other than `active` or `hotkey`.
	UnknownAttribute { provider: String, attribute: String },
	/// A provider key that no registered provider uses.
	UnknownProvider { key: String },
}

impl std::fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ConfigWarning::UnknownNode { section: None, name } => {
				write!(f, "Unknown section '{name}' will be ignored")
			}
			ConfigWarning::UnknownNode {
				section: Some(section),
				name,
			} => write!(f, "Unknown entry '{name}' in {section} block will be ignored"),
			ConfigWarning::UnknownAttribute { provider, attribute } => {
				write!(f, "Unknown attribute '{attribute}' on provider '{provider}' will be ignored")
			}
			ConfigWarning::UnknownProvider { key } => {
				write!(f, "No annotation provider named '{key}'")
			}
		}
	}
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
