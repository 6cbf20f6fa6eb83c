//! Parsing of `providers { }` entries.

use blockinfo_primitives::KeyCombo;
use kdl::{KdlNode, KdlValue};

use crate::error::{ConfigError, ConfigWarning, Result};

/// Overrides for one annotation provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderConfig {
	/// Provider key, e.g. `coordinatestext`.
	pub key: String,
	pub active: Option<bool>,
	/// Replacement key bindings. `Some(vec![])` unbinds the provider.
	pub hotkeys: Option<Vec<KeyCombo>>,
	/// Whether a matching press stops at this provider's binding.
	pub exclusive: Option<bool>,
}

impl ProviderConfig {
	/// Parses one provider node, e.g. `agetext active=#true hotkey="ctrl-a" "alt-a" exclusive=#true`.
	pub fn parse(node: &KdlNode) -> Result<(Self, Vec<ConfigWarning>)> {
		let key = node.name().value().to_string();
		let mut config = ProviderConfig {
			key,
			..Self::default()
		};
		let mut warnings = Vec::new();

		for entry in node.entries() {
			match entry.name().map(|n| n.value()) {
				Some("active") => {
					let active = entry.value().as_bool().ok_or_else(|| ConfigError::InvalidValue {
						field: format!("providers.{}.active", config.key),
						expected: "a boolean",
					})?;
					config.active = Some(active);
				}
				Some("exclusive") => {
					let exclusive = entry.value().as_bool().ok_or_else(|| ConfigError::InvalidValue {
						field: format!("providers.{}.exclusive", config.key),
						expected: "a boolean",
					})?;
					config.exclusive = Some(exclusive);
				}
				Some("hotkey") | None => config.push_hotkey(entry.value())?,
				Some(other) => warnings.push(ConfigWarning::UnknownAttribute {
					provider: config.key.clone(),
					attribute: other.to_string(),
				}),
			}
		}

		Ok((config, warnings))
	}

	/// Folds a later entry for the same provider into this one.
	pub fn merge(&mut self, other: ProviderConfig) {
		if other.active.is_some() {
			self.active = other.active;
		}
		if other.hotkeys.is_some() {
			self.hotkeys = other.hotkeys;
		}
		if other.exclusive.is_some() {
			self.exclusive = other.exclusive;
		}
	}

	fn push_hotkey(&mut self, value: &KdlValue) -> Result<()> {
		let text = value.as_string().ok_or_else(|| ConfigError::InvalidValue {
			field: format!("providers.{}.hotkey", self.key),
			expected: "a string",
		})?;
		let keys = self.hotkeys.get_or_insert_with(Vec::new);
		if text.is_empty() {
			return Ok(());
		}

		let combo = KeyCombo::parse(text).map_err(|source| ConfigError::InvalidHotkey {
			provider: self.key.clone(),
			text: text.to_string(),
			source,
		})?;
		if !keys.contains(&combo) {
			keys.push(combo);
		}
		Ok(())
	}
}
