//! Configuration for the block info overlay.
//!
//! Configuration is written in KDL (v2):
//!
//! ```kdl
//! overlay {
//!     enabled #true
//! }
//!
//! providers {
//!     coordinatestext active=#false
//!     infested hotkey="ctrl-i"
//!     agetext active=#true hotkey="ctrl-shift-a" "alt-a"
//!     signtext hotkey="ctrl-s" exclusive=#true
//! }
//! ```
//!
//! Each `providers` entry is named by a provider key. `active` sets the
//! provider's toggle; `hotkey` plus any positional strings replace its key
//! bindings (an empty string unbinds it); `exclusive` keeps a matching press
//! from reaching other bindings. Entries that match no provider are
//! reported as [`ConfigWarning`]s rather than failing the load.
//!
//! The default location is `blockinfo/config.kdl` under the platform config
//! directory (`$XDG_CONFIG_HOME` on Linux).

pub mod error;
pub mod providers;

use std::path::{Path, PathBuf};

use blockinfo_registry::{OverlaySettings, ProviderRegistry};
use kdl::{KdlDocument, KdlNode};
use tracing::{debug, warn};

pub use error::{ConfigError, ConfigWarning, Result};
pub use providers::ProviderConfig;


const APP_DIR: &str = "blockinfo";
const CONFIG_FILE: &str = "config.kdl";

/// Parsed configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
	/// Master switch override.
	pub enabled: Option<bool>,
	/// Per-provider overrides, in file order, at most one per key.
	pub providers: Vec<ProviderConfig>,
	/// Non-fatal warnings encountered during parsing.
	pub warnings: Vec<ConfigWarning>,
}

impl Config {
	/// Parse a KDL string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		let doc: KdlDocument = input.parse()?;
		let mut config = Config::default();

		for node in doc.nodes() {
			match node.name().value() {
				"overlay" => config.parse_overlay(node)?,
				"providers" => {
					for child in children(node) {
						let (parsed, warnings) = ProviderConfig::parse(child)?;
						config.warnings.extend(warnings);
						config.upsert(parsed);
					}
				}
				name => config.warnings.push(ConfigWarning::UnknownNode {
					section: None,
					name: name.to_string(),
				}),
			}
		}

		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		let config = Self::parse(&content)?;
		debug!(path = %path.display(), providers = config.providers.len(), "loaded overlay config");
		Ok(config)
	}

	/// Merge another config into this one. Values from `other` win.
	pub fn merge(&mut self, other: Config) {
		if other.enabled.is_some() {
			self.enabled = other.enabled;
		}
		for provider in other.providers {
			self.upsert(provider);
		}
		self.warnings.extend(other.warnings);
	}

	/// Pushes the configured values into live settings.
	///
	/// Returns warnings for provider keys the registry does not know; those
	/// entries are skipped.
	pub fn apply(&self, registry: &ProviderRegistry, overlay: &OverlaySettings) -> Vec<ConfigWarning> {
		if let Some(enabled) = self.enabled {
			overlay.enabled.set(enabled);
		}

		let mut warnings = Vec::new();
		for provider in &self.providers {
			let Some(entry) = registry.get(&provider.key) else {
				warn!(key = %provider.key, "config names an unknown annotation provider");
				warnings.push(ConfigWarning::UnknownProvider {
					key: provider.key.clone(),
				});
				continue;
			};

			if let Some(active) = provider.active {
				entry.active().set(active);
			}
			if provider.hotkeys.is_some() || provider.exclusive.is_some() {
				let mut settings = entry.hotkey().get();
				if let Some(keys) = &provider.hotkeys {
					settings.keys = keys.clone();
				}
				if let Some(exclusive) = provider.exclusive {
					settings.exclusive = exclusive;
				}
				entry.hotkey().set(settings);
			}
			debug!(key = entry.key(), active = entry.is_active(), "applied provider config");
		}
		warnings
	}

	fn parse_overlay(&mut self, node: &KdlNode) -> Result<()> {
		for child in children(node) {
			match child.name().value() {
				"enabled" => {
					let value = child.get(0).and_then(|v| v.as_bool()).ok_or_else(|| ConfigError::InvalidValue {
						field: "overlay.enabled".to_string(),
						expected: "a boolean",
					})?;
					self.enabled = Some(value);
				}
				name => self.warnings.push(ConfigWarning::UnknownNode {
					section: Some("overlay"),
					name: name.to_string(),
				}),
			}
		}
		Ok(())
	}

	/// Adds `provider`, folding it into an earlier entry with the same key.
	fn upsert(&mut self, provider: ProviderConfig) {
		match self.providers.iter_mut().find(|p| p.key == provider.key) {
			Some(existing) => existing.merge(provider),
			None => self.providers.push(provider),
		}
	}
}

/// The default config file location, if a config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

fn children(node: &KdlNode) -> impl Iterator<Item = &KdlNode> {
	node.children().into_iter().flat_map(|doc| doc.nodes())
}
