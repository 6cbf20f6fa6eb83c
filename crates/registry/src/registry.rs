//! Provider registration and the finalized, ordered registry.
//!
//! Setup goes through [`RegistryBuilder`]: providers are appended in a fixed
//! order, then [`RegistryBuilder::finalize_setup`] sorts them once and hands
//! back the read-only [`ProviderRegistry`]. After that only the per-provider
//! active flags and hotkey values change.

use core::fmt;

use blockinfo_primitives::KeyCombo;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::error::RegistryError;
use crate::provider::{AnnotationContext, AnnotationProvider, ProviderDef};
use crate::settings::{BoolSetting, HotkeySetting, HotkeySettings};
use crate::specificity::Specificity;

#[cfg(test)]
mod tests;

/// A registered provider with its live settings.
pub struct ProviderEntry {
	key: &'static str,
	specificity: Specificity,
	/// Position in registration order; the sort tie-breaker.
	index: usize,
	active: BoolSetting,
	hotkey: HotkeySetting,
	provider: Box<dyn AnnotationProvider>,
}

impl ProviderEntry {
	fn new(def: ProviderDef, index: usize) -> Self {
		Self {
			key: def.key,
			specificity: def.specificity,
			index,
			active: BoolSetting::new(def.key, def.default_active),
			hotkey: HotkeySetting::new(def.key, HotkeySettings::default()),
			provider: def.provider,
		}
	}

	pub fn key(&self) -> &'static str {
		self.key
	}

	pub fn specificity(&self) -> Specificity {
		self.specificity
	}

	pub fn registration_index(&self) -> usize {
		self.index
	}

	pub fn is_active(&self) -> bool {
		self.active.get()
	}

	pub fn active(&self) -> &BoolSetting {
		&self.active
	}

	pub fn hotkey(&self) -> &HotkeySetting {
		&self.hotkey
	}

	fn sort_key(&self) -> (u8, usize) {
		(self.specificity.rank(), self.index)
	}
}

impl AnnotationProvider for ProviderEntry {
	fn applies(&self, ctx: &AnnotationContext<'_>) -> bool {
		self.provider.applies(ctx)
	}

	fn lines(&self, ctx: &AnnotationContext<'_>) -> Option<Vec<String>> {
		self.provider.lines(ctx)
	}
}

impl fmt::Debug for ProviderEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProviderEntry")
			.field("key", &self.key)
			.field("specificity", &self.specificity)
			.field("index", &self.index)
			.field("active", &self.is_active())
			.finish()
	}
}

/// Setup-phase registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
	entries: Vec<ProviderEntry>,
}

impl RegistryBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a provider, capturing its registration index.
	///
	/// Keys identify providers in configuration, so a repeated or empty key is
	/// rejected instead of shadowing an earlier provider.
	pub fn register(&mut self, def: ProviderDef) -> Result<(), RegistryError> {
		if def.key.is_empty() {
			return Err(RegistryError::EmptyKey);
		}
		if self.entries.iter().any(|e| e.key == def.key) {
			return Err(RegistryError::DuplicateKey { key: def.key });
		}

		let index = self.entries.len();
		debug!(key = def.key, specificity = %def.specificity, index, "registered annotation provider");
		self.entries.push(ProviderEntry::new(def, index));
		Ok(())
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Ends setup: sorts specific providers before generic ones, keeping
	/// registration order within a class.
	pub fn finalize_setup(mut self) -> ProviderRegistry {
		self.entries.sort_by_key(ProviderEntry::sort_key);

		let by_key = self.entries.iter().enumerate().map(|(pos, e)| (e.key, pos)).collect();
		let registry = ProviderRegistry {
			entries: self.entries,
			by_key,
		};
		debug!(
			count = registry.len(),
			order = ?registry.keys().collect::<Vec<_>>(),
			"annotation providers finalized"
		);
		registry
	}
}

/// The finalized provider set, in render order.
#[derive(Debug)]
pub struct ProviderRegistry {
	entries: Vec<ProviderEntry>,
	by_key: FxHashMap<&'static str, usize>,
}

impl ProviderRegistry {
	/// Builds the registry holding every built-in provider.
	pub fn with_builtins() -> Result<Self, RegistryError> {
		let mut builder = RegistryBuilder::new();
		crate::builtins::register_builtins(&mut builder)?;
		Ok(builder.finalize_setup())
	}

	/// Providers in render order.
	pub fn all_providers(&self) -> &[ProviderEntry] {
		&self.entries
	}

	pub fn iter(&self) -> impl Iterator<Item = &ProviderEntry> {
		self.entries.iter()
	}

	pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.entries.iter().map(ProviderEntry::key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn get(&self, key: &str) -> Option<&ProviderEntry> {
		self.by_key.get(key).map(|&pos| &self.entries[pos])
	}

	/// Sets a provider's active flag. Returns false for an unknown key.
	pub fn set_active(&self, key: &str, active: bool) -> bool {
		let Some(entry) = self.get(key) else {
			return false;
		};
		entry.active.set(active);
		true
	}

	/// Whether the entries satisfy the render-order invariant.
	pub fn is_sorted(&self) -> bool {
		self.entries.is_sorted_by_key(ProviderEntry::sort_key)
	}

	/// Current hotkey value of every provider.
	pub fn hotkeys(&self) -> Vec<HotkeySettings> {
		self.entries.iter().map(|e| e.hotkey.get()).collect()
	}

	/// Hotkey setting objects, for wiring into an input-binding system.
	pub fn hotkey_settings(&self) -> Vec<&HotkeySetting> {
		self.entries.iter().map(|e| &e.hotkey).collect()
	}

	/// Active-flag setting objects, for wiring into a config UI.
	pub fn active_settings(&self) -> Vec<&BoolSetting> {
		self.entries.iter().map(|e| &e.active).collect()
	}

	/// Whether a provider bound to `combo` asked for the press to stop there.
	pub fn hotkey_is_exclusive(&self, combo: &KeyCombo) -> bool {
		self.entries.iter().any(|e| e.hotkey.is_exclusive_for(combo))
	}

	/// Flips every provider bound to `combo` and returns their keys.
	pub fn toggle_for_hotkey(&self, combo: &KeyCombo) -> Vec<&'static str> {
		let mut toggled = Vec::new();
		for entry in self.entries.iter().filter(|e| e.hotkey.matches(combo)) {
			let active = entry.active.toggle();
			debug!(key = entry.key, active, hotkey = %combo, "annotation provider toggled");
			toggled.push(entry.key);
		}
		if toggled.is_empty() {
			trace!(hotkey = %combo, "no annotation provider bound");
		}
		toggled
	}
}
