//! Settings objects handed to the configuration and input layers.
//!
//! Both kinds are cheap handles over shared state: cloning a setting yields
//! another handle to the same value, so a key handler on another thread can
//! flip a flag that the render loop observes on its next read.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use blockinfo_primitives::KeyCombo;
use parking_lot::RwLock;

/// A named boolean toggle.
#[derive(Debug, Clone)]
pub struct BoolSetting {
	key: &'static str,
	default: bool,
	value: Arc<AtomicBool>,
}

impl BoolSetting {
	pub fn new(key: &'static str, default: bool) -> Self {
		Self {
			key,
			default,
			value: Arc::new(AtomicBool::new(default)),
		}
	}

	pub fn key(&self) -> &'static str {
		self.key
	}

	pub fn default_value(&self) -> bool {
		self.default
	}

	/// Current value. Relaxed: a flip only has to show up by the next frame.
	pub fn get(&self) -> bool {
		self.value.load(Ordering::Relaxed)
	}

	pub fn set(&self, value: bool) {
		self.value.store(value, Ordering::Relaxed);
	}

	/// Flips the value and returns the new one.
	pub fn toggle(&self) -> bool {
		!self.value.fetch_xor(true, Ordering::Relaxed)
	}
}

/// Keys bound to a toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotkeySettings {
	/// Any one of these combos triggers the binding. Empty means unbound.
	pub keys: Vec<KeyCombo>,
	/// When set, the input layer should not pass a matching press on to other bindings.
	pub exclusive: bool,
}

impl HotkeySettings {
	pub fn new(keys: impl IntoIterator<Item = KeyCombo>) -> Self {
		Self {
			keys: keys.into_iter().collect(),
			exclusive: false,
		}
	}

	pub fn matches(&self, combo: &KeyCombo) -> bool {
		self.keys.contains(combo)
	}
}

/// A named, shared [`HotkeySettings`] value.
#[derive(Debug, Clone)]
pub struct HotkeySetting {
	key: &'static str,
	value: Arc<RwLock<HotkeySettings>>,
}

impl HotkeySetting {
	pub fn new(key: &'static str, value: HotkeySettings) -> Self {
		Self {
			key,
			value: Arc::new(RwLock::new(value)),
		}
	}

	pub fn key(&self) -> &'static str {
		self.key
	}

	pub fn get(&self) -> HotkeySettings {
		self.value.read().clone()
	}

	pub fn set(&self, value: HotkeySettings) {
		*self.value.write() = value;
	}

	pub fn matches(&self, combo: &KeyCombo) -> bool {
		self.value.read().matches(combo)
	}

	/// Bound to `combo` with [`HotkeySettings::exclusive`] set.
	pub fn is_exclusive_for(&self, combo: &KeyCombo) -> bool {
		let settings = self.value.read();
		settings.exclusive && settings.matches(combo)
	}
}

/// Overlay-wide settings.
#[derive(Debug, Clone)]
pub struct OverlaySettings {
	/// Master switch; when off nothing is drawn regardless of provider state.
	pub enabled: BoolSetting,
}

impl OverlaySettings {
	pub const ENABLED_KEY: &'static str = "blockinfo2d";
}

impl Default for OverlaySettings {
	fn default() -> Self {
		Self {
			enabled: BoolSetting::new(Self::ENABLED_KEY, true),
		}
	}
}
