//! Hotkey modifier set.

/// Modifiers held together with a hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	pub ctrl: bool,
	pub alt: bool,
	pub shift: bool,
}

impl Modifiers {
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
	};

	pub const CTRL: Self = Self {
		ctrl: true,
		alt: false,
		shift: false,
	};

	/// Returns a copy with Ctrl added.
	pub fn ctrl(self) -> Self {
		Self { ctrl: true, ..self }
	}

	/// Returns a copy with Alt added.
	pub fn alt(self) -> Self {
		Self { alt: true, ..self }
	}

	/// Returns a copy with Shift added.
	pub fn shift(self) -> Self {
		Self { shift: true, ..self }
	}

	pub fn is_empty(self) -> bool {
		!self.ctrl && !self.alt && !self.shift
	}

	/// Adds the modifier spelled `name`, returning `None` for unknown names.
	///
	/// `cmd` and `control` are accepted as spellings of Ctrl.
	pub(crate) fn with_name(self, name: &str) -> Option<Self> {
		match name.to_ascii_lowercase().as_str() {
			"ctrl" | "control" | "cmd" => Some(self.ctrl()),
			"alt" => Some(self.alt()),
			"shift" => Some(self.shift()),
			_ => None,
		}
	}

	/// Modifier names in canonical order.
	pub(crate) fn names(self) -> impl Iterator<Item = &'static str> {
		[(self.ctrl, "ctrl"), (self.alt, "alt"), (self.shift, "shift")]
			.into_iter()
			.filter_map(|(held, name)| held.then_some(name))
	}
}
