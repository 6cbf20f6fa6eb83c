//! Hotkey combos bound to annotation toggles.
//!
//! The text form is a `-` separated list of modifiers followed by one key:
//!
//! ```text
//! combo     = (modifier "-")* key
//! modifier  = "ctrl" | "control" | "cmd" | "alt" | "shift"
//! key       = fn-key | named-key | char
//! fn-key    = "f" digit digit?
//! named-key = "space" | "tab" | "enter" | "esc" | ...
//! ```

use core::fmt;
use core::str::FromStr;

mod modifiers;

pub use modifiers::Modifiers;

const KEY_SEP: char = '-';

/// Named keys and their spellings. The first spelling is canonical.
const NAMED_KEYS: &[(&[&str], KeyCode)] = &[
	(&["space"], KeyCode::Space),
	(&["tab"], KeyCode::Tab),
	(&["enter", "ret", "return"], KeyCode::Enter),
	(&["esc", "escape"], KeyCode::Esc),
	(&["backspace", "bs"], KeyCode::Backspace),
	(&["del", "delete"], KeyCode::Delete),
	(&["insert", "ins"], KeyCode::Insert),
	(&["home"], KeyCode::Home),
	(&["end"], KeyCode::End),
	(&["pageup", "pgup"], KeyCode::PageUp),
	(&["pagedown", "pgdn"], KeyCode::PageDown),
	(&["up"], KeyCode::Up),
	(&["down"], KeyCode::Down),
	(&["left"], KeyCode::Left),
	(&["right"], KeyCode::Right),
	(&["minus"], KeyCode::Char('-')),
];

/// The non-modifier part of a hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	/// A printable character, stored lower-cased.
	Char(char),
	/// Function key `F1`..=`F35`.
	F(u8),
	Space,
	Tab,
	Enter,
	Esc,
	Backspace,
	Delete,
	Insert,
	Home,
	End,
	PageUp,
	PageDown,
	Up,
	Down,
	Left,
	Right,
}

impl fmt::Display for KeyCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			KeyCode::F(n) => write!(f, "f{n}"),
			KeyCode::Char(c) if *c != KEY_SEP => write!(f, "{c}"),
			code => {
				let name = NAMED_KEYS
					.iter()
					.find(|(_, k)| k == code)
					.map(|(names, _)| names[0])
					.unwrap_or("?");
				f.write_str(name)
			}
		}
	}
}

/// A key plus the modifiers that must be held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
	pub modifiers: Modifiers,
	pub code: KeyCode,
}

impl KeyCombo {
	pub const fn new(modifiers: Modifiers, code: KeyCode) -> Self {
		Self { modifiers, code }
	}

	/// A bare character key.
	pub fn char(c: char) -> Self {
		Self::new(Modifiers::NONE, KeyCode::Char(c.to_ascii_lowercase()))
	}

	/// Parses the text form, e.g. `ctrl-alt-f1` or `shift-a`.
	pub fn parse(s: &str) -> Result<Self, KeyParseError> {
		if s.is_empty() {
			return Err(KeyParseError::new("expected a key, found end of input", 0));
		}

		let mut modifiers = Modifiers::NONE;
		let mut rest = s;
		let mut position = 0;

		// Everything before the last separator must be a modifier; a trailing
		// separator (`ctrl--`) means the key itself is `-`.
		while let Some(idx) = rest.find(KEY_SEP)
			&& idx > 0
			&& idx + 1 < rest.len()
		{
			let name = &rest[..idx];
			modifiers = modifiers
				.with_name(name)
				.ok_or_else(|| KeyParseError::new(format!("unknown modifier '{name}'"), position))?;
			rest = &rest[idx + 1..];
			position += idx + 1;
		}

		let code = parse_code(rest).map_err(|message| KeyParseError::new(message, position))?;
		Ok(Self { modifiers, code })
	}
}

fn parse_code(s: &str) -> Result<KeyCode, String> {
	let lower = s.to_ascii_lowercase();

	if let Some(digits) = lower.strip_prefix('f')
		&& !digits.is_empty()
		&& digits.bytes().all(|b| b.is_ascii_digit())
	{
		return match digits.parse::<u8>() {
			Ok(n) if (1..=35).contains(&n) => Ok(KeyCode::F(n)),
			_ => Err("invalid function key number (must be 1-35)".to_string()),
		};
	}

	if let Some((_, code)) = NAMED_KEYS.iter().find(|(names, _)| names.contains(&lower.as_str())) {
		return Ok(*code);
	}

	let mut chars = lower.chars();
	match (chars.next(), chars.next()) {
		(Some(c), None) if !c.is_whitespace() && !c.is_control() => Ok(KeyCode::Char(c)),
		(None, _) => Err("expected a key, found end of input".to_string()),
		_ => Err(format!("unknown key '{s}'")),
	}
}

impl FromStr for KeyCombo {
	type Err = KeyParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for KeyCombo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for name in self.modifiers.names() {
			write!(f, "{name}{KEY_SEP}")?;
		}
		write!(f, "{}", self.code)
	}
}

/// A hotkey string that does not follow the combo grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hotkey at position {position}: {message}")]
pub struct KeyParseError {
	pub message: String,
	/// Byte offset in the input where the error occurred.
	pub position: usize,
}

impl KeyParseError {
	fn new(message: impl Into<String>, position: usize) -> Self {
		Self {
			message: message.into(),
			position,
		}
	}
}
