//! Core world types shared by the annotation pipeline: block positions,
//! block-state property descriptors and hotkey combos.

/// Hotkey combos and their text form.
pub mod key;
/// Well-known block-state property descriptors.
pub mod properties;
/// Block positions and world-space anchors.
pub mod pos;
/// Block-state property descriptors and values.
pub mod property;

pub use key::{KeyCode, KeyCombo, KeyParseError, Modifiers};
pub use pos::{BlockPos, Vec3};
pub use property::{Direction, Property, PropertyDomain, PropertyValue};
