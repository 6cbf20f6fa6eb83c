//! Render ordering classes.

use core::fmt;

/// How narrowly a provider applies.
///
/// Rendering goes from the most specific class to the most generic one, so
/// an annotation about this exact block sits above the block-wide properties,
/// which in turn sit above the coordinates every block gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specificity {
	/// One narrow condition, e.g. "this block is infested".
	Specific,
	/// A category of blocks sharing a property set.
	Block,
	/// Every block.
	All,
}

impl Specificity {
	/// Sort rank; lower ranks render first.
	pub const fn rank(self) -> u8 {
		match self {
			Self::Specific => 0,
			Self::Block => 1,
			Self::All => 2,
		}
	}
}

impl fmt::Display for Specificity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Specific => "specific",
			Self::Block => "block",
			Self::All => "all",
		})
	}
}
