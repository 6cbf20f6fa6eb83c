//! The targeted block, as exposed by the world layer.

use blockinfo_primitives::{BlockPos, Property, PropertyValue};

/// Block-state queries.
pub trait BlockState {
	/// Namespaced block id, e.g. `minecraft:infested_stone`.
	fn block_id(&self) -> &str;

	/// Current value of `property`, or `None` if this block does not have it.
	fn property(&self, property: &Property) -> Option<PropertyValue>;

	/// Whether this is one of the silverfish-infested stone variants.
	fn is_infested(&self) -> bool {
		let id = self.block_id();
		let path = id.split_once(':').map_or(id, |(_, path)| path);
		path.starts_with("infested_")
	}
}

/// Text on both faces of a sign.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignText {
	pub front: Vec<String>,
	pub back: Vec<String>,
}

impl SignText {
	pub fn new(front: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self {
			front: front.into_iter().map(Into::into).collect(),
			back: Vec::new(),
		}
	}

	pub fn with_back(mut self, back: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.back = back.into_iter().map(Into::into).collect();
		self
	}
}

/// The block currently highlighted by the outline renderer.
pub trait TargetBlock {
	fn pos(&self) -> BlockPos;

	/// Resolves the block state. `None` when the world cannot provide it (e.g. an
	/// unloaded chunk), in which case nothing is drawn for this target.
	fn state(&self) -> Option<&dyn BlockState>;

	/// Sign text, for sign blocks whose block entity is loaded.
	fn sign_text(&self) -> Option<SignText> {
		None
	}

	/// Whether [`sign_text`](Self::sign_text) would return text, without copying it.
	fn has_sign_text(&self) -> bool {
		self.sign_text().is_some()
	}
}

/// An in-memory block, for tools and tests that have no live world.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlock {
	pub pos: BlockPos,
	pub block_id: String,
	properties: Vec<(Property, PropertyValue)>,
	sign: Option<SignText>,
	unresolved: bool,
}

impl MemoryBlock {
	pub fn new(block_id: impl Into<String>, pos: BlockPos) -> Self {
		Self {
			pos,
			block_id: block_id.into(),
			..Self::default()
		}
	}

	/// Sets `property`, replacing any earlier value for the same descriptor.
	pub fn with(mut self, property: Property, value: impl Into<PropertyValue>) -> Self {
		self.set(property, value.into());
		self
	}

	pub fn set(&mut self, property: Property, value: PropertyValue) {
		match self.properties.iter_mut().find(|(p, _)| *p == property) {
			Some((_, slot)) => *slot = value,
			None => self.properties.push((property, value)),
		}
	}

	pub fn with_sign(mut self, sign: SignText) -> Self {
		self.sign = Some(sign);
		self
	}

	/// Makes [`TargetBlock::state`] fail, as if the chunk were not loaded.
	pub fn unresolved(mut self) -> Self {
		self.unresolved = true;
		self
	}
}

impl BlockState for MemoryBlock {
	fn block_id(&self) -> &str {
		&self.block_id
	}

	fn property(&self, property: &Property) -> Option<PropertyValue> {
		self.properties.iter().find(|(p, _)| p == property).map(|(_, v)| *v)
	}
}

impl TargetBlock for MemoryBlock {
	fn pos(&self) -> BlockPos {
		self.pos
	}

	fn state(&self) -> Option<&dyn BlockState> {
		if self.unresolved { None } else { Some(self) }
	}

	fn sign_text(&self) -> Option<SignText> {
		self.sign.clone()
	}

	fn has_sign_text(&self) -> bool {
		self.sign.is_some()
	}
}
