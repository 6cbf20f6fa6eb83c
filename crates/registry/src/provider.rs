//! The annotation provider contract.

use core::fmt;

use blockinfo_primitives::{BlockPos, Property, PropertyValue};

use crate::error::ProviderError;
use crate::specificity::Specificity;
use crate::target::{BlockState, SignText, TargetBlock};

mod simple;
#[cfg(test)]
mod tests;

pub use simple::{Generator, Predicate, SimpleProvider};

/// Resolved view of a target, valid for one frame.
pub struct AnnotationContext<'a> {
	pub pos: BlockPos,
	pub state: &'a dyn BlockState,
	target: &'a dyn TargetBlock,
}

impl<'a> AnnotationContext<'a> {
	/// Resolves `target`, or `None` if its block state is unavailable.
	pub fn resolve(target: &'a dyn TargetBlock) -> Option<Self> {
		let state = target.state()?;
		Some(Self {
			pos: target.pos(),
			state,
			target,
		})
	}

	pub fn property(&self, property: &Property) -> Option<PropertyValue> {
		self.state.property(property)
	}

	pub fn has(&self, property: &Property) -> bool {
		self.property(property).is_some()
	}

	pub fn has_sign_text(&self) -> bool {
		self.target.has_sign_text()
	}

	pub fn sign_text(&self) -> Option<SignText> {
		self.target.sign_text()
	}
}

/// Something that can annotate a block.
///
/// Both methods run every frame for every visible target and must stay cheap
/// and side-effect free.
pub trait AnnotationProvider: Send + Sync {
	/// Whether this provider has anything to say about the block.
	fn applies(&self, ctx: &AnnotationContext<'_>) -> bool;

	/// Lines to display. Only called when [`applies`](Self::applies) returned
	/// true; `None` means nothing to show after all. Never returns blank lines.
	fn lines(&self, ctx: &AnnotationContext<'_>) -> Option<Vec<String>>;
}

/// A provider plus the metadata the registry needs to place it.
pub struct ProviderDef {
	/// Stable identity used by configuration.
	pub key: &'static str,
	pub specificity: Specificity,
	/// Initial value of the provider's active flag.
	pub default_active: bool,
	pub provider: Box<dyn AnnotationProvider>,
}

impl ProviderDef {
	pub fn new(specificity: Specificity, key: &'static str, provider: impl AnnotationProvider + 'static) -> Self {
		Self {
			key,
			specificity,
			default_active: true,
			provider: Box::new(provider),
		}
	}

	/// A property formatter: shows `format` with `%s` replaced by the value of
	/// the first of `properties` the block has.
	pub fn property(
		specificity: Specificity,
		key: &'static str,
		format: &'static str,
		properties: &[Property],
	) -> Result<Self, ProviderError> {
		let provider = SimpleProvider::property(key, format, properties)?;
		Ok(Self::new(specificity, key, provider))
	}

	/// A custom provider from a predicate and a single-line generator.
	pub fn custom(specificity: Specificity, key: &'static str, predicate: Predicate, generator: Generator) -> Self {
		Self::new(specificity, key, SimpleProvider::custom(predicate, generator))
	}

	/// Starts the provider switched off.
	pub fn inactive(mut self) -> Self {
		self.default_active = false;
		self
	}
}

impl fmt::Debug for ProviderDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProviderDef")
			.field("key", &self.key)
			.field("specificity", &self.specificity)
			.field("default_active", &self.default_active)
			.finish()
	}
}
