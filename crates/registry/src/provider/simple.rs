//! Providers assembled from data instead of dedicated types.

use blockinfo_primitives::{Property, PropertyValue};

use super::{AnnotationContext, AnnotationProvider};
use crate::error::ProviderError;

const PLACEHOLDER: &str = "%s";

pub type Predicate = fn(&AnnotationContext<'_>) -> bool;
pub type Generator = fn(&AnnotationContext<'_>) -> String;

#[derive(Debug, Clone)]
pub enum SimpleProvider {
	/// Formats the first present property out of an ordered candidate list.
	Property {
		format: &'static str,
		properties: Vec<Property>,
	},
	/// Arbitrary predicate and line generator.
	Custom { predicate: Predicate, generator: Generator },
}

impl SimpleProvider {
	/// Validates and builds a property formatter. `key` only labels errors.
	pub fn property(key: &'static str, format: &'static str, properties: &[Property]) -> Result<Self, ProviderError> {
		if properties.is_empty() {
			return Err(ProviderError::NoProperties { key });
		}
		if !format.contains(PLACEHOLDER) {
			return Err(ProviderError::MissingPlaceholder { key, format });
		}
		Ok(Self::Property {
			format,
			properties: properties.to_vec(),
		})
	}

	pub fn custom(predicate: Predicate, generator: Generator) -> Self {
		Self::Custom { predicate, generator }
	}

	/// The first candidate property the block has, with its value.
	fn first_present(properties: &[Property], ctx: &AnnotationContext<'_>) -> Option<PropertyValue> {
		properties.iter().find_map(|p| ctx.property(p))
	}
}

impl AnnotationProvider for SimpleProvider {
	fn applies(&self, ctx: &AnnotationContext<'_>) -> bool {
		match self {
			Self::Property { properties, .. } => properties.iter().any(|p| ctx.has(p)),
			Self::Custom { predicate, .. } => predicate(ctx),
		}
	}

	fn lines(&self, ctx: &AnnotationContext<'_>) -> Option<Vec<String>> {
		let line = match self {
			Self::Property { format, properties } => {
				let value = Self::first_present(properties, ctx)?;
				format.replacen(PLACEHOLDER, &value.to_string(), 1)
			}
			Self::Custom { generator, .. } => generator(ctx),
		};
		(!line.trim().is_empty()).then(|| vec![line])
	}
}
