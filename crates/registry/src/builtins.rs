//! Built-in annotation providers.
//!
//! Registration order matters only within a specificity class; the registry
//! sort moves every class into place.

use blockinfo_primitives::Property;
use blockinfo_primitives::properties::*;

use crate::error::RegistryError;
use crate::provider::ProviderDef;
use crate::registry::RegistryBuilder;
use crate::specificity::Specificity::{All, Block, Specific};

mod noteblock;
mod redstone;
mod sign;

pub use noteblock::NoteblockInfo;
pub use redstone::RedstoneInfo;
pub use sign::SignTextInfo;

/// Registers the full built-in provider set.
pub fn register_builtins(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
	builder.register(ProviderDef::new(Block, RedstoneInfo::KEY, RedstoneInfo))?;
	builder.register(ProviderDef::new(Specific, NoteblockInfo::KEY, NoteblockInfo))?;
	builder.register(ProviderDef::new(Specific, SignTextInfo::KEY, SignTextInfo))?;

	builder.register(ProviderDef::custom(All, "coordinatestext", |_| true, |ctx| {
		format!("X: {}\nY: {}\nZ: {}", ctx.pos.x, ctx.pos.y, ctx.pos.z)
	}))?;

	let formatters: &[(&'static str, &'static str, &[Property])] = &[
		("facingtext", "Facing: %s", &[FACING, HOPPER_FACING, HORIZONTAL_FACING]),
		("blocklevel", "Level: %s", &[LEVEL_3, LEVEL_8]),
		("waterloggedtext", "Waterlogged: %s", &[WATERLOGGED]),
		("opentext", "Open: %s", &[OPEN]),
		("persistent", "Persistent: %s", &[PERSISTENT]),
		("distancetext", "Distance: %s", &[DISTANCE_0_7, DISTANCE_1_7]),
		("layerstext", "Layers: %s", &[LAYERS]),
		("dripleaftilttext", "Tilt: %s", &[TILT]),
		("chargestext", "Charges: %s", &[CHARGES]),
		("bitestext", "Bites: %s", &[BITES]),
		("agetext", "Age: %s", &[AGE_1, AGE_2, AGE_3, AGE_5, AGE_7, AGE_15, AGE_25]),
		("beetext", "Honey Level: %s", &[HONEY_LEVEL]),
		("leveltext", "Level: %s", &[LEVEL_15]),
	];
	for (key, format, properties) in formatters {
		builder.register(ProviderDef::property(Block, *key, *format, properties)?)?;
	}

	builder.register(ProviderDef::custom(Specific, "infested", |ctx| ctx.state.is_infested(), |_| {
		"Infested".to_string()
	}))?;

	Ok(())
}
