//! Block-state properties the built-in annotations know how to read.
//!
//! Names and ranges follow the vanilla block-state definitions. Several
//! descriptors share a name (`age`, `level`, `distance`, `facing`) and only
//! differ by domain.

use crate::property::{Direction, Property};

pub const FACING: Property = Property::direction("facing", Direction::ALL);
pub const HOPPER_FACING: Property = Property::direction("facing", Direction::HOPPER);
pub const HORIZONTAL_FACING: Property = Property::direction("facing", Direction::HORIZONTAL);

pub const LEVEL_3: Property = Property::int("level", 1, 3);
pub const LEVEL_8: Property = Property::int("level", 0, 8);
pub const LEVEL_15: Property = Property::int("level", 0, 15);

pub const WATERLOGGED: Property = Property::bool("waterlogged");
pub const OPEN: Property = Property::bool("open");
pub const PERSISTENT: Property = Property::bool("persistent");

pub const DISTANCE_0_7: Property = Property::int("distance", 0, 7);
pub const DISTANCE_1_7: Property = Property::int("distance", 1, 7);

pub const LAYERS: Property = Property::int("layers", 1, 8);
pub const TILT: Property = Property::enumeration("tilt", &["none", "unstable", "partial", "full"]);
pub const CHARGES: Property = Property::int("charges", 0, 4);
pub const BITES: Property = Property::int("bites", 0, 6);

pub const AGE_1: Property = Property::int("age", 0, 1);
pub const AGE_2: Property = Property::int("age", 0, 2);
pub const AGE_3: Property = Property::int("age", 0, 3);
pub const AGE_5: Property = Property::int("age", 0, 5);
pub const AGE_7: Property = Property::int("age", 0, 7);
pub const AGE_15: Property = Property::int("age", 0, 15);
pub const AGE_25: Property = Property::int("age", 0, 25);

pub const HONEY_LEVEL: Property = Property::int("honey_level", 0, 5);

pub const POWER: Property = Property::int("power", 0, 15);
pub const POWERED: Property = Property::bool("powered");
pub const DELAY: Property = Property::int("delay", 1, 4);
pub const COMPARATOR_MODE: Property = Property::enumeration("mode", &["compare", "subtract"]);

pub const NOTE: Property = Property::int("note", 0, 24);
pub const INSTRUMENT: Property = Property::enumeration(
	"instrument",
	&[
		"harp",
		"basedrum",
		"snare",
		"hat",
		"bass",
		"flute",
		"bell",
		"guitar",
		"chime",
		"xylophone",
		"iron_xylophone",
		"cow_bell",
		"didgeridoo",
		"bit",
		"banjo",
		"pling",
	],
);

/// Every descriptor above, narrowest domain first within a shared name.
pub const ALL: &[Property] = &[
	HORIZONTAL_FACING,
	HOPPER_FACING,
	FACING,
	LEVEL_3,
	LEVEL_8,
	LEVEL_15,
	WATERLOGGED,
	OPEN,
	PERSISTENT,
	DISTANCE_1_7,
	DISTANCE_0_7,
	LAYERS,
	TILT,
	CHARGES,
	BITES,
	AGE_1,
	AGE_2,
	AGE_3,
	AGE_5,
	AGE_7,
	AGE_15,
	AGE_25,
	HONEY_LEVEL,
	POWER,
	POWERED,
	DELAY,
	COMPARATOR_MODE,
	NOTE,
	INSTRUMENT,
];

/// Finds the narrowest known descriptor named `name` whose domain accepts `value`.
pub fn resolve(name: &str, value: &str) -> Option<(Property, crate::PropertyValue)> {
	ALL.iter()
		.filter(|p| p.name == name)
		.find_map(|p| p.parse_value(value).map(|v| (*p, v)))
}
