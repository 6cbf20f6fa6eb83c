use core::fmt;
use core::str::FromStr;


/// Cardinal and vertical facing of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	Down,
	Up,
	North,
	South,
	West,
	East,
}

impl Direction {
	pub const ALL: &'static [Direction] = &[
		Direction::Down,
		Direction::Up,
		Direction::North,
		Direction::South,
		Direction::West,
		Direction::East,
	];

	pub const HORIZONTAL: &'static [Direction] = &[Direction::North, Direction::South, Direction::West, Direction::East];

	/// Hoppers can point anywhere except up.
	pub const HOPPER: &'static [Direction] = &[
		Direction::Down,
		Direction::North,
		Direction::South,
		Direction::West,
		Direction::East,
	];

	pub const fn as_str(self) -> &'static str {
		match self {
			Direction::Down => "down",
			Direction::Up => "up",
			Direction::North => "north",
			Direction::South => "south",
			Direction::West => "west",
			Direction::East => "east",
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Direction {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Direction::ALL.iter().copied().find(|d| d.as_str().eq_ignore_ascii_case(s)).ok_or(())
	}
}

/// Value domain of a block-state property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyDomain {
	Bool,
	/// Inclusive integer range.
	Int { min: i32, max: i32 },
	Direction(&'static [Direction]),
	Enum(&'static [&'static str]),
}

/// Descriptor of a block-state property.
///
/// Two descriptors may share a name while differing in domain (`age` over
/// `0..=1` versus `0..=25`); they are distinct properties and a block exposes
/// at most one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Property {
	pub name: &'static str,
	pub domain: PropertyDomain,
}

impl Property {
	pub const fn bool(name: &'static str) -> Self {
		Self {
			name,
			domain: PropertyDomain::Bool,
		}
	}

	pub const fn int(name: &'static str, min: i32, max: i32) -> Self {
		Self {
			name,
			domain: PropertyDomain::Int { min, max },
		}
	}

	pub const fn direction(name: &'static str, values: &'static [Direction]) -> Self {
		Self {
			name,
			domain: PropertyDomain::Direction(values),
		}
	}

	pub const fn enumeration(name: &'static str, values: &'static [&'static str]) -> Self {
		Self {
			name,
			domain: PropertyDomain::Enum(values),
		}
	}

	/// Returns true if `value` lies inside this property's domain.
	pub fn accepts(&self, value: &PropertyValue) -> bool {
		match (self.domain, value) {
			(PropertyDomain::Bool, PropertyValue::Bool(_)) => true,
			(PropertyDomain::Int { min, max }, PropertyValue::Int(v)) => (min..=max).contains(v),
			(PropertyDomain::Direction(values), PropertyValue::Direction(d)) => values.contains(d),
			(PropertyDomain::Enum(values), PropertyValue::Enum(v)) => values.contains(v),
			_ => false,
		}
	}

	/// Parses the textual form of a value against this property's domain.
	///
	/// Returns `None` if the text is not a member of the domain.
	pub fn parse_value(&self, text: &str) -> Option<PropertyValue> {
		let value = match self.domain {
			PropertyDomain::Bool => PropertyValue::Bool(text.parse().ok()?),
			PropertyDomain::Int { .. } => PropertyValue::Int(text.parse().ok()?),
			PropertyDomain::Direction(_) => PropertyValue::Direction(text.parse().ok()?),
			PropertyDomain::Enum(values) => PropertyValue::Enum(values.iter().copied().find(|v| *v == text)?),
		};
		self.accepts(&value).then_some(value)
	}
}

impl fmt::Display for Property {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.domain {
			PropertyDomain::Int { min, max } => write!(f, "{}[{min}..={max}]", self.name),
			_ => f.write_str(self.name),
		}
	}
}

/// Current value of a block-state property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyValue {
	Bool(bool),
	Int(i32),
	Direction(Direction),
	Enum(&'static str),
}

impl PropertyValue {
	pub fn as_bool(self) -> Option<bool> {
		match self {
			PropertyValue::Bool(v) => Some(v),
			_ => None,
		}
	}

	pub fn as_int(self) -> Option<i32> {
		match self {
			PropertyValue::Int(v) => Some(v),
			_ => None,
		}
	}

	pub fn as_str(self) -> Option<&'static str> {
		match self {
			PropertyValue::Enum(v) => Some(v),
			PropertyValue::Direction(d) => Some(d.as_str()),
			_ => None,
		}
	}
}

impl fmt::Display for PropertyValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PropertyValue::Bool(v) => write!(f, "{v}"),
			PropertyValue::Int(v) => write!(f, "{v}"),
			PropertyValue::Direction(d) => write!(f, "{d}"),
			PropertyValue::Enum(v) => f.write_str(v),
		}
	}
}

impl From<bool> for PropertyValue {
	fn from(v: bool) -> Self {
		PropertyValue::Bool(v)
	}
}

impl From<i32> for PropertyValue {
	fn from(v: i32) -> Self {
		PropertyValue::Int(v)
	}
}

impl From<Direction> for PropertyValue {
	fn from(v: Direction) -> Self {
		PropertyValue::Direction(v)
	}
}
