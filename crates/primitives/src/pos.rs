use core::fmt;


/// Integer position of a block in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockPos {
	pub x: i32,
	pub y: i32,
	pub z: i32,
}

impl BlockPos {
	pub const ORIGIN: Self = Self::new(0, 0, 0);

	pub const fn new(x: i32, y: i32, z: i32) -> Self {
		Self { x, y, z }
	}

	/// Returns the volumetric centre of the block, the anchor overlay text is drawn at.
	pub fn center(self) -> Vec3 {
		Vec3::new(f64::from(self.x) + 0.5, f64::from(self.y) + 0.5, f64::from(self.z) + 0.5)
	}
}

impl fmt::Display for BlockPos {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}, {}, {}", self.x, self.y, self.z)
	}
}

impl From<(i32, i32, i32)> for BlockPos {
	fn from((x, y, z): (i32, i32, i32)) -> Self {
		Self::new(x, y, z)
	}
}

/// World-space point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
	pub x: f64,
	pub y: f64,
	pub z: f64,
}

impl Vec3 {
	pub const fn new(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z }
	}
}

impl fmt::Display for Vec3 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
	}
}
