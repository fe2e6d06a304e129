//! This module defines `TileCoord`, the (zoom level, x, y) address of a tile in the pyramid.
//!
//! # Examples
//!
//! ```
//! use pmtiles_core::TileCoord;
//!
//! let coord = TileCoord::new(5, 6, 7).unwrap();
//! assert_eq!(coord.level, 5);
//! assert_eq!(coord.x, 6);
//! assert_eq!(coord.y, 7);
//!
//! assert!(TileCoord::new(1, 2, 0).is_err());
//! ```

use crate::{Error, Result};
use std::fmt::{self, Debug, Display};

/// Highest zoom level whose tile ids still fit into a `u64`.
pub const MAX_LEVEL: u8 = 31;

#[derive(Eq, PartialEq, Clone, Hash, Copy)]
pub struct TileCoord {
	pub level: u8,
	pub x: u32,
	pub y: u32,
}

impl TileCoord {
	/// Creates a coordinate, checking that `level <= 31` and that `x` and `y` lie in `[0, 2^level)`.
	pub fn new(level: u8, x: u32, y: u32) -> Result<TileCoord> {
		let coord = TileCoord { level, x, y };
		coord.check()?;
		Ok(coord)
	}

	/// Creates a coordinate from the wide integers callers usually receive, e.g. parsed from a URL.
	pub fn from_zxy(z: u32, x: u32, y: u32) -> Result<TileCoord> {
		let level = u8::try_from(z)
			.map_err(|_| Error::InvalidCoordinate(format!("level ({z}) must be <= {MAX_LEVEL}")))?;
		TileCoord::new(level, x, y)
	}

	pub fn is_valid(&self) -> bool {
		self.check().is_ok()
	}

	pub(crate) fn check(&self) -> Result<()> {
		if self.level > MAX_LEVEL {
			return Err(Error::InvalidCoordinate(format!(
				"level ({}) must be <= {MAX_LEVEL}",
				self.level
			)));
		}
		let size = 1u32 << self.level;
		if self.x >= size || self.y >= size {
			return Err(Error::InvalidCoordinate(format!(
				"x ({}) and y ({}) must be < {size} on level {}",
				self.x, self.y, self.level
			)));
		}
		Ok(())
	}

	/// Returns the number of tiles on the given level, `4^level`.
	pub fn level_size(level: u8) -> u64 {
		1u64 << (2 * u32::from(level))
	}
}

impl Debug for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileCoord({}, [{}, {}])", self.level, self.x, self.y)
	}
}

impl Display for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}/{}", self.level, self.x, self.y)
	}
}
