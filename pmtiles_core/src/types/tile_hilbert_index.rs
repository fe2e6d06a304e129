//! Maps tile coordinates to PMTiles tile ids and back.
//!
//! Tile ids count all tiles of the lower levels first (`(4^level - 1) / 3` of them) and then
//! walk the level along a Hilbert curve, so neighbouring tiles get neighbouring ids.
//!
//! ```
//! use pmtiles_core::{HilbertIndex, TileCoord};
//!
//! let coord = TileCoord::new(2, 2, 2).unwrap();
//! assert_eq!(coord.get_hilbert_index().unwrap(), 13);
//! assert_eq!(TileCoord::from_hilbert_index(13).unwrap(), coord);
//! ```

use super::{MAX_LEVEL, TileCoord};
use crate::{Error, Result};

pub trait HilbertIndex {
	fn get_hilbert_index(&self) -> Result<u64>;
	fn from_hilbert_index(index: u64) -> Result<Self>
	where
		Self: Sized;
}

impl HilbertIndex for TileCoord {
	fn get_hilbert_index(&self) -> Result<u64> {
		self.check()?;
		Ok(coord_to_index(self.x, self.y, self.level))
	}

	fn from_hilbert_index(index: u64) -> Result<Self> {
		index_to_coord(index)
	}
}

/// Number of tiles on all levels below `level`.
fn level_offset(level: u8) -> u64 {
	(TileCoord::level_size(level) - 1) / 3
}

// expects a checked coordinate
fn coord_to_index(x: u32, y: u32, level: u8) -> u64 {
	let n = 1u64 << level;
	let mut tx = u64::from(x);
	let mut ty = u64::from(y);
	let mut d = 0u64;
	let mut s = n / 2;
	while s > 0 {
		let rx = u64::from((tx & s) > 0);
		let ry = u64::from((ty & s) > 0);
		d += s * s * ((3 * rx) ^ ry);
		rotate(n, &mut tx, &mut ty, rx, ry);
		s /= 2;
	}

	level_offset(level) + d
}

fn rotate(n: u64, tx: &mut u64, ty: &mut u64, rx: u64, ry: u64) {
	if ry == 0 {
		if rx == 1 {
			*tx = n - 1 - *tx;
			*ty = n - 1 - *ty;
		}
		std::mem::swap(tx, ty);
	}
}

fn index_to_coord(index: u64) -> Result<TileCoord> {
	let mut acc = 0u64;
	for level in 0..=MAX_LEVEL {
		let num_tiles = TileCoord::level_size(level);
		if acc + num_tiles > index {
			let n = 1u64 << level;
			let mut t = index - acc;
			let mut tx = 0u64;
			let mut ty = 0u64;

			let mut s = 1u64;
			while s < n {
				let rx = (t / 2) & 1;
				let ry = (t ^ rx) & 1;
				rotate(s, &mut tx, &mut ty, rx, ry);
				tx += s * rx;
				ty += s * ry;
				t /= 4;
				s *= 2;
			}

			return Ok(TileCoord {
				level,
				x: tx as u32,
				y: ty as u32,
			});
		}
		acc += num_tiles;
	}

	Err(Error::InvalidCoordinate(format!(
		"tile id {index} exceeds level {MAX_LEVEL}"
	)))
}
