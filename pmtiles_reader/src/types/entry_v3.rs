use pmtiles_core::ByteRange;

/// One row of a directory.
///
/// `run_length == 0` marks a pointer to a leaf directory, `range` is then relative to the leaf
/// directory section. Otherwise the entry is a tile repeated for `run_length` consecutive ids and
/// `range` is relative to the tile data section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryV3 {
	pub tile_id: u64,
	pub range: ByteRange,
	pub run_length: u32,
}

impl EntryV3 {
	pub fn new(tile_id: u64, offset: u64, length: u32, run_length: u32) -> Self {
		Self {
			tile_id,
			range: ByteRange::new(offset, u64::from(length)),
			run_length,
		}
	}

	pub fn is_leaf_pointer(&self) -> bool {
		self.run_length == 0
	}

	/// Returns true if this entry resolves `tile_id`, assuming it is the closest entry at or below it.
	pub fn covers(&self, tile_id: u64) -> bool {
		tile_id >= self.tile_id && (self.is_leaf_pointer() || tile_id - self.tile_id < u64::from(self.run_length))
	}

	/// The tile ids this entry stands for. Empty for leaf pointers.
	pub fn tile_ids(&self) -> std::ops::Range<u64> {
		if self.is_leaf_pointer() {
			self.tile_id..self.tile_id
		} else {
			self.tile_id..self.tile_id.saturating_add(u64::from(self.run_length))
		}
	}
}
