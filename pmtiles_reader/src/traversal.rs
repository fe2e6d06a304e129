//! Enumeration of all tiles in an archive.
//!
//! [`TileIterator`] walks the directory tree depth first, in directory order, and expands every
//! run into one item per tile id. Directories are read only when the walk reaches them.

use crate::{PMTilesReader, types::EntryV3};
use pmtiles_core::{Blob, Error, HilbertIndex, Result, TileCoord};
use std::ops::Range;

struct Frame {
	entries: std::vec::IntoIter<EntryV3>,
	depth: usize,
}

struct Run {
	tile_ids: Range<u64>,
	blob: Blob,
}

/// Yields `(coordinate, tile)` pairs for every tile of an archive.
///
/// Errors do not end the iteration: a directory or tile that can not be read yields one `Err`
/// item and the walk continues with the next entry.
pub struct TileIterator<'a> {
	reader: &'a PMTilesReader,
	stack: Vec<Frame>,
	run: Option<Run>,
	started: bool,
}

impl<'a> TileIterator<'a> {
	pub(crate) fn new(reader: &'a PMTilesReader) -> TileIterator<'a> {
		TileIterator {
			reader,
			stack: Vec::new(),
			run: None,
			started: false,
		}
	}

	fn next_from_run(&mut self) -> Option<Result<(TileCoord, Blob)>> {
		let run = self.run.as_mut()?;
		let Some(tile_id) = run.tile_ids.next() else {
			self.run = None;
			return None;
		};
		match TileCoord::from_hilbert_index(tile_id) {
			Ok(coord) => Some(Ok((coord, run.blob.clone()))),
			Err(e) => {
				self.run = None;
				Some(Err(e))
			}
		}
	}

	/// Handles the next directory entry. Returns an item only on errors.
	///
	/// Leaf pointers beyond [`ReaderConfig::max_depth`](crate::ReaderConfig::max_depth) are
	/// skipped, matching [`PMTilesReader::get_tile`].
	fn visit(&mut self, entry: EntryV3, depth: usize) -> Option<Error> {
		let max_depth = self.reader.config().max_depth;

		if entry.is_leaf_pointer() {
			if depth >= max_depth {
				// lookups treat these tiles as absent, so enumeration skips them too
				log::debug!(
					"skipping leaf directory at tile id {} beyond the maximum depth of {max_depth}",
					entry.tile_id
				);
				return None;
			}
			let range = entry.range.get_shifted_forward(self.reader.header().leaf_dirs.offset);
			match self.reader.read_directory(&range) {
				Ok(entries) => self.stack.push(Frame {
					entries: entries.into_iter(),
					depth: depth + 1,
				}),
				Err(e) => return Some(e),
			}
		} else {
			match self.reader.read_tile(&entry) {
				Ok(blob) => {
					self.run = Some(Run {
						tile_ids: entry.tile_ids(),
						blob,
					});
				}
				Err(e) => return Some(e),
			}
		}
		None
	}
}

impl Iterator for TileIterator<'_> {
	type Item = Result<(TileCoord, Blob)>;

	fn next(&mut self) -> Option<Self::Item> {
		if !self.started {
			self.started = true;
			match self.reader.read_directory(&self.reader.header().root_dir) {
				Ok(entries) => self.stack.push(Frame {
					entries: entries.into_iter(),
					depth: 1,
				}),
				Err(e) => return Some(Err(e)),
			}
		}

		loop {
			if let Some(item) = self.next_from_run() {
				return Some(item);
			}

			let frame = self.stack.last_mut()?;
			let depth = frame.depth;
			match frame.entries.next() {
				Some(entry) => {
					if let Some(error) = self.visit(entry, depth) {
						return Some(Err(error));
					}
				}
				None => {
					self.stack.pop();
				}
			}
		}
	}
}

impl std::fmt::Debug for TileIterator<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TileIterator")
			.field("source", &self.reader.source_name())
			.field("depth", &self.stack.len())
			.finish()
	}
}
