//! Provides functionality for reading tiles and metadata from a PMTiles v3 archive.
//!
//! The header is decoded once when the reader is opened. Every lookup walks the directories from
//! the root down, re-reading each directory it needs, and stops after
//! [`ReaderConfig::max_depth`] directories.
//!
//! All reads are positional, so a reader can be shared between threads behind an `Arc`.
//!
//! ## Usage Example
//! ```rust,no_run
//! use pmtiles_reader::PMTilesReader;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let reader = PMTilesReader::open_path(Path::new("berlin.pmtiles"))?;
//!
//!     println!("metadata: {}", reader.metadata()?);
//!
//!     match reader.get(14, 8800, 5373)? {
//!         Some(tile) => println!("tile with {} bytes", tile.len()),
//!         None => println!("tile not found"),
//!     }
//!
//!     Ok(())
//! }
//! ```

use crate::{
	ReaderConfig, TileIterator,
	types::{EntriesV3, EntryV3, HeaderV3},
};
use pmtiles_core::{
	Blob, ByteRange, Error, HilbertIndex, Result, TileCompression, TileCoord,
	compression::{DefaultDecompressor, Decompressor},
	io::{DataReader, DataReaderFile},
};
use std::path::Path;

/// A read-only view of a PMTiles archive.
#[derive(Debug)]
pub struct PMTilesReader {
	data_reader: DataReader,
	header: HeaderV3,
	internal_compression: TileCompression,
	tile_compression: Option<TileCompression>,
	decompressor: Box<dyn Decompressor>,
	config: ReaderConfig,
}

impl PMTilesReader {
	/// Opens the archive at `path` with the default configuration.
	pub fn open_path(path: &Path) -> Result<PMTilesReader> {
		PMTilesReader::open_reader(DataReaderFile::open(path)?)
	}

	/// Opens an archive from any positional byte source with the default configuration.
	pub fn open_reader(data_reader: DataReader) -> Result<PMTilesReader> {
		PMTilesReader::open_reader_with_config(data_reader, ReaderConfig::default())
	}

	/// Opens an archive from a byte source.
	///
	/// # Errors
	/// Fails with [`Error::MalformedHeader`] if the source is shorter than a header, the header is
	/// invalid, or directories use an unknown compression. I/O failures are returned as
	/// [`Error::Io`].
	pub fn open_reader_with_config(data_reader: DataReader, config: ReaderConfig) -> Result<PMTilesReader> {
		log::debug!("Opening PMTilesReader for {}", data_reader.get_name());

		if data_reader.size() < HeaderV3::len() {
			return Err(Error::MalformedHeader(format!(
				"'{}' has only {} bytes",
				data_reader.get_name(),
				data_reader.size()
			)));
		}

		let header = HeaderV3::deserialize(&data_reader.read_range(&ByteRange::new(0, HeaderV3::len()))?)?;
		log::trace!("Header: {:?}", header);

		let internal_compression = header
			.internal_compression
			.as_value()
			.ok_or_else(|| Error::MalformedHeader("unknown internal compression".to_string()))?;
		let tile_compression = header.tile_compression.as_value();

		Ok(PMTilesReader {
			data_reader,
			header,
			internal_compression,
			tile_compression,
			decompressor: Box::new(DefaultDecompressor),
			config,
		})
	}

	/// Replaces the decompressor used for directories, metadata and tiles.
	pub fn with_decompressor(mut self, decompressor: Box<dyn Decompressor>) -> PMTilesReader {
		self.decompressor = decompressor;
		self
	}

	pub fn header(&self) -> &HeaderV3 {
		&self.header
	}

	pub fn config(&self) -> &ReaderConfig {
		&self.config
	}

	pub fn source_name(&self) -> &str {
		self.data_reader.get_name()
	}

	/// Returns the tile at `z/x/y`, or `None` if the archive does not contain it.
	///
	/// # Errors
	/// Fails with [`Error::InvalidCoordinate`] if `x` or `y` lie outside `[0, 2^z)` or `z > 31`.
	pub fn get(&self, z: u32, x: u32, y: u32) -> Result<Option<Blob>> {
		self.get_tile(&TileCoord::from_zxy(z, x, y)?)
	}

	/// Returns the tile at `coord`, or `None` if the archive does not contain it.
	///
	/// A lookup also ends with `None` when it would have to visit more directories than the
	/// configured maximum depth.
	pub fn get_tile(&self, coord: &TileCoord) -> Result<Option<Blob>> {
		log::trace!("get_tile {:?}", coord);

		let tile_id = coord.get_hilbert_index()?;
		let mut range = self.header.root_dir;

		for _depth in 0..self.config.max_depth {
			let entries = self.read_directory(&range)?;

			let Some(entry) = entries.find_tile(tile_id) else {
				return Ok(None);
			};

			if entry.is_leaf_pointer() {
				range = entry.range.get_shifted_forward(self.header.leaf_dirs.offset);
			} else {
				return self.read_tile(&entry).map(Some);
			}
		}

		log::trace!(
			"tile id {tile_id} not resolved within {} directories",
			self.config.max_depth
		);
		Ok(None)
	}

	/// Returns the metadata as a JSON value. An empty metadata section yields an empty object.
	///
	/// # Errors
	/// Fails with [`Error::MalformedMetadata`] if the decompressed bytes are not valid JSON.
	pub fn metadata(&self) -> Result<serde_json::Value> {
		if self.header.metadata.length == 0 {
			return Ok(serde_json::Value::Object(serde_json::Map::new()));
		}

		let blob = self.data_reader.read_range(&self.header.metadata)?;
		let blob = self.decompressor.decompress(blob, self.internal_compression)?;
		serde_json::from_slice(blob.as_slice()).map_err(|e| Error::MalformedMetadata(e.to_string()))
	}

	/// Lazily enumerates every tile of the archive in directory order.
	pub fn tiles(&self) -> TileIterator<'_> {
		TileIterator::new(self)
	}

	/// Reads, decompresses and decodes the directory at the absolute `range`.
	pub(crate) fn read_directory(&self, range: &ByteRange) -> Result<EntriesV3> {
		let blob = self.data_reader.read_range(range)?;
		let blob = self.decompressor.decompress(blob, self.internal_compression)?;
		let entries = EntriesV3::from_blob(&blob)?;
		log::trace!("read directory {:?} with {} entries", range, entries.len());
		Ok(entries)
	}

	/// Reads the data of a tile entry and decompresses it if configured.
	pub(crate) fn read_tile(&self, entry: &EntryV3) -> Result<Blob> {
		let range = entry.range.get_shifted_forward(self.header.tile_data.offset);
		log::trace!("read tile id {} from {:?}", entry.tile_id, range);

		let blob = self.data_reader.read_range(&range)?;
		match self.tile_compression {
			Some(compression) if self.config.decompress_tiles => self.decompressor.decompress(blob, compression),
			_ => Ok(blob),
		}
	}
}
