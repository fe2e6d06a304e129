//! Assembles synthetic PMTiles v3 archives for tests.
//!
//! Only compiled for tests or with the `test` feature. The layout is always
//! `header | root directory | metadata | leaf directories | tile data`.
//!
//! ```ignore
//! use pmtiles_core::{testing::ArchiveBuilder, TileCompression};
//!
//! let mut builder = ArchiveBuilder::new(TileCompression::Gzip, TileCompression::Uncompressed);
//! let entry = builder.tile_entry(0, 1, b"tile 0/0/0").unwrap();
//! let archive = builder.build(&[entry]).unwrap();
//! assert_eq!(&archive.as_slice()[0..7], b"PMTiles");
//! ```

use crate::{Blob, Result, TileCompression, compression::compress};
use byteorder::{LittleEndian, WriteBytesExt};

pub const HEADER_LENGTH: u64 = 127;

/// One directory row as it is written to disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestEntry {
	pub tile_id: u64,
	pub offset: u64,
	pub length: u64,
	pub run_length: u64,
}

impl TestEntry {
	pub fn new(tile_id: u64, offset: u64, length: u64, run_length: u64) -> TestEntry {
		TestEntry {
			tile_id,
			offset,
			length,
			run_length,
		}
	}
}

pub fn compression_tag(compression: TileCompression) -> u8 {
	match compression {
		TileCompression::Uncompressed => 1,
		TileCompression::Gzip => 2,
		TileCompression::Brotli => 3,
		TileCompression::Zstd => 4,
	}
}

pub fn write_varint(buffer: &mut Vec<u8>, mut value: u64) {
	while value >= 0x80 {
		buffer.push((value as u8 & 0x7F) | 0x80);
		value >>= 7;
	}
	buffer.push(value as u8);
}

/// Serializes entries in the columnar varint layout of PMTiles v3 directories (uncompressed).
pub fn serialize_directory(entries: &[TestEntry]) -> Blob {
	let mut buffer = Vec::new();
	write_varint(&mut buffer, entries.len() as u64);

	let mut last_id = 0;
	for entry in entries {
		write_varint(&mut buffer, entry.tile_id - last_id);
		last_id = entry.tile_id;
	}
	for entry in entries {
		write_varint(&mut buffer, entry.run_length);
	}
	for entry in entries {
		write_varint(&mut buffer, entry.length);
	}
	for (i, entry) in entries.iter().enumerate() {
		if i > 0 && entry.offset == entries[i - 1].offset + entries[i - 1].length {
			write_varint(&mut buffer, 0);
		} else {
			write_varint(&mut buffer, entry.offset + 1);
		}
	}

	Blob::from(buffer)
}

#[derive(Debug)]
pub struct ArchiveBuilder {
	internal_compression: TileCompression,
	tile_compression: TileCompression,
	tile_type: u8,
	metadata: String,
	leaves: Vec<u8>,
	tile_data: Vec<u8>,
	addressed_tiles: u64,
	tile_entries: u64,
	tile_contents: u64,
}

impl ArchiveBuilder {
	pub fn new(internal_compression: TileCompression, tile_compression: TileCompression) -> ArchiveBuilder {
		ArchiveBuilder {
			internal_compression,
			tile_compression,
			tile_type: 1,
			metadata: String::from("{}"),
			leaves: Vec::new(),
			tile_data: Vec::new(),
			addressed_tiles: 0,
			tile_entries: 0,
			tile_contents: 0,
		}
	}

	pub fn set_metadata(&mut self, json: &str) {
		self.metadata = json.to_owned();
	}

	pub fn set_tile_type(&mut self, tile_type: u8) {
		self.tile_type = tile_type;
	}

	/// Compresses `data` with the tile compression and appends it to the tile data section.
	pub fn add_tile_data(&mut self, data: &[u8]) -> Result<(u64, u64)> {
		let blob = compress(Blob::from(data), self.tile_compression)?;
		let offset = self.tile_data.len() as u64;
		self.tile_data.extend_from_slice(blob.as_slice());
		self.tile_contents += 1;
		Ok((offset, blob.len()))
	}

	/// Appends tile data and returns the entry covering `run_length` ids starting at `tile_id`.
	pub fn tile_entry(&mut self, tile_id: u64, run_length: u64, data: &[u8]) -> Result<TestEntry> {
		let (offset, length) = self.add_tile_data(data)?;
		self.tile_entries += 1;
		self.addressed_tiles += run_length;
		Ok(TestEntry::new(tile_id, offset, length, run_length))
	}

	/// Serializes and compresses a leaf directory, returning its range inside the leaf section.
	pub fn add_leaf(&mut self, entries: &[TestEntry]) -> Result<(u64, u64)> {
		let blob = compress(serialize_directory(entries), self.internal_compression)?;
		let offset = self.leaves.len() as u64;
		self.leaves.extend_from_slice(blob.as_slice());
		Ok((offset, blob.len()))
	}

	/// Adds a leaf directory and returns the pointer entry (`run_length == 0`) referencing it.
	pub fn leaf_entry(&mut self, tile_id: u64, entries: &[TestEntry]) -> Result<TestEntry> {
		let (offset, length) = self.add_leaf(entries)?;
		Ok(TestEntry::new(tile_id, offset, length, 0))
	}

	pub fn build(self, root: &[TestEntry]) -> Result<Blob> {
		let root = compress(serialize_directory(root), self.internal_compression)?;
		let metadata = compress(Blob::from(self.metadata.as_str()), self.internal_compression)?;

		let root_offset = HEADER_LENGTH;
		let metadata_offset = root_offset + root.len();
		let leaves_offset = metadata_offset + metadata.len();
		let tile_data_offset = leaves_offset + self.leaves.len() as u64;

		let mut buffer: Vec<u8> = Vec::new();
		buffer.extend_from_slice(b"PMTiles");
		buffer.push(3);
		let ranges = [
			(root_offset, root.len()),
			(metadata_offset, metadata.len()),
			(leaves_offset, self.leaves.len() as u64),
			(tile_data_offset, self.tile_data.len() as u64),
		];
		for (offset, length) in ranges {
			buffer.write_u64::<LittleEndian>(offset).map_err(|e| crate::Error::io("header", e))?;
			buffer.write_u64::<LittleEndian>(length).map_err(|e| crate::Error::io("header", e))?;
		}
		for count in [self.addressed_tiles, self.tile_entries, self.tile_contents] {
			buffer.write_u64::<LittleEndian>(count).map_err(|e| crate::Error::io("header", e))?;
		}
		buffer.push(1); // clustered
		buffer.push(compression_tag(self.internal_compression));
		buffer.push(compression_tag(self.tile_compression));
		buffer.push(self.tile_type);
		buffer.push(0); // min zoom
		buffer.push(14); // max zoom
		for e7 in [131_000_000i32, 523_000_000, 137_000_000, 527_000_000] {
			buffer.write_i32::<LittleEndian>(e7).map_err(|e| crate::Error::io("header", e))?;
		}
		buffer.push(7); // center zoom
		for e7 in [134_000_000i32, 525_000_000] {
			buffer.write_i32::<LittleEndian>(e7).map_err(|e| crate::Error::io("header", e))?;
		}
		debug_assert_eq!(buffer.len() as u64, HEADER_LENGTH);

		buffer.extend_from_slice(root.as_slice());
		buffer.extend_from_slice(metadata.as_slice());
		buffer.extend_from_slice(&self.leaves);
		buffer.extend_from_slice(&self.tile_data);
		Ok(Blob::from(buffer))
	}
}
