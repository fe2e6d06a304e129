//! Decoding of directories and lookup of tile ids inside them.
//!
//! A serialized directory is column oriented, every value is a varint:
//!
//! ```text
//! count | count × tile id delta | count × run length | count × length | count × offset
//! ```
//!
//! An offset of `0` (except for the first entry) means "directly behind the previous entry",
//! any other value `v` stands for the offset `v - 1`.

use super::EntryV3;
use pmtiles_core::{
	Blob, Error, Result,
	io::{ValueReader, ValueReaderSlice},
};
use std::io::ErrorKind;

#[derive(Debug, PartialEq)]
pub struct EntriesV3 {
	entries: Vec<EntryV3>,
}

impl EntriesV3 {
	/// Decodes an uncompressed directory.
	///
	/// # Errors
	/// Fails with [`Error::MalformedDirectory`] if the bytes are truncated, carry trailing data,
	/// claim more entries than they could hold, or describe unsorted or overlapping entries.
	pub fn from_blob(blob: &Blob) -> Result<Self> {
		let mut reader = ValueReaderSlice::new_le(blob.as_slice());

		let count = read_varint(&mut reader, "entry count")?;
		// each entry needs at least one byte in each of the four columns
		if count > reader.remaining() / 4 {
			return Err(Error::MalformedDirectory(format!(
				"{count} entries can not fit into {} bytes",
				blob.len()
			)));
		}
		let count = count as usize;

		let mut entries: Vec<EntryV3> = Vec::with_capacity(count);

		let mut last_id: u64 = 0;
		for i in 0..count {
			let delta = read_varint(&mut reader, "tile id")?;
			if i > 0 && delta == 0 {
				return Err(Error::MalformedDirectory(format!(
					"tile id of entry {i} is not greater than the previous one"
				)));
			}
			last_id = last_id
				.checked_add(delta)
				.ok_or_else(|| Error::MalformedDirectory(format!("tile id of entry {i} overflows")))?;
			entries.push(EntryV3::new(last_id, 0, 0, 0));
		}

		for (i, entry) in entries.iter_mut().enumerate() {
			entry.run_length = read_u32(&mut reader, "run length", i)?;
		}

		for (i, entry) in entries.iter_mut().enumerate() {
			entry.range.length = u64::from(read_u32(&mut reader, "length", i)?);
		}

		for i in 0..count {
			let value = read_varint(&mut reader, "offset")?;
			entries[i].range.offset = if value > 0 {
				value - 1
			} else if i > 0 {
				entries[i - 1]
					.range
					.end()
					.ok_or_else(|| Error::MalformedDirectory(format!("offset of entry {i} overflows")))?
			} else {
				return Err(Error::MalformedDirectory(
					"first entry can not continue a previous entry".to_string(),
				));
			};
		}

		if reader.has_remaining() {
			return Err(Error::MalformedDirectory(format!(
				"{} trailing bytes after {count} entries",
				reader.remaining()
			)));
		}

		for pair in entries.windows(2) {
			if pair[0].tile_ids().end > pair[1].tile_id {
				return Err(Error::MalformedDirectory(format!(
					"run of tile {} overlaps tile {}",
					pair[0].tile_id, pair[1].tile_id
				)));
			}
		}

		Ok(EntriesV3 { entries })
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, EntryV3> {
		self.entries.iter()
	}

	/// Finds the entry resolving `tile_id`: the entry with the greatest id not above `tile_id`,
	/// provided it is a leaf pointer or its run reaches `tile_id`.
	pub fn find_tile(&self, tile_id: u64) -> Option<EntryV3> {
		let index = self.entries.partition_point(|entry| entry.tile_id <= tile_id);
		if index == 0 {
			return None;
		}
		let entry = self.entries[index - 1];
		entry.covers(tile_id).then_some(entry)
	}
}

impl From<Vec<EntryV3>> for EntriesV3 {
	fn from(entries: Vec<EntryV3>) -> Self {
		EntriesV3 { entries }
	}
}

impl IntoIterator for EntriesV3 {
	type Item = EntryV3;
	type IntoIter = std::vec::IntoIter<EntryV3>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl<'a> IntoIterator for &'a EntriesV3 {
	type Item = &'a EntryV3;
	type IntoIter = std::slice::Iter<'a, EntryV3>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

fn read_varint(reader: &mut ValueReaderSlice<'_, byteorder::LittleEndian>, what: &str) -> Result<u64> {
	reader.read_varint().map_err(|e| {
		if e.kind() == ErrorKind::UnexpectedEof {
			Error::MalformedDirectory(format!("truncated while reading {what}"))
		} else {
			Error::MalformedDirectory(format!("invalid {what}: {e}"))
		}
	})
}

fn read_u32(reader: &mut ValueReaderSlice<'_, byteorder::LittleEndian>, what: &str, index: usize) -> Result<u32> {
	let value = read_varint(reader, what)?;
	u32::try_from(value)
		.map_err(|_| Error::MalformedDirectory(format!("{what} {value} of entry {index} exceeds 32 bits")))
}

#[cfg(test)]
mod tests {
	use super::*;
	use pmtiles_core::testing::{TestEntry, serialize_directory};
	use rstest::rstest;

	fn decode(entries: &[TestEntry]) -> Result<EntriesV3> {
		EntriesV3::from_blob(&serialize_directory(entries))
	}

	fn malformed(bytes: &[u8]) -> String {
		match EntriesV3::from_blob(&Blob::from(bytes)) {
			Err(Error::MalformedDirectory(message)) => message,
			other => panic!("expected a malformed directory, got {other:?}"),
		}
	}

	#[test]
	fn from_blob() -> Result<()> {
		let entries = decode(&[
			TestEntry::new(1, 100, 1000, 0),
			TestEntry::new(2, 1100, 1000, 1),
			TestEntry::new(3, 300, 1000, 2),
		])?;
		assert_eq!(
			entries.iter().copied().collect::<Vec<_>>(),
			vec![
				EntryV3::new(1, 100, 1000, 0),
				EntryV3::new(2, 1100, 1000, 1),
				EntryV3::new(3, 300, 1000, 2),
			]
		);
		Ok(())
	}

	fn from_hex(hex: &str) -> Blob {
		Blob::from(
			hex.split_whitespace()
				.map(|byte| u8::from_str_radix(byte, 16).unwrap())
				.collect::<Vec<_>>(),
		)
	}

	#[rstest]
	// leaf pointers at 1 and 3 around a tile at 2, all offsets explicit
	#[case(
		"03 01 01 01 00 01 00 e8 07 e8 07 e8 07 65 c9 01 ad 02",
		&[EntryV3::new(1, 100, 1000, 0), EntryV3::new(2, 200, 1000, 1), EntryV3::new(3, 300, 1000, 0)]
	)]
	// two-byte tile id delta (299) and a contiguous second entry (offset 0)
	#[case(
		"03 00 01 ab 02 01 02 00 0a 14 0a 01 00 06",
		&[EntryV3::new(0, 0, 10, 1), EntryV3::new(1, 10, 20, 2), EntryV3::new(300, 5, 10, 0)]
	)]
	fn known_bytes(#[case] hex: &str, #[case] expected: &[EntryV3]) -> Result<()> {
		let entries = EntriesV3::from_blob(&from_hex(hex))?;
		assert_eq!(entries.iter().copied().collect::<Vec<_>>(), expected);
		Ok(())
	}

	#[test]
	fn empty_directory() -> Result<()> {
		let entries = EntriesV3::from_blob(&Blob::from(&[0u8]))?;
		assert!(entries.is_empty());
		assert_eq!(entries.find_tile(0), None);
		Ok(())
	}

	#[test]
	fn large_values() -> Result<()> {
		let entries = decode(&[TestEntry::new(1_537_228_672_809_129_301, 1 << 40, u64::from(u32::MAX), 1)])?;
		assert_eq!(
			entries.iter().next(),
			Some(&EntryV3::new(1_537_228_672_809_129_301, 1 << 40, u32::MAX, 1))
		);
		Ok(())
	}

	#[rstest]
	#[case(&[], "truncated while reading entry count")]
	#[case(&[0x80], "truncated while reading entry count")]
	#[case(&[2, 1, 1, 1, 1, 1, 1, 1], "2 entries can not fit into 8 bytes")]
	#[case(&[1, 0, 1, 10, 1, 0], "1 trailing bytes after 1 entries")]
	#[case(&[1, 0, 1, 10, 0], "first entry can not continue a previous entry")]
	#[case(&[2, 5, 0, 1, 1, 10, 10, 1, 0], "tile id of entry 1 is not greater than the previous one")]
	#[case(&[2, 5, 1, 3, 1, 10, 10, 1, 0], "run of tile 5 overlaps tile 6")]
	#[case(&[1, 0, 0x80, 0x80, 0x80, 0x80, 0x10, 10, 1], "run length 4294967296 of entry 0 exceeds 32 bits")]
	#[case(&[1, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x02, 1, 1, 1], "invalid tile id: varint overflows u64")]
	fn invalid(#[case] bytes: &[u8], #[case] message: &str) {
		assert_eq!(malformed(bytes), message);
	}

	#[test]
	fn find_tile() {
		let entries = EntriesV3::from(vec![EntryV3::new(10, 0, 100, 5), EntryV3::new(20, 100, 50, 0)]);

		assert_eq!(entries.find_tile(9), None);
		assert_eq!(entries.find_tile(10), Some(EntryV3::new(10, 0, 100, 5)));
		assert_eq!(entries.find_tile(12), Some(EntryV3::new(10, 0, 100, 5)));
		assert_eq!(entries.find_tile(14), Some(EntryV3::new(10, 0, 100, 5)));
		assert_eq!(entries.find_tile(15), None);
		assert_eq!(entries.find_tile(16), None);
		assert_eq!(entries.find_tile(20), Some(EntryV3::new(20, 100, 50, 0)));
		assert_eq!(entries.find_tile(25), Some(EntryV3::new(20, 100, 50, 0)));
	}

	#[test]
	fn find_tile_in_large_directory() -> Result<()> {
		let rows = (0..1000u64)
			.map(|i| TestEntry::new(i * 3, i * 10, 10, 2))
			.collect::<Vec<_>>();
		let entries = decode(&rows)?;
		assert_eq!(entries.len(), 1000);

		for i in 0..1000u64 {
			let entry = EntryV3::new(i * 3, i * 10, 10, 2);
			assert_eq!(entries.find_tile(i * 3), Some(entry));
			assert_eq!(entries.find_tile(i * 3 + 1), Some(entry));
			assert_eq!(entries.find_tile(i * 3 + 2), None);
		}
		Ok(())
	}
}
