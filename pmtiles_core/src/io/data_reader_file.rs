//! This module provides functionality for reading data from files.
//!
//! Reads are positional (`pread` on unix, `seek_read` on windows), so a single `DataReaderFile`
//! can be shared between threads without any locking.
//!
//! # Examples
//!
//! ```rust,no_run
//! use pmtiles_core::{io::{DataReaderFile, DataReaderTrait}, ByteRange};
//! use std::path::Path;
//!
//! let reader = DataReaderFile::open(Path::new("/data/berlin.pmtiles")).unwrap();
//! let magic = reader.read_range(&ByteRange::new(0, 7)).unwrap();
//! assert_eq!(magic.as_slice(), b"PMTiles");
//! ```

use super::DataReaderTrait;
use crate::{Blob, ByteRange, Error, Result};
use std::{fs::File, io, path::Path};

/// A struct that provides positional reads from a file.
#[derive(Debug)]
pub struct DataReaderFile {
	name: String,
	file: File,
	size: u64,
}

impl DataReaderFile {
	/// Opens a file and creates a `DataReaderFile` instance.
	///
	/// # Errors
	///
	/// Fails if the path does not exist, is not a regular file or cannot be opened.
	pub fn open(path: &Path) -> Result<Box<DataReaderFile>> {
		let name = path.to_string_lossy().to_string();
		if !path.is_file() {
			return Err(Error::io(
				format!("file '{name}' does not exist or is not a regular file"),
				io::ErrorKind::NotFound.into(),
			));
		}

		let file = File::open(path).map_err(|e| Error::io(format!("failed to open file '{name}'"), e))?;
		let size = file
			.metadata()
			.map_err(|e| Error::io(format!("failed to read metadata of file '{name}'"), e))?
			.len();

		Ok(Box::new(DataReaderFile { name, file, size }))
	}
}

impl DataReaderTrait for DataReaderFile {
	fn read_range(&self, range: &ByteRange) -> Result<Blob> {
		// ranges come from archive bytes, so check them before allocating
		let length = match range.end() {
			Some(end) if end <= self.size => usize::try_from(range.length).ok(),
			_ => None,
		}
		.ok_or_else(|| {
			Error::io(
				format!("{range:?} is outside of file '{}' with {} bytes", self.name, self.size),
				io::ErrorKind::UnexpectedEof.into(),
			)
		})?;

		let mut buffer = vec![0; length];
		read_exact_at(&self.file, &mut buffer, range.offset).map_err(|e| {
			Error::io(
				format!(
					"failed to read {} bytes at offset {} in file '{}'",
					range.length, range.offset, self.name
				),
				e,
			)
		})?;
		Ok(Blob::from(buffer))
	}

	fn size(&self) -> u64 {
		self.size
	}

	fn get_name(&self) -> &str {
		&self.name
	}
}

#[cfg(unix)]
fn read_exact_at(file: &File, buffer: &mut [u8], offset: u64) -> io::Result<()> {
	use std::os::unix::fs::FileExt;
	file.read_exact_at(buffer, offset)
}

#[cfg(windows)]
fn read_exact_at(file: &File, mut buffer: &mut [u8], mut offset: u64) -> io::Result<()> {
	use std::os::windows::fs::FileExt;
	while !buffer.is_empty() {
		match file.seek_read(buffer, offset) {
			Ok(0) => return Err(io::ErrorKind::UnexpectedEof.into()),
			Ok(n) => {
				buffer = &mut std::mem::take(&mut buffer)[n..];
				offset += n as u64;
			}
			Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
			Err(e) => return Err(e),
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::assert_wildcard;
	use assert_fs::NamedTempFile;
	use std::{io::Write, sync::Arc, thread};

	fn temp_file(content: &[u8]) -> anyhow::Result<NamedTempFile> {
		let temp_file = NamedTempFile::new("testfile.bin")?;
		File::create(temp_file.path())?.write_all(content)?;
		Ok(temp_file)
	}

	#[test]
	fn open() -> anyhow::Result<()> {
		let temp_file = temp_file(b"Hello, world!")?;
		let reader = DataReaderFile::open(temp_file.path())?;
		assert_eq!(reader.size(), 13);
		assert_wildcard!(reader.get_name(), "*testfile.bin");

		let missing = NamedTempFile::new("nonexistent.bin")?;
		let err = DataReaderFile::open(missing.path()).unwrap_err();
		assert!(err.is_io());
		assert_wildcard!(err, "file '*nonexistent.bin' does not exist or is not a regular file");
		Ok(())
	}

	#[test]
	fn read_range() -> anyhow::Result<()> {
		let temp_file = temp_file(b"Hello, world!")?;
		let reader = DataReaderFile::open(temp_file.path())?;
		assert_eq!(reader.read_range(&ByteRange::new(4, 6))?.as_str(), "o, wor");
		assert!(reader.read_range(&ByteRange::new(13, 0))?.is_empty());
		Ok(())
	}

	#[test]
	fn read_past_end() -> anyhow::Result<()> {
		let temp_file = temp_file(b"Hello, world!")?;
		let reader = DataReaderFile::open(temp_file.path())?;
		let err = reader.read_range(&ByteRange::new(10, 10)).unwrap_err();
		assert!(err.is_io());
		assert_wildcard!(err, "ByteRange[10,10] is outside of file '*testfile.bin' with 13 bytes");
		Ok(())
	}

	#[test]
	fn huge_range_fails_without_allocating() -> anyhow::Result<()> {
		let temp_file = temp_file(b"Hello, world!")?;
		let reader = DataReaderFile::open(temp_file.path())?;

		let err = reader.read_range(&ByteRange::new(0, 1 << 62)).unwrap_err();
		assert!(err.is_io());
		assert_wildcard!(err, "ByteRange[0,4611686018427387904] is outside of file '*' with 13 bytes");

		assert!(reader.read_range(&ByteRange::new(u64::MAX, 2)).unwrap_err().is_io());
		Ok(())
	}

	#[test]
	fn concurrent_reads() -> anyhow::Result<()> {
		let content: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();
		let temp_file = temp_file(&content)?;
		let reader: Arc<DataReaderFile> = Arc::from(DataReaderFile::open(temp_file.path())?);

		let handles: Vec<_> = (0..8u64)
			.map(|i| {
				let reader = Arc::clone(&reader);
				thread::spawn(move || {
					for j in 0..200u64 {
						let offset = (i * 997 + j * 131) % 60_000;
						let blob = reader.read_range(&ByteRange::new(offset, 256)).unwrap();
						assert_eq!(blob.as_slice()[0], (offset % 256) as u8);
						assert_eq!(blob.as_slice()[255], ((offset + 255) % 256) as u8);
					}
				})
			})
			.collect();

		for handle in handles {
			handle.join().unwrap();
		}
		Ok(())
	}
}
