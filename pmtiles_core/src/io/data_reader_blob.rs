//! An in-memory byte source, e.g. for archives that were downloaded or embedded as a whole.

use super::DataReaderTrait;
use crate::{Blob, ByteRange, Result};

#[derive(Debug)]
pub struct DataReaderBlob {
	name: String,
	blob: Blob,
}

impl DataReaderBlob {
	pub fn new(name: &str, blob: Blob) -> DataReaderBlob {
		DataReaderBlob {
			name: name.to_owned(),
			blob,
		}
	}
}

impl From<Blob> for DataReaderBlob {
	fn from(blob: Blob) -> Self {
		DataReaderBlob::new("memory", blob)
	}
}

impl From<Vec<u8>> for DataReaderBlob {
	fn from(data: Vec<u8>) -> Self {
		DataReaderBlob::from(Blob::from(data))
	}
}

impl DataReaderTrait for DataReaderBlob {
	fn read_range(&self, range: &ByteRange) -> Result<Blob> {
		self.blob.read_range(range)
	}

	fn size(&self) -> u64 {
		self.blob.len()
	}

	fn get_name(&self) -> &str {
		&self.name
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn read_range() -> Result<()> {
		let reader = DataReaderBlob::from(vec![0u8, 1, 2, 3, 4, 5, 6, 7]);
		assert_eq!(reader.read_range(&ByteRange::new(2, 4))?.as_slice(), &[2, 3, 4, 5]);
		assert_eq!(reader.size(), 8);
		assert_eq!(reader.get_name(), "memory");
		Ok(())
	}

	#[test]
	fn read_past_end() {
		let reader = DataReaderBlob::new("tiny", Blob::from(&[1u8, 2]));
		let err = reader.read_range(&ByteRange::new(1, 2)).unwrap_err();
		assert!(err.is_io());
		assert_eq!(reader.get_name(), "tiny");
	}
}
