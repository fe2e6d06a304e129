//! This module defines the `DataReaderTrait`, the random access byte source of an archive.
//!
//! Every read names its absolute offset, there is no shared cursor. Implementations must be
//! `Send + Sync`, so one reader can serve lookups from many threads at once.
//!
//! # Examples
//!
//! ```rust
//! use pmtiles_core::{io::{DataReader, DataReaderTrait}, Blob, ByteRange, Result};
//!
//! #[derive(Debug)]
//! struct MockDataReader {
//!     data: Vec<u8>,
//! }
//!
//! impl DataReaderTrait for MockDataReader {
//!     fn read_range(&self, range: &ByteRange) -> Result<Blob> {
//!         Blob::from(self.data.clone()).read_range(range)
//!     }
//!
//!     fn size(&self) -> u64 {
//!         self.data.len() as u64
//!     }
//!
//!     fn get_name(&self) -> &str {
//!         "MockDataReader"
//!     }
//! }
//!
//! let reader: DataReader = Box::new(MockDataReader { data: vec![1, 2, 3, 4, 5] });
//! let partial = reader.read_range(&ByteRange::new(1, 3)).unwrap();
//! assert_eq!(partial.as_slice(), &[2, 3, 4]);
//! ```

use crate::{Blob, ByteRange, Result};
use std::fmt::Debug;

/// Type alias for a boxed dynamic implementation of the `DataReaderTrait`.
pub type DataReader = Box<dyn DataReaderTrait>;

/// A positional byte source.
pub trait DataReaderTrait: Debug + Send + Sync {
	/// Reads exactly `range.length` bytes starting at `range.offset`.
	///
	/// Fails with [`crate::Error::Io`] if the range cannot be satisfied completely.
	fn read_range(&self, range: &ByteRange) -> Result<Blob>;

	/// Total number of bytes available.
	fn size(&self) -> u64;

	/// Gets the name of the data source, used in log and error messages.
	fn get_name(&self) -> &str;
}
