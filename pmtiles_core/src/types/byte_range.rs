//! This module provides the `ByteRange` struct, which represents a range of bytes with an offset and length.
//!
//! # Examples
//!
//! ```rust
//! use pmtiles_core::ByteRange;
//!
//! let range = ByteRange::new(23, 42);
//! assert_eq!(range.as_range_usize(), 23..65);
//! assert_eq!(range.get_shifted_forward(100).offset, 123);
//! ```

use std::fmt;
use std::ops::Range;

/// A struct representing a range of bytes with an offset and length.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct ByteRange {
	/// The starting offset of the byte range.
	pub offset: u64,
	/// The length of the byte range.
	pub length: u64,
}

impl ByteRange {
	pub fn new(offset: u64, length: u64) -> Self {
		Self { offset, length }
	}

	pub fn empty() -> Self {
		Self { offset: 0, length: 0 }
	}

	/// Returns a new `ByteRange` that is shifted forward by the specified offset.
	///
	/// Directory and tile ranges are stored relative to a section start; this turns them into
	/// absolute file ranges.
	pub fn get_shifted_forward(&self, offset: u64) -> Self {
		Self {
			offset: self.offset.saturating_add(offset),
			length: self.length,
		}
	}

	/// Returns the exclusive end of the range, or `None` on overflow.
	pub fn end(&self) -> Option<u64> {
		self.offset.checked_add(self.length)
	}

	/// Converts the `ByteRange` to a `Range<usize>`.
	pub fn as_range_usize(&self) -> Range<usize> {
		Range {
			start: self.offset as usize,
			end: (self.offset + self.length) as usize,
		}
	}
}

impl fmt::Debug for ByteRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ByteRange[{},{}]", self.offset, self.length)
	}
}
