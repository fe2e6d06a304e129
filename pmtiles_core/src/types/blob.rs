//! This module provides the [`Blob`] struct, a wrapper around [`Vec<u8>`] that carries the bytes of
//! headers, directories, metadata and tiles through the reader.
//!
//! # Examples
//!
//! ```rust
//! use pmtiles_core::{Blob, ByteRange};
//!
//! let blob = Blob::from("abcdef");
//! assert_eq!(blob.len(), 6);
//! assert_eq!(blob.read_range(&ByteRange::new(2, 3)).unwrap().as_slice(), b"cde");
//! ```

use super::ByteRange;
use crate::{Error, Result};
use std::fmt::Debug;
use std::io::ErrorKind;

/// A simple wrapper around [`Vec<u8>`].
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Blob(Vec<u8>);

impl Blob {
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	/// Returns a new [`Blob`] containing the bytes in the specified [`ByteRange`].
	///
	/// # Errors
	///
	/// Returns an [`Error::Io`] of kind `UnexpectedEof` if the range reaches past the end.
	pub fn read_range(&self, range: &ByteRange) -> Result<Blob> {
		match range.end() {
			Some(end) if end <= self.len() => Ok(Blob::from(&self.0[range.as_range_usize()])),
			_ => Err(Error::io(
				format!("{range:?} is outside of a blob with {} bytes", self.len()),
				ErrorKind::UnexpectedEof.into(),
			)),
		}
	}

	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.0.as_ref()
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Returns the content as text, replacing invalid UTF-8 sequences.
	#[must_use]
	pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
		String::from_utf8_lossy(&self.0)
	}

	/// Returns the content as space separated hex bytes, e.g. `"03 01 ff"`.
	#[must_use]
	pub fn as_hex(&self) -> String {
		self
			.0
			.iter()
			.map(|byte| format!("{byte:02x}"))
			.collect::<Vec<_>>()
			.join(" ")
	}

	#[must_use]
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for Blob {
	fn from(item: Vec<u8>) -> Self {
		Blob(item)
	}
}

impl From<&[u8]> for Blob {
	fn from(item: &[u8]) -> Self {
		Blob(item.to_vec())
	}
}

impl<const N: usize> From<&[u8; N]> for Blob {
	fn from(item: &[u8; N]) -> Self {
		Blob(item.to_vec())
	}
}

impl From<&str> for Blob {
	fn from(item: &str) -> Self {
		Blob(item.as_bytes().to_vec())
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.0.len() <= 16 {
			write!(f, "Blob({}): {}", self.0.len(), self.as_hex())
		} else {
			write!(f, "Blob({}): {} ...", self.0.len(), Blob::from(&self.0[..16]).as_hex())
		}
	}
}
