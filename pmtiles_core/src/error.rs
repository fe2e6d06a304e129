//! Error taxonomy shared by all PMTiles crates.
//!
//! A missing tile is never an error: lookups return `Ok(None)` for it. Everything in this enum
//! is a genuine failure that callers have to distinguish from "tile absent".

use crate::TileCompression;
use thiserror::Error;

/// Result type alias using the PMTiles [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
	/// The leading header block is too short or structurally invalid.
	#[error("malformed header: {0}")]
	MalformedHeader(String),

	/// A directory could not be decoded or is internally inconsistent.
	#[error("malformed directory: {0}")]
	MalformedDirectory(String),

	/// The metadata block is not valid JSON.
	#[error("malformed metadata: {0}")]
	MalformedMetadata(String),

	/// Decompression of a byte range failed.
	#[error("corrupt {compression} data: {message}")]
	CorruptData {
		compression: TileCompression,
		message: String,
	},

	/// A tile coordinate lies outside the tile pyramid.
	#[error("invalid tile coordinate: {0}")]
	InvalidCoordinate(String),

	/// The byte source could not satisfy a request.
	#[error("{context}")]
	Io {
		context: String,
		#[source]
		source: std::io::Error,
	},
}

impl Error {
	/// Wraps an I/O error together with a description of what was attempted.
	pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
		Error::Io {
			context: context.into(),
			source,
		}
	}

	pub fn is_io(&self) -> bool {
		matches!(self, Error::Io { .. })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::error::Error as _;

	#[test]
	fn display() {
		assert_eq!(
			Error::MalformedHeader("bad magic".to_string()).to_string(),
			"malformed header: bad magic"
		);
		assert_eq!(
			Error::MalformedDirectory("truncated".to_string()).to_string(),
			"malformed directory: truncated"
		);
		assert_eq!(
			Error::CorruptData {
				compression: TileCompression::Gzip,
				message: "invalid gzip header".to_string()
			}
			.to_string(),
			"corrupt gzip data: invalid gzip header"
		);
	}

	#[test]
	fn io_keeps_source() {
		let err = Error::io(
			"failed to read 4 bytes at offset 8",
			std::io::Error::from(std::io::ErrorKind::UnexpectedEof),
		);
		assert!(err.is_io());
		assert_eq!(err.to_string(), "failed to read 4 bytes at offset 8");
		assert!(err.source().is_some());
		assert!(!Error::InvalidCoordinate("x".to_string()).is_io());
	}
}
