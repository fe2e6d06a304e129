//! This module defines the `TileCompression` enum, naming the compression algorithms a PMTiles
//! archive can tag its directories, metadata and tiles with.
//!
//! # Examples
//!
//! ```
//! use pmtiles_core::TileCompression;
//!
//! assert_eq!(TileCompression::Gzip.as_str(), "gzip");
//! assert_eq!(TileCompression::Zstd.extension(), ".zst");
//! ```

use std::fmt::Display;

/// Enum representing possible compression algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileCompression {
	Uncompressed,
	Gzip,
	Brotli,
	Zstd,
}

impl TileCompression {
	pub fn as_str(&self) -> &str {
		match self {
			TileCompression::Uncompressed => "none",
			TileCompression::Gzip => "gzip",
			TileCompression::Brotli => "brotli",
			TileCompression::Zstd => "zstd",
		}
	}

	/// Returns the file extension associated with the compression type.
	pub fn extension(&self) -> &str {
		match self {
			TileCompression::Uncompressed => "",
			TileCompression::Gzip => ".gz",
			TileCompression::Brotli => ".br",
			TileCompression::Zstd => ".zst",
		}
	}
}

impl Display for TileCompression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
