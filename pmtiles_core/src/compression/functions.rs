use super::{decompress_brotli, decompress_gzip, decompress_zstd};
use crate::{Blob, Result, TileCompression};
use std::fmt::Debug;

/// Inflates byte ranges read from an archive.
///
/// Implementations must report malformed input as [`crate::Error::CorruptData`].
pub trait Decompressor: Debug + Send + Sync {
	fn decompress(&self, blob: Blob, compression: TileCompression) -> Result<Blob>;
}

/// Decompressor backed by `flate2`, `brotli` and `zstd`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultDecompressor;

impl Decompressor for DefaultDecompressor {
	fn decompress(&self, blob: Blob, compression: TileCompression) -> Result<Blob> {
		decompress(blob, compression)
	}
}

/// Decompresses data based on the specified compression algorithm.
pub fn decompress(blob: Blob, compression: TileCompression) -> Result<Blob> {
	match compression {
		TileCompression::Uncompressed => Ok(blob),
		TileCompression::Gzip => decompress_gzip(&blob),
		TileCompression::Brotli => decompress_brotli(&blob),
		TileCompression::Zstd => decompress_zstd(&blob),
	}
}

/// Compresses data based on the specified compression algorithm.
#[cfg(any(test, feature = "test"))]
pub fn compress(blob: Blob, compression: TileCompression) -> Result<Blob> {
	use super::{compress_brotli, compress_gzip, compress_zstd};
	match compression {
		TileCompression::Uncompressed => Ok(blob),
		TileCompression::Gzip => compress_gzip(&blob),
		TileCompression::Brotli => compress_brotli(&blob),
		TileCompression::Zstd => compress_zstd(&blob),
	}
}

pub(super) fn corrupt(compression: TileCompression, error: &std::io::Error) -> crate::Error {
	crate::Error::CorruptData {
		compression,
		message: error.to_string(),
	}
}
