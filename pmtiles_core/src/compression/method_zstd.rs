use super::functions::corrupt;
use crate::{Blob, Result, TileCompression};
use std::io::Cursor;

/// Decompresses data that was compressed using Zstd.
pub fn decompress_zstd(blob: &Blob) -> Result<Blob> {
	let decompressed =
		zstd::decode_all(Cursor::new(blob.as_slice())).map_err(|e| corrupt(TileCompression::Zstd, &e))?;
	Ok(Blob::from(decompressed))
}

/// Compresses data using Zstd.
#[cfg(any(test, feature = "test"))]
pub fn compress_zstd(blob: &Blob) -> Result<Blob> {
	let compressed = zstd::encode_all(Cursor::new(blob.as_slice()), 19)
		.map_err(|e| crate::Error::io("failed to compress data using Zstd", e))?;
	Ok(Blob::from(compressed))
}
