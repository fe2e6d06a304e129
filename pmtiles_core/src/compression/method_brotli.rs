use super::functions::corrupt;
use crate::{Blob, Result, TileCompression};
use brotli::BrotliDecompress;
use std::io::Cursor;

/// Decompresses data that was compressed using Brotli.
pub fn decompress_brotli(blob: &Blob) -> Result<Blob> {
	let mut input = Cursor::new(blob.as_slice());
	let mut output = Vec::new();
	BrotliDecompress(&mut input, &mut output).map_err(|e| corrupt(TileCompression::Brotli, &e))?;
	Ok(Blob::from(output))
}

/// Compresses data using Brotli.
#[cfg(any(test, feature = "test"))]
pub fn compress_brotli(blob: &Blob) -> Result<Blob> {
	use brotli::{BrotliCompress, enc::BrotliEncoderParams};
	let params = BrotliEncoderParams {
		quality: 10,
		lgwin: 19,
		size_hint: blob.len() as usize,
		..Default::default()
	};
	let mut input = Cursor::new(blob.as_slice());
	let mut output = Vec::new();
	BrotliCompress(&mut input, &mut output, &params)
		.map_err(|e| crate::Error::io("failed to compress data using Brotli", e))?;
	Ok(Blob::from(output))
}
