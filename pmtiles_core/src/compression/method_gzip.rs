use super::functions::corrupt;
use crate::{Blob, Result, TileCompression};
use flate2::bufread::GzDecoder;
use std::io::Read;

/// Decompresses data that was compressed using Gzip.
pub fn decompress_gzip(blob: &Blob) -> Result<Blob> {
	let mut decoder = GzDecoder::new(blob.as_slice());
	let mut decompressed_data = Vec::new();
	decoder
		.read_to_end(&mut decompressed_data)
		.map_err(|e| corrupt(TileCompression::Gzip, &e))?;
	Ok(Blob::from(decompressed_data))
}

/// Compresses data using Gzip.
#[cfg(any(test, feature = "test"))]
pub fn compress_gzip(blob: &Blob) -> Result<Blob> {
	let mut encoder = flate2::bufread::GzEncoder::new(blob.as_slice(), flate2::Compression::best());
	let mut compressed_data = Vec::new();
	encoder
		.read_to_end(&mut compressed_data)
		.map_err(|e| crate::Error::io("failed to compress data using Gzip", e))?;
	Ok(Blob::from(compressed_data))
}

#[cfg(test)]
mod tests {
	use super::super::generate_test_data;
	use super::*;

	#[test]
	fn should_compress_and_decompress_gzip_correctly() -> Result<()> {
		let data = generate_test_data(100_000);
		let compressed = compress_gzip(&data)?;
		assert_eq!(&compressed.as_slice()[0..2], &[0x1f, 0x8b]);
		let decompressed = decompress_gzip(&compressed)?;
		assert_eq!(data, decompressed, "Gzip compression and decompression failed");
		Ok(())
	}
}
