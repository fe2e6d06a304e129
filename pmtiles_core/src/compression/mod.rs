//! # Compression Module
//!
//! Decompresses the byte ranges of an archive according to the compression tag found in its
//! header. [`Decompressor`] is the seam for plugging in other codec implementations; the
//! [`DefaultDecompressor`] handles gzip, brotli and zstd.
//!
//! ## Usage
//! ```rust
//! use pmtiles_core::{compression::*, *};
//!
//! let data = Blob::from("hello");
//! assert_eq!(decompress(data.clone(), TileCompression::Uncompressed).unwrap(), data);
//! ```

mod functions;
mod method_brotli;
mod method_gzip;
mod method_zstd;

pub use functions::*;
pub use method_brotli::*;
pub use method_gzip::*;
pub use method_zstd::*;

#[cfg(test)]
pub(crate) fn generate_test_data(size: usize) -> crate::Blob {
	let mut seed = 0x2545_f491_u32;
	(0..size)
		.map(|i| {
			seed ^= seed << 13;
			seed ^= seed >> 17;
			seed ^= seed << 5;
			// mostly text-like bytes with some noise, so every codec has something to do
			if i % 7 == 0 { (seed & 0xff) as u8 } else { b'a' + (seed % 8) as u8 }
		})
		.collect::<Vec<u8>>()
		.into()
}
