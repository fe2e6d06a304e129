//! Contains the building blocks of the PMTiles reader: blobs, byte ranges, tile coordinates,
//! the Hilbert tile id codec, positional byte sources and decompression.

pub mod macros;

pub mod compression;

mod error;
pub use error::*;

pub mod io;

#[cfg(any(test, feature = "test"))]
pub mod testing;

pub mod types;
pub use types::*;
