//! Read-only access to PMTiles v3 archives.
//!
//! [`PMTilesReader`] resolves `z/x/y` coordinates to tiles, returns the metadata JSON and
//! enumerates all tiles through [`TileIterator`]. The byte source, decompressor and error types
//! live in [`pmtiles_core`].

mod config;
pub use config::*;

mod reader;
pub use reader::*;

mod traversal;
pub use traversal::*;

pub mod types;
