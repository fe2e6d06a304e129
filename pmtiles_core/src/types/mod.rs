//! Contains blobs, byte ranges, tile coordinates, the Hilbert tile id codec and compression types.

mod blob;
pub use blob::*;

mod byte_range;
pub use byte_range::*;

mod tile_compression;
pub use tile_compression::*;

mod tile_coord;
pub use tile_coord::*;

mod tile_hilbert_index;
pub use tile_hilbert_index::*;
