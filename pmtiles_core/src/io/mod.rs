//! Byte sources and value readers.
//!
//! - [`DataReaderTrait`] is the positional byte source the archive reader pulls all of its bytes
//!   from. [`DataReaderFile`] and [`DataReaderBlob`] implement it for files and memory.
//! - [`ValueReader`] and [`ValueReaderSlice`] decode little-endian integers and varints from
//!   bytes that were already read.

mod data_reader;
mod data_reader_blob;
mod data_reader_file;
mod value_reader;
mod value_reader_slice;

pub use data_reader::*;
pub use data_reader_blob::*;
pub use data_reader_file::*;
pub use value_reader::*;
pub use value_reader_slice::*;
