//! This module defines the `ValueReader` trait for decoding integers and varints from bytes.
//!
//! Reads return plain [`std::io::Result`]s: the caller knows whether it is decoding a header or a
//! directory and maps failures into the matching [`crate::Error`] variant.

use byteorder::{ByteOrder, ReadBytesExt};
use std::io::{Error, ErrorKind, Read, Result, Seek};

/// A simple alias for types implementing both `Seek` and `Read`, used for convenience.
pub trait SeekRead: Seek + Read {}

/// A trait for reading values with support for different byte orders.
pub trait ValueReader<'a, E: ByteOrder + 'a> {
	/// Returns the underlying reader to access raw bytes.
	fn get_reader(&mut self) -> &mut dyn SeekRead;

	/// Returns the total length of the readable data.
	fn len(&self) -> u64;

	/// Returns the current position within the readable data.
	fn position(&mut self) -> u64;

	/// Sets the current position within the readable data.
	fn set_position(&mut self, position: u64) -> Result<()>;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the number of bytes remaining to be read.
	fn remaining(&mut self) -> u64 {
		self.len().saturating_sub(self.position())
	}

	fn has_remaining(&mut self) -> bool {
		self.remaining() > 0
	}

	/// Reads a variable-length unsigned integer (LEB128 varint).
	///
	/// # Errors
	/// Fails with `UnexpectedEof` if the data ends inside the varint, or with `InvalidData` if
	/// the varint does not fit into a `u64` (more than 10 bytes).
	fn read_varint(&mut self) -> Result<u64> {
		let mut value = 0u64;
		let mut shift = 0;
		loop {
			let byte = self.get_reader().read_u8()?;
			if shift == 63 && byte > 1 {
				return Err(Error::new(ErrorKind::InvalidData, "varint overflows u64"));
			}
			value |= (u64::from(byte) & 0x7F) << shift;
			if byte & 0x80 == 0 {
				break;
			}
			shift += 7;
		}
		Ok(value)
	}

	fn read_u8(&mut self) -> Result<u8> {
		self.get_reader().read_u8()
	}

	fn read_i32(&mut self) -> Result<i32> {
		self.get_reader().read_i32::<E>()
	}

	fn read_u32(&mut self) -> Result<u32> {
		self.get_reader().read_u32::<E>()
	}

	fn read_u64(&mut self) -> Result<u64> {
		self.get_reader().read_u64::<E>()
	}

	/// Reads exactly `length` raw bytes.
	fn read_bytes(&mut self, length: usize) -> Result<Vec<u8>> {
		let mut buffer = vec![0; length];
		self.get_reader().read_exact(&mut buffer)?;
		Ok(buffer)
	}
}
