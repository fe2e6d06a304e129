//! This module provides the `ValueReaderSlice` struct for reading values from a byte slice.
//!
//! # Examples
//!
//! ```rust
//! use pmtiles_core::io::{ValueReader, ValueReaderSlice};
//!
//! let data = &[0x01, 0x02, 0x03, 0x04, 0xac, 0x02];
//!
//! let mut reader = ValueReaderSlice::new_le(data);
//! assert_eq!(reader.read_u32().unwrap(), 0x04030201);
//! assert_eq!(reader.read_varint().unwrap(), 300);
//! assert!(!reader.has_remaining());
//! ```

use super::{SeekRead, ValueReader};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use std::{
	io::{Cursor, Error, ErrorKind, Result},
	marker::PhantomData,
};

/// A struct that provides reading capabilities from a byte slice using a specified byte order.
pub struct ValueReaderSlice<'a, E: ByteOrder> {
	_phantom: PhantomData<E>,
	cursor: Cursor<&'a [u8]>,
	len: u64,
}

impl<'a, E: ByteOrder> ValueReaderSlice<'a, E> {
	#[must_use]
	pub fn new(slice: &'a [u8]) -> ValueReaderSlice<'a, E> {
		ValueReaderSlice {
			_phantom: PhantomData,
			len: slice.len() as u64,
			cursor: Cursor::new(slice),
		}
	}
}

impl<'a> ValueReaderSlice<'a, LittleEndian> {
	/// Creates a new `ValueReaderSlice` with little-endian byte order.
	#[must_use]
	pub fn new_le(slice: &'a [u8]) -> ValueReaderSlice<'a, LittleEndian> {
		ValueReaderSlice::new(slice)
	}
}

impl<'a> ValueReaderSlice<'a, BigEndian> {
	/// Creates a new `ValueReaderSlice` with big-endian byte order.
	#[must_use]
	pub fn new_be(slice: &'a [u8]) -> ValueReaderSlice<'a, BigEndian> {
		ValueReaderSlice::new(slice)
	}
}

impl SeekRead for Cursor<&[u8]> {}

impl<'a, E: ByteOrder + 'a> ValueReader<'a, E> for ValueReaderSlice<'a, E> {
	fn get_reader(&mut self) -> &mut dyn SeekRead {
		&mut self.cursor
	}

	fn len(&self) -> u64 {
		self.len
	}

	fn position(&mut self) -> u64 {
		self.cursor.position()
	}

	fn set_position(&mut self, position: u64) -> Result<()> {
		if position > self.len {
			return Err(Error::new(ErrorKind::InvalidInput, "set position outside length"));
		}
		self.cursor.set_position(position);
		Ok(())
	}
}
