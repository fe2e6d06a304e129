use super::{PMTilesCompression, PMTilesType};
use pmtiles_core::{
	Blob, ByteRange, Error, Result,
	io::{ValueReader, ValueReaderSlice},
};

const MAGIC: &[u8; 7] = b"PMTiles";
const VERSION: u8 = 3;

#[derive(Debug, PartialEq)]
pub struct HeaderV3 {
	pub root_dir: ByteRange,
	pub metadata: ByteRange,
	pub leaf_dirs: ByteRange,
	pub tile_data: ByteRange,
	pub addressed_tiles_count: u64,
	pub tile_entries_count: u64,
	pub tile_contents_count: u64,
	pub clustered: bool,
	pub internal_compression: PMTilesCompression,
	pub tile_compression: PMTilesCompression,
	pub tile_type: PMTilesType,
	pub min_zoom: u8,
	pub max_zoom: u8,
	pub min_lon_e7: i32,
	pub min_lat_e7: i32,
	pub max_lon_e7: i32,
	pub max_lat_e7: i32,
	pub center_zoom: u8,
	pub center_lon_e7: i32,
	pub center_lat_e7: i32,
}

impl HeaderV3 {
	/// Decodes the fixed 127 byte header. Extra trailing bytes are ignored.
	pub fn deserialize(blob: &Blob) -> Result<Self> {
		let buffer = blob.as_slice();

		if buffer.len() < 127 {
			return Err(Error::MalformedHeader(format!(
				"header needs {} bytes, got {}",
				HeaderV3::len(),
				buffer.len()
			)));
		}
		if &buffer[0..7] != MAGIC {
			return Err(Error::MalformedHeader("pmtiles magic number exception".to_string()));
		}
		if buffer[7] != VERSION {
			return Err(Error::MalformedHeader(format!(
				"pmtiles version: must be {VERSION}, got {}",
				buffer[7]
			)));
		}

		let mut reader = ValueReaderSlice::new_le(&buffer[8..127]);
		Self::read_fields(&mut reader).map_err(|e| match e {
			ReadError::Io(e) => Error::MalformedHeader(e.to_string()),
			ReadError::Tag(e) => e,
		})
	}

	fn read_fields(reader: &mut ValueReaderSlice<'_, byteorder::LittleEndian>) -> std::result::Result<Self, ReadError> {
		Ok(Self {
			root_dir: ByteRange::new(reader.read_u64()?, reader.read_u64()?),
			metadata: ByteRange::new(reader.read_u64()?, reader.read_u64()?),
			leaf_dirs: ByteRange::new(reader.read_u64()?, reader.read_u64()?),
			tile_data: ByteRange::new(reader.read_u64()?, reader.read_u64()?),
			addressed_tiles_count: reader.read_u64()?,
			tile_entries_count: reader.read_u64()?,
			tile_contents_count: reader.read_u64()?,
			clustered: reader.read_u8()? == 1,
			internal_compression: PMTilesCompression::from_u8(reader.read_u8()?)?,
			tile_compression: PMTilesCompression::from_u8(reader.read_u8()?)?,
			tile_type: PMTilesType::from_u8(reader.read_u8()?)?,
			min_zoom: reader.read_u8()?,
			max_zoom: reader.read_u8()?,
			min_lon_e7: reader.read_i32()?,
			min_lat_e7: reader.read_i32()?,
			max_lon_e7: reader.read_i32()?,
			max_lat_e7: reader.read_i32()?,
			center_zoom: reader.read_u8()?,
			center_lon_e7: reader.read_i32()?,
			center_lat_e7: reader.read_i32()?,
		})
	}

	pub fn len() -> u64 {
		127
	}

	/// Bounds as `[min_lon, min_lat, max_lon, max_lat]` in degrees.
	pub fn bounds(&self) -> [f64; 4] {
		[
			e7_to_degrees(self.min_lon_e7),
			e7_to_degrees(self.min_lat_e7),
			e7_to_degrees(self.max_lon_e7),
			e7_to_degrees(self.max_lat_e7),
		]
	}

	/// Center as `[lon, lat, zoom]`.
	pub fn center(&self) -> [f64; 3] {
		[
			e7_to_degrees(self.center_lon_e7),
			e7_to_degrees(self.center_lat_e7),
			f64::from(self.center_zoom),
		]
	}
}

fn e7_to_degrees(value: i32) -> f64 {
	f64::from(value) / 1e7
}

enum ReadError {
	Io(std::io::Error),
	Tag(Error),
}

impl From<std::io::Error> for ReadError {
	fn from(error: std::io::Error) -> Self {
		ReadError::Io(error)
	}
}

impl From<Error> for ReadError {
	fn from(error: Error) -> Self {
		ReadError::Tag(error)
	}
}
