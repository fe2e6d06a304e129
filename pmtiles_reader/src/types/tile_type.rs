use pmtiles_core::{Error, Result};

/// Tile format tag as stored in the header.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PMTilesType {
	UNKNOWN = 0x0,
	MVT = 0x1,
	PNG = 0x2,
	JPEG = 0x3,
	WEBP = 0x4,
	AVIF = 0x5,
}

impl PMTilesType {
	pub fn from_u8(value: u8) -> Result<Self> {
		match value {
			0 => Ok(PMTilesType::UNKNOWN),
			1 => Ok(PMTilesType::MVT),
			2 => Ok(PMTilesType::PNG),
			3 => Ok(PMTilesType::JPEG),
			4 => Ok(PMTilesType::WEBP),
			5 => Ok(PMTilesType::AVIF),
			_ => Err(Error::MalformedHeader(format!("unknown value {value} for PMTiles type"))),
		}
	}

	/// File extension for extracted tiles, including the leading dot.
	pub fn extension(&self) -> &str {
		match self {
			PMTilesType::UNKNOWN => ".bin",
			PMTilesType::MVT => ".pbf",
			PMTilesType::PNG => ".png",
			PMTilesType::JPEG => ".jpg",
			PMTilesType::WEBP => ".webp",
			PMTilesType::AVIF => ".avif",
		}
	}

	pub fn as_str(&self) -> &str {
		match self {
			PMTilesType::UNKNOWN => "unknown",
			PMTilesType::MVT => "mvt",
			PMTilesType::PNG => "png",
			PMTilesType::JPEG => "jpeg",
			PMTilesType::WEBP => "webp",
			PMTilesType::AVIF => "avif",
		}
	}
}
