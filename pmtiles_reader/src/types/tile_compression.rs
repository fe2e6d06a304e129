use pmtiles_core::{Error, Result, TileCompression};

/// Compression tag as stored in the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PMTilesCompression {
	Unknown = 0x0,
	None = 0x1,
	Gzip = 0x2,
	Brotli = 0x3,
	Zstd = 0x4,
}

impl PMTilesCompression {
	pub fn from_u8(value: u8) -> Result<Self> {
		match value {
			0 => Ok(PMTilesCompression::Unknown),
			1 => Ok(PMTilesCompression::None),
			2 => Ok(PMTilesCompression::Gzip),
			3 => Ok(PMTilesCompression::Brotli),
			4 => Ok(PMTilesCompression::Zstd),
			_ => Err(Error::MalformedHeader(format!(
				"unknown value {value} for PMTiles compression"
			))),
		}
	}

	/// Maps the tag to a decompression method. `Unknown` has none.
	pub fn as_value(&self) -> Option<TileCompression> {
		match self {
			PMTilesCompression::Unknown => None,
			PMTilesCompression::None => Some(TileCompression::Uncompressed),
			PMTilesCompression::Gzip => Some(TileCompression::Gzip),
			PMTilesCompression::Brotli => Some(TileCompression::Brotli),
			PMTilesCompression::Zstd => Some(TileCompression::Zstd),
		}
	}

	pub fn as_str(&self) -> &str {
		match self {
			PMTilesCompression::Unknown => "unknown",
			PMTilesCompression::None => "none",
			PMTilesCompression::Gzip => "gzip",
			PMTilesCompression::Brotli => "brotli",
			PMTilesCompression::Zstd => "zstd",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, PMTilesCompression::Unknown, None)]
	#[case(1, PMTilesCompression::None, Some(TileCompression::Uncompressed))]
	#[case(2, PMTilesCompression::Gzip, Some(TileCompression::Gzip))]
	#[case(3, PMTilesCompression::Brotli, Some(TileCompression::Brotli))]
	#[case(4, PMTilesCompression::Zstd, Some(TileCompression::Zstd))]
	fn from_u8(#[case] value: u8, #[case] expected: PMTilesCompression, #[case] method: Option<TileCompression>) {
		let compression = PMTilesCompression::from_u8(value).unwrap();
		assert_eq!(compression, expected);
		assert_eq!(compression as u8, value);
		assert_eq!(compression.as_value(), method);
	}

	#[test]
	fn unknown_tag() {
		let error = PMTilesCompression::from_u8(5).unwrap_err();
		assert_eq!(
			error.to_string(),
			"malformed header: unknown value 5 for PMTiles compression"
		);
	}
}
