//! Reader configuration, usually loaded from a YAML file.
//!
//! ```yaml
//! max_depth: 4
//! decompress_tiles: true
//! ```

use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("can not open config file '{path}'")]
	Open {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("can not parse config")]
	Parse(#[from] serde_yaml_ng::Error),

	#[error("invalid config: {0}")]
	Invalid(String),
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct ReaderConfig {
	/// Maximum number of directories visited by one lookup, the root directory included.
	pub max_depth: usize,

	/// Return tiles decompressed. When disabled, tiles are returned as stored in the archive.
	pub decompress_tiles: bool,
}

impl Default for ReaderConfig {
	fn default() -> Self {
		ReaderConfig {
			max_depth: 4,
			decompress_tiles: true,
		}
	}
}

impl ReaderConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
		let config: ReaderConfig = serde_yaml_ng::from_reader(reader)?;
		config.validate()
	}

	pub fn from_string(text: &str) -> Result<Self, ConfigError> {
		let config: ReaderConfig = serde_yaml_ng::from_str(text)?;
		config.validate()
	}

	pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
		let file = File::open(path).map_err(|source| ConfigError::Open {
			path: path.to_string_lossy().to_string(),
			source,
		})?;
		ReaderConfig::from_reader(BufReader::new(file))
	}

	fn validate(self) -> Result<Self, ConfigError> {
		if self.max_depth == 0 {
			return Err(ConfigError::Invalid("max_depth must be at least 1".to_string()));
		}
		Ok(self)
	}
}
