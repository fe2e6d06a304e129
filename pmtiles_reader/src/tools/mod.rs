pub mod extract;
pub mod get;
pub mod metadata;
pub mod probe;

use anyhow::{Context, Result};
use pmtiles_reader::{PMTilesReader, ReaderConfig};
use pmtiles_core::io::DataReaderFile;
use std::path::{Path, PathBuf};

/// Options shared by all subcommands.
#[derive(clap::Args, Debug)]
pub struct ReaderArgs {
	/// YAML file with reader settings (max_depth, decompress_tiles)
	#[arg(long, value_name = "FILE")]
	config: Option<PathBuf>,
}

impl ReaderArgs {
	pub fn open(&self, filename: &Path) -> Result<PMTilesReader> {
		let config = match &self.config {
			Some(path) => ReaderConfig::from_path(path).with_context(|| format!("loading config {path:?}"))?,
			None => ReaderConfig::default(),
		};
		log::debug!("reader config: {config:?}");

		let data_reader = DataReaderFile::open(filename)?;
		PMTilesReader::open_reader_with_config(data_reader, config).with_context(|| format!("opening {filename:?}"))
	}
}
