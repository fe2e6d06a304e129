use super::ReaderArgs;
use anyhow::{Context, Result};
use pmtiles_reader::PMTilesReader;
use std::path::{Path, PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// PMTiles archive
	filename: PathBuf,

	/// target directory, tiles are written to <DIRECTORY>/z/x/y.<extension>
	directory: PathBuf,

	#[command(flatten)]
	reader: ReaderArgs,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("extract {:?} to {:?}", arguments.filename, arguments.directory);

	let reader = arguments.reader.open(&arguments.filename)?;
	let count = extract(&reader, &arguments.directory)?;

	eprintln!("{count} tiles extracted");
	Ok(())
}

fn extract(reader: &PMTilesReader, directory: &Path) -> Result<u64> {
	let header = reader.header();
	let mut extension = header.tile_type.extension().to_string();
	if !reader.config().decompress_tiles
		&& let Some(compression) = header.tile_compression.as_value()
	{
		extension.push_str(compression.extension());
	}

	let mut count = 0;
	for item in reader.tiles() {
		let (coord, tile) = item?;
		let folder = directory.join(coord.level.to_string()).join(coord.x.to_string());
		std::fs::create_dir_all(&folder).with_context(|| format!("creating {folder:?}"))?;

		let path = folder.join(format!("{}{extension}", coord.y));
		log::trace!("write {path:?}");
		std::fs::write(&path, tile.as_slice()).with_context(|| format!("writing {path:?}"))?;
		count += 1;
	}
	Ok(count)
}
