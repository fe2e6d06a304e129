use super::ReaderArgs;
use anyhow::{Context, Result, bail};
use std::{io::Write, path::PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// PMTiles archive
	filename: PathBuf,

	/// zoom level
	z: u32,

	/// column
	x: u32,

	/// row, counted from the top
	y: u32,

	/// write the tile to this file instead of stdout
	#[arg(long, short, value_name = "FILE")]
	output: Option<PathBuf>,

	#[command(flatten)]
	reader: ReaderArgs,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let reader = arguments.reader.open(&arguments.filename)?;

	let Some(tile) = reader.get(arguments.z, arguments.x, arguments.y)? else {
		bail!("tile not found");
	};
	log::debug!(
		"tile {}/{}/{} has {} bytes",
		arguments.z,
		arguments.x,
		arguments.y,
		tile.len()
	);

	match &arguments.output {
		Some(path) => std::fs::write(path, tile.as_slice()).with_context(|| format!("writing {path:?}"))?,
		None => std::io::stdout().lock().write_all(tile.as_slice())?,
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use assert_fs::{TempDir, prelude::*};
	use pmtiles_core::{TileCompression, testing::ArchiveBuilder};

	fn write_archive(dir: &TempDir) -> std::path::PathBuf {
		let mut builder = ArchiveBuilder::new(TileCompression::Gzip, TileCompression::Gzip);
		let entry = builder.tile_entry(0, 1, b"world").unwrap();
		let file = dir.child("world.pmtiles");
		file.write_binary(builder.build(&[entry]).unwrap().as_slice()).unwrap();
		file.path().to_path_buf()
	}

	#[test]
	fn write_tile() {
		let dir = TempDir::new().unwrap();
		let archive = write_archive(&dir);
		let output = dir.child("tile.pbf");
		run_command(vec![
			"pmtiles-reader",
			"get",
			archive.to_str().unwrap(),
			"0",
			"0",
			"0",
			"-o",
			output.path().to_str().unwrap(),
		])
		.unwrap();
		output.assert("world");
	}

	#[test]
	fn missing_tile() {
		let dir = TempDir::new().unwrap();
		let archive = write_archive(&dir);
		let error = run_command(vec!["pmtiles-reader", "get", archive.to_str().unwrap(), "1", "0", "0"]).unwrap_err();
		assert_eq!(error.to_string(), "tile not found");
	}

	#[test]
	fn invalid_coordinate() {
		let dir = TempDir::new().unwrap();
		let archive = write_archive(&dir);
		let error = run_command(vec!["pmtiles-reader", "get", archive.to_str().unwrap(), "1", "2", "0"]).unwrap_err();
		assert_eq!(
			error.to_string(),
			"invalid tile coordinate: x (2) and y (0) must be < 2 on level 1"
		);
	}
}
