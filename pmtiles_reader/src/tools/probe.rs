use super::ReaderArgs;
use anyhow::Result;
use pmtiles_reader::PMTilesReader;
use std::{io::Write, path::PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// PMTiles archive you want to probe
	#[arg(required = true)]
	filename: PathBuf,

	/// also walk all directories and count the tiles
	#[arg(long, short)]
	deep: bool,

	#[command(flatten)]
	reader: ReaderArgs,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("probe {:?}", arguments.filename);

	let reader = arguments.reader.open(&arguments.filename)?;
	print_probe(&reader, arguments.deep, &mut std::io::stdout().lock())
}

fn print_probe(reader: &PMTilesReader, deep: bool, out: &mut impl Write) -> Result<()> {
	let header = reader.header();
	writeln!(out, "source: {}", reader.source_name())?;
	writeln!(out, "root directory: {:?}", header.root_dir)?;
	writeln!(out, "metadata: {:?}", header.metadata)?;
	writeln!(out, "leaf directories: {:?}", header.leaf_dirs)?;
	writeln!(out, "tile data: {:?}", header.tile_data)?;
	writeln!(out, "addressed tiles: {}", header.addressed_tiles_count)?;
	writeln!(out, "tile entries: {}", header.tile_entries_count)?;
	writeln!(out, "tile contents: {}", header.tile_contents_count)?;
	writeln!(out, "clustered: {}", header.clustered)?;
	writeln!(out, "internal compression: {}", header.internal_compression.as_str())?;
	writeln!(out, "tile compression: {}", header.tile_compression.as_str())?;
	writeln!(out, "tile type: {}", header.tile_type.as_str())?;
	writeln!(out, "zoom: {}..={}", header.min_zoom, header.max_zoom)?;
	writeln!(out, "bounds: {:?}", header.bounds())?;
	writeln!(out, "center: {:?}", header.center())?;

	if deep {
		let mut count: u64 = 0;
		for item in reader.tiles() {
			item?;
			count += 1;
		}
		writeln!(out, "tiles: {count}")?;
	}
	Ok(())
}
