#![allow(unused)]

use assert_cmd::{Command, cargo};
use assert_fs::{NamedTempFile, prelude::*};
use pmtiles_core::{
	HilbertIndex, TileCompression, TileCoord,
	testing::{ArchiveBuilder, TestEntry},
};

#[cfg(windows)]
pub const BINARY_NAME: &str = "pmtiles-reader.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "pmtiles-reader";

/// Helper to create a Command for the pmtiles-reader binary.
pub fn pmtiles_cmd() -> Command {
	Command::new(cargo::cargo_bin!("pmtiles-reader"))
}

pub fn tile_id(z: u8, x: u32, y: u32) -> u64 {
	TileCoord::new(z, x, y).unwrap().get_hilbert_index().unwrap()
}

/// An archive covering levels 0 to 3 completely.
///
/// Level 0 and 1 sit in the root directory, level 2 in one leaf directory and level 3 in two
/// leaf directories below a second level of leaves. Every tile contains its coordinate as
/// text, except for the last 16 tiles of level 3, which share the content "ocean".
pub fn pyramid_archive(internal: TileCompression, tile: TileCompression) -> Vec<u8> {
	let mut builder = ArchiveBuilder::new(internal, tile);
	builder.set_metadata(r#"{"name":"pyramid","minzoom":0,"maxzoom":3}"#);

	let mut root = Vec::new();
	for id in 0..5 {
		root.push(text_entry(&mut builder, id));
	}

	let level2 = (5..21).map(|id| text_entry(&mut builder, id)).collect::<Vec<_>>();
	root.push(builder.leaf_entry(5, &level2).unwrap());

	let first = (21..53).map(|id| text_entry(&mut builder, id)).collect::<Vec<_>>();
	let mut second = (53..69).map(|id| text_entry(&mut builder, id)).collect::<Vec<_>>();
	second.push(builder.tile_entry(69, 16, b"ocean").unwrap());
	let level3 = [
		builder.leaf_entry(21, &first).unwrap(),
		builder.leaf_entry(53, &second).unwrap(),
	];
	root.push(builder.leaf_entry(21, &level3).unwrap());

	builder.build(&root).unwrap().into_vec()
}

fn text_entry(builder: &mut ArchiveBuilder, id: u64) -> TestEntry {
	let coord = TileCoord::from_hilbert_index(id).unwrap();
	builder.tile_entry(id, 1, coord.to_string().as_bytes()).unwrap()
}

pub fn write_archive(data: &[u8]) -> NamedTempFile {
	let file = NamedTempFile::new("test.pmtiles").unwrap();
	file.write_binary(data).unwrap();
	file
}
