mod test_utilities;

use assert_fs::{TempDir, prelude::*};
use pmtiles_core::TileCompression;
use predicates::{prelude::*, str};
use rstest::rstest;
use test_utilities::*;

#[test]
fn command() {
	pmtiles_cmd()
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} [OPTIONS] <COMMAND>")));
}

#[rstest]
#[case("probe", "[OPTIONS] <FILENAME>")]
#[case("get", "[OPTIONS] <FILENAME> <Z> <X> <Y>")]
#[case("metadata", "[OPTIONS] <FILENAME>")]
#[case("extract", "[OPTIONS] <FILENAME> <DIRECTORY>")]
fn subcommand(#[case] sub_command: &str, #[case] usage: &str) {
	pmtiles_cmd()
		.arg(sub_command)
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} {sub_command} {usage}")));
}

#[test]
fn get_to_stdout() {
	let file = write_archive(&pyramid_archive(TileCompression::Gzip, TileCompression::Gzip));
	pmtiles_cmd()
		.args(["get", file.path().to_str().unwrap(), "2", "3", "1"])
		.assert()
		.success()
		.stdout("2/3/1");
}

#[test]
fn get_missing_tile() {
	let file = write_archive(&pyramid_archive(TileCompression::Gzip, TileCompression::Gzip));
	pmtiles_cmd()
		.args(["get", file.path().to_str().unwrap(), "5", "0", "0"])
		.assert()
		.failure()
		.code(1)
		.stdout(str::is_empty())
		.stderr(str::contains("tile not found"));
}

#[test]
fn metadata() {
	let file = write_archive(&pyramid_archive(TileCompression::Brotli, TileCompression::Gzip));
	pmtiles_cmd()
		.args(["metadata", file.path().to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::contains("\"name\": \"pyramid\"").and(str::contains("\"maxzoom\": 3")));
}

#[test]
fn probe_deep() {
	let file = write_archive(&pyramid_archive(TileCompression::Gzip, TileCompression::Gzip));
	pmtiles_cmd()
		.args(["probe", "--deep", file.path().to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::contains("addressed tiles: 85\n").and(str::ends_with("tiles: 85\n")));
}

#[test]
fn extract() {
	let file = write_archive(&pyramid_archive(TileCompression::Zstd, TileCompression::Gzip));
	let target = TempDir::new().unwrap();
	pmtiles_cmd()
		.args(["extract", file.path().to_str().unwrap(), target.path().to_str().unwrap()])
		.assert()
		.success()
		.stderr(str::contains("85 tiles extracted"));

	target.child("1/1/0.pbf").assert("1/1/0");
	target.child("3/7/0.pbf").assert("ocean");
}

#[test]
fn broken_archive() {
	let file = write_archive(&[b'x'; 200]);
	pmtiles_cmd()
		.args(["probe", file.path().to_str().unwrap()])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("malformed header: pmtiles magic number exception"));
}
