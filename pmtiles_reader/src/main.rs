mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	name = "pmtiles-reader",
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Show the header of an archive
	Probe(tools::probe::Subcommand),

	/// Write a single tile to a file or stdout
	Get(tools::get::Subcommand),

	/// Print the metadata JSON of an archive
	Metadata(tools::metadata::Subcommand),

	/// Write all tiles of an archive into a z/x/y directory tree
	Extract(tools::extract::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Probe(arguments) => tools::probe::run(arguments),
		Commands::Get(arguments) => tools::get::run(arguments),
		Commands::Metadata(arguments) => tools::metadata::run(arguments),
		Commands::Extract(arguments) => tools::extract::run(arguments),
	}
}
