use super::ReaderArgs;
use anyhow::Result;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// PMTiles archive
	filename: PathBuf,

	#[command(flatten)]
	reader: ReaderArgs,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let reader = arguments.reader.open(&arguments.filename)?;
	println!("{}", serde_json::to_string_pretty(&reader.metadata()?)?);
	Ok(())
}
