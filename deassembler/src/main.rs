use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use libdeassembler::Deassembler;
use libisa::image;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Prints the instructions in an LS-8 program image")]
pub struct Args {
    /// Program image, one binary literal per line
    program_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let program = image::load_program(&args.program_path)
        .context("Error reading program file")?;

    let deassembler = Deassembler::new(program.iter());
    print!("{}", deassembler.deassemble_text());

    Ok(())
}
