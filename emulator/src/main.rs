use std::{path::PathBuf, process::exit};

use clap::Parser;
use libemulator::Emulator;
use libisa::image;
use log::{debug, LevelFilter};

mod command;
mod monitor;

const EXIT_LOAD_FAILURE: i32 = 1;
const EXIT_FAULT: i32 = 2;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Program image, one binary literal per line
    program_path: PathBuf,

    /// Log machine state before every instruction
    #[arg(short, long)]
    trace: bool,

    /// Start the interactive monitor instead of running to halt
    #[arg(short, long)]
    monitor: bool,
}

fn main() {
    let args = Args::parse();
    init_logger(args.trace);

    let program = match image::load_program(&args.program_path) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Failed to load program: {}", e);
            exit(EXIT_LOAD_FAILURE);
        }
    };

    let mut emulator = match Emulator::new(program) {
        Ok(emulator) => emulator,
        Err(e) => {
            eprintln!("Failed to load program: {}", e);
            exit(EXIT_LOAD_FAILURE);
        }
    };

    if args.monitor {
        if let Err(e) = monitor::run(&mut emulator) {
            eprintln!("Monitor stopped: {:#}", e);
            exit(EXIT_FAULT);
        }

        return;
    }

    if let Err(e) = emulator.execute_to_halt() {
        eprintln!("{} at {:#04X}", e, emulator.pc);
        exit(EXIT_FAULT);
    }

    debug!("Program halted normally");
}

fn init_logger(trace: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);

    if trace {
        builder.filter_module("libemulator", LevelFilter::Trace);
    }

    // RUST_LOG takes precedence over the flags.
    builder.parse_default_env().init();
}
