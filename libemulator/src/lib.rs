use std::io::{self, Stdout, Write};

use alu::ALU;
use anyhow::anyhow;
use libisa::Address;
use memory::Memory;
use regfile::RegFile;

pub mod alu;
pub mod execute;
pub mod memory;
pub mod regfile;
pub mod tracing;

pub use execute::{ExecuteErr, ExecuteOk};

pub struct Emulator<O = Stdout>
where
    O: Write,
{
    pub memory: Memory,
    pub reg_file: RegFile,
    pub alu: ALU,
    pub pc: Address,
    pub running: bool,

    /// Length of the loaded program, the stack may not grow into it.
    pub program_len: usize,

    /// Sink for everything the program prints.
    pub output: O,
}

impl Emulator<Stdout> {
    pub fn new(program: Vec<u8>) -> anyhow::Result<Self> {
        Self::with_output(program, io::stdout())
    }
}

impl<O> Emulator<O>
where
    O: Write,
{
    pub fn with_output(program: Vec<u8>, output: O) -> anyhow::Result<Self> {
        if program.len() > libisa::MEMORY_SIZE {
            return Err(anyhow!(
                "Program ({} bytes) doesn't fit into memory ({} bytes)",
                program.len(),
                libisa::MEMORY_SIZE
            ));
        }

        Ok(Self {
            program_len: program.len(),
            memory: Memory::new(&program),
            reg_file: RegFile::new(),
            alu: ALU::new(),
            pc: 0,
            running: false,
            output,
        })
    }
}
