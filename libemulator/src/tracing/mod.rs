use std::{
    fmt::{self, Display},
    io::Write,
};

use libdeassembler::Deassembler;
use libisa::{Address, Word, REGISTER_COUNT};

use crate::Emulator;


/// Snapshot of the machine right before an instruction executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceLine {
    pub pc: Address,
    /// Memory at the program counter and the two bytes after it, zero past the end.
    pub bytes: [Word; 3],
    pub registers: [Word; REGISTER_COUNT],
    pub instruction: String,
}

impl Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc, self.bytes[0], self.bytes[1], self.bytes[2]
        )?;

        for register in self.registers {
            write!(f, " {:02X}", register)?;
        }

        write!(f, " | {}", self.instruction)
    }
}

impl<O> Emulator<O>
where
    O: Write,
{
    pub fn trace_line(&self) -> TraceLine {
        let pc = self.pc as usize;
        let bytes = [0, 1, 2].map(|offset| self.memory.get(pc + offset).unwrap_or(0));

        let instruction =
            Deassembler::new(self.memory.slice_from(self.pc).iter()).deassemble_instruction_text();

        TraceLine {
            pc: self.pc,
            bytes,
            registers: self.reg_file.array_clone(),
            instruction,
        }
    }
}
