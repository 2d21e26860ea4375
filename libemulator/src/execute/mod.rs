use std::io::{self, Write};

use libisa::{
    instruction::{Instruction, InstructionDeassemblyError},
    Address, Register, Word,
};
use log::{debug, trace, warn};
use thiserror::Error;

use crate::{alu::ALUError, memory::Memory, Emulator};

mod parsed;
mod stack;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOk {
    Normal,
    Halted,
}

#[derive(Debug, Error)]
pub enum ExecuteErr {
    #[error("Memory access violation at {0:#X}")]
    MemoryAccessViolation(usize),

    #[error("Illegal instruction ({0})")]
    IllegalInstruction(#[from] InstructionDeassemblyError),

    #[error("Instruction {0} is missing an operand")]
    MalformedInstruction(Instruction),

    #[error("Illegal register %{0}")]
    IllegalRegister(Register),

    #[error("Stack overflow (stack pointer {0:#04X})")]
    StackOverflow(Address),

    #[error("Stack underflow (stack pointer {0:#04X})")]
    StackUnderflow(Address),

    #[error(transparent)]
    ALU(#[from] ALUError),

    #[error("Couldn't write program output: {0}")]
    Output(#[from] io::Error),
}

impl<O> Emulator<O>
where
    O: Write,
{
    pub fn execute_to_halt(&mut self) -> Result<(), ExecuteErr> {
        self.running = true;

        while self.running {
            self.execute_instruction()?;
        }

        Ok(())
    }

    /// Executes the instruction at the program counter. On error the program counter
    /// is left pointing at the faulting instruction.
    pub fn execute_instruction(&mut self) -> Result<ExecuteOk, ExecuteErr> {
        trace!("{}", self.trace_line());

        let result = self
            .parse_next_instruction()
            .and_then(|instruction| self.execute_parsed_instruction(instruction))
            .inspect_err(|e| warn!("Fault at {:#04X}: {}", self.pc, e))?;

        if result == ExecuteOk::Halted {
            debug!("Halted at {:#04X}", self.pc);
        }

        Ok(result)
    }

    fn parse_next_instruction(&self) -> Result<Instruction, ExecuteErr> {
        let kind = Instruction::deassemble_opcode(self.memory.byte(self.pc))?;

        let operands = (1..=kind.operand_count())
            .map(|offset| {
                let addr = self.pc as usize + offset;
                self.memory
                    .get(addr)
                    .ok_or(ExecuteErr::MemoryAccessViolation(addr))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Instruction::deassemble_operands(kind, &operands)?)
    }

    /// Address of the instruction following the one at the program counter.
    fn next_pc(&self, instruction: &Instruction) -> Result<Address, ExecuteErr> {
        Memory::offset(self.pc, instruction.width()).ok_or(ExecuteErr::MemoryAccessViolation(
            self.pc as usize + instruction.width(),
        ))
    }

    pub fn reg(&self, index: Register) -> Result<Word, ExecuteErr> {
        self.reg_file
            .register(index)
            .ok_or(ExecuteErr::IllegalRegister(index))
    }

    pub fn reg_mut(&mut self, index: Register) -> Result<&mut Word, ExecuteErr> {
        self.reg_file
            .register_mut(index)
            .ok_or(ExecuteErr::IllegalRegister(index))
    }
}
