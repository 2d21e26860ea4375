use std::fmt::Display;

use kind::InstructionKind;
use thiserror::Error;

use crate::{Immediate, Register, Word};

pub mod assembler;
pub mod kind;


#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("Missing register operand for {0}")]
    MissingRegister(InstructionKind),

    #[error("Missing immediate for {0}")]
    MissingImmediate(InstructionKind),

    #[error("Register %{0} doesn't fit in an operand byte")]
    RegisterTooWide(Register),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InstructionDeassemblyError {
    #[error("Unrecognized opcode {0:#010b}")]
    UnrecognizedOpcode(Word),

    #[error("Expected {expected} operand bytes, got {actual}")]
    MissingOperands { expected: usize, actual: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub reg_a: Option<Register>,
    pub reg_b: Option<Register>,
    pub immediate: Option<Immediate>,
}

impl Instruction {
    pub const fn new(kind: InstructionKind) -> Self {
        Self {
            kind,
            reg_a: None,
            reg_b: None,
            immediate: None,
        }
    }

    pub const fn with_reg_a(mut self, reg_a: Register) -> Self {
        self.reg_a = Some(reg_a);
        self
    }

    pub const fn with_reg_b(mut self, reg_b: Register) -> Self {
        self.reg_b = Some(reg_b);
        self
    }

    pub const fn with_immediate(mut self, immediate: Immediate) -> Self {
        self.immediate = Some(immediate);
        self
    }

    pub fn width(&self) -> usize {
        self.kind.width()
    }

    pub fn assemble(self) -> Result<Vec<u8>, AssemblyError> {
        let mut output = Vec::with_capacity(self.width());
        output.push(self.kind.opcode());

        if self.kind.has_reg_a() {
            let reg_a = self.reg_a.ok_or(AssemblyError::MissingRegister(self.kind))?;
            output.push(register_byte(reg_a)?);
        }

        if self.kind.has_reg_b() {
            let reg_b = self.reg_b.ok_or(AssemblyError::MissingRegister(self.kind))?;
            output.push(register_byte(reg_b)?);
        }

        if self.kind.has_immediate() {
            let immediate = self
                .immediate
                .ok_or(AssemblyError::MissingImmediate(self.kind))?;
            output.push(immediate);
        }

        Ok(output)
    }

    pub fn deassemble_opcode(opcode: Word) -> Result<InstructionKind, InstructionDeassemblyError> {
        InstructionKind::from_opcode(opcode)
            .ok_or(InstructionDeassemblyError::UnrecognizedOpcode(opcode))
    }

    /// Builds an instruction from its kind and the operand bytes that follow the opcode.
    /// Register operands aren't range checked here, that's up to whoever executes them.
    pub fn deassemble_operands(
        kind: InstructionKind,
        operands: &[Word],
    ) -> Result<Self, InstructionDeassemblyError> {
        let expected = kind.operand_count();
        if operands.len() < expected {
            return Err(InstructionDeassemblyError::MissingOperands {
                expected,
                actual: operands.len(),
            });
        }

        let mut instruction = Self::new(kind);

        if kind.has_reg_a() {
            instruction.reg_a = Some(operands[0] as Register);
        }

        if kind.has_reg_b() {
            instruction.reg_b = Some(operands[1] as Register);
        }

        if kind.has_immediate() {
            instruction.immediate = Some(operands[1]);
        }

        Ok(instruction)
    }

    pub fn deassemble(bytes: &[Word]) -> Result<Self, InstructionDeassemblyError> {
        let (&opcode, operands) =
            bytes
                .split_first()
                .ok_or(InstructionDeassemblyError::MissingOperands {
                    expected: 1,
                    actual: 0,
                })?;

        let kind = Self::deassemble_opcode(opcode)?;
        Self::deassemble_operands(kind, operands)
    }
}

fn register_byte(register: Register) -> Result<Word, AssemblyError> {
    Word::try_from(register).map_err(|_| AssemblyError::RegisterTooWide(register))
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.kind))?;

        if let Some(reg_a) = self.reg_a {
            f.write_fmt(format_args!(" %{}", reg_a))?;
        }

        if let Some(reg_b) = self.reg_b {
            f.write_fmt(format_args!(", %{}", reg_b))?;
        }

        if let Some(immediate) = self.immediate {
            f.write_fmt(format_args!(", ${}", immediate))?;
        }

        Ok(())
    }
}
