use std::iter::Peekable;

use libisa::instruction::{Instruction, InstructionDeassemblyError};


pub type DeassemblyResult = Result<Instruction, InstructionDeassemblyError>;

/// Walks machine code one instruction at a time, yielding each instruction with its address.
/// An unrecognized opcode only consumes its own byte, so decoding resumes right after it.
pub struct Deassembler<'a, I>
where
    I: Iterator<Item = &'a u8>,
{
    code_iter: Peekable<I>,
    addr: usize,
}

impl<'a, I> Deassembler<'a, I>
where
    I: Iterator<Item = &'a u8>,
{
    pub fn new(code_iter: I) -> Self {
        Self {
            code_iter: code_iter.peekable(),
            addr: 0,
        }
    }

    pub fn deassemble(self) -> Result<Vec<Instruction>, InstructionDeassemblyError> {
        self.map(|(_, instruction)| instruction).collect()
    }

    pub fn deassemble_text(self) -> String {
        self.map(|(addr, instruction)| format!("{:02X}: {}\n", addr, Self::text(instruction)))
            .collect()
    }

    pub fn deassemble_instruction(&mut self) -> Option<DeassemblyResult> {
        let opcode = *self.next_byte()?;

        let kind = match Instruction::deassemble_opcode(opcode) {
            Ok(kind) => kind,
            Err(e) => return Some(Err(e)),
        };

        let operands: Vec<u8> = (0..kind.operand_count())
            .map_while(|_| self.next_byte().copied())
            .collect();

        Some(Instruction::deassemble_operands(kind, &operands))
    }

    pub fn deassemble_instruction_text(&mut self) -> String {
        match self.deassemble_instruction() {
            Some(instruction) => Self::text(instruction),
            None => "<out of deassembler bounds>".to_string(),
        }
    }

    fn text(instruction: DeassemblyResult) -> String {
        match instruction {
            Ok(instruction) => format!("{}", instruction),
            Err(e) => format!("<{}>", e),
        }
    }

    fn next_byte(&mut self) -> Option<&'a u8> {
        let byte = self.code_iter.next()?;
        self.addr += 1;
        Some(byte)
    }
}

impl<'a, I> Iterator for Deassembler<'a, I>
where
    I: Iterator<Item = &'a u8>,
{
    type Item = (usize, DeassemblyResult);

    fn next(&mut self) -> Option<Self::Item> {
        self.code_iter.peek()?;

        let addr = self.addr;
        self.deassemble_instruction()
            .map(|instruction| (addr, instruction))
    }
}
