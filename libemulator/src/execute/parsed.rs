use std::io::Write;

use libisa::{
    instruction::{kind::InstructionKind, Instruction},
    Address, Register, Word,
};

use crate::Emulator;

use super::{ExecuteErr, ExecuteOk};

impl<O> Emulator<O>
where
    O: Write,
{
    /// Executes an already decoded instruction located at the program counter.
    pub fn execute_parsed_instruction(
        &mut self,
        instruction: Instruction,
    ) -> Result<ExecuteOk, ExecuteErr> {
        let jump: Option<Address> = match instruction.kind {
            InstructionKind::Ldi => {
                let value = self.immediate(&instruction)?;
                *self.reg_a_mut(&instruction)? = value;
                None
            }

            InstructionKind::Prn => {
                let value = self.reg_a(&instruction)?;
                writeln!(self.output, "{}", value)?;
                None
            }

            InstructionKind::Hlt => {
                self.running = false;
                return Ok(ExecuteOk::Halted);
            }

            // The stack pointer moves before the operand register is touched,
            // so PUSH, POP and CALL on R7 see the updated stack pointer.
            InstructionKind::Push => {
                self.reg_a(&instruction)?;

                let sp = self.grow_stack()?;
                let value = self.reg_a(&instruction)?;
                self.memory.write(sp, value);
                None
            }

            InstructionKind::Pop => {
                self.reg_a(&instruction)?;

                let value = self.memory.byte(self.stack_top()?);
                *self.reg_a_mut(&instruction)? = value;
                self.shrink_stack()?;
                None
            }

            InstructionKind::Call => {
                self.reg_a(&instruction)?;
                let return_addr = self.next_pc(&instruction)?;

                self.push(return_addr)?;
                Some(self.reg_a(&instruction)?)
            }

            InstructionKind::Ret => Some(self.pop()?),

            InstructionKind::Jmp => Some(self.reg_a(&instruction)?),

            InstructionKind::Jeq => {
                let target = self.reg_a(&instruction)?;
                self.alu.equal().then_some(target)
            }

            InstructionKind::Jne => {
                let target = self.reg_a(&instruction)?;
                (!self.alu.equal()).then_some(target)
            }

            InstructionKind::Add
            | InstructionKind::Mul
            | InstructionKind::Cmp
            | InstructionKind::AddI => {
                let a = self.reg_a(&instruction)?;
                let b = if instruction.kind.has_immediate() {
                    self.immediate(&instruction)?
                } else {
                    self.reg_b(&instruction)?
                };

                let result = self.alu.operate(instruction.kind, a, b)?;
                *self.reg_a_mut(&instruction)? = result;
                None
            }
        };

        self.pc = match jump {
            Some(addr) => addr,
            None => self.next_pc(&instruction)?,
        };

        Ok(ExecuteOk::Normal)
    }

    fn reg_a_index(instruction: &Instruction) -> Result<Register, ExecuteErr> {
        instruction
            .reg_a
            .ok_or(ExecuteErr::MalformedInstruction(*instruction))
    }

    fn reg_a(&self, instruction: &Instruction) -> Result<Word, ExecuteErr> {
        self.reg(Self::reg_a_index(instruction)?)
    }

    fn reg_a_mut(&mut self, instruction: &Instruction) -> Result<&mut Word, ExecuteErr> {
        self.reg_mut(Self::reg_a_index(instruction)?)
    }

    fn reg_b(&self, instruction: &Instruction) -> Result<Word, ExecuteErr> {
        let index = instruction
            .reg_b
            .ok_or(ExecuteErr::MalformedInstruction(*instruction))?;

        self.reg(index)
    }

    fn immediate(&self, instruction: &Instruction) -> Result<Word, ExecuteErr> {
        instruction
            .immediate
            .ok_or(ExecuteErr::MalformedInstruction(*instruction))
    }
}
