use std::io::Write;

use libisa::{Address, Word, STACK_POINTER, STACK_START};

use crate::{memory::Memory, Emulator};

use super::ExecuteErr;

impl<O> Emulator<O>
where
    O: Write,
{
    /// Decrements the stack pointer and returns its new value.
    /// The stack may not grow into the loaded program or below address zero.
    pub(super) fn grow_stack(&mut self) -> Result<Address, ExecuteErr> {
        let sp = self.reg(STACK_POINTER)?;

        let new_sp = sp
            .checked_sub(1)
            .filter(|new_sp| *new_sp as usize >= self.program_len)
            .ok_or(ExecuteErr::StackOverflow(sp))?;

        *self.reg_mut(STACK_POINTER)? = new_sp;

        Ok(new_sp)
    }

    /// Current top of the stack. At or above `STACK_START` the stack is empty.
    pub(super) fn stack_top(&self) -> Result<Address, ExecuteErr> {
        let sp = self.reg(STACK_POINTER)?;

        if sp >= STACK_START {
            return Err(ExecuteErr::StackUnderflow(sp));
        }

        Ok(sp)
    }

    /// Increments whatever the stack pointer holds right now.
    pub(super) fn shrink_stack(&mut self) -> Result<(), ExecuteErr> {
        let sp = self.reg(STACK_POINTER)?;

        *self.reg_mut(STACK_POINTER)? =
            Memory::offset(sp, 1).ok_or(ExecuteErr::MemoryAccessViolation(sp as usize + 1))?;

        Ok(())
    }

    pub(super) fn push(&mut self, value: Word) -> Result<(), ExecuteErr> {
        let sp = self.grow_stack()?;
        self.memory.write(sp, value);

        Ok(())
    }

    pub(super) fn pop(&mut self) -> Result<Word, ExecuteErr> {
        let value = self.memory.byte(self.stack_top()?);
        self.shrink_stack()?;

        Ok(value)
    }
}
