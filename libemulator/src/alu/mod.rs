use std::cmp::Ordering;

use flags::ALUFlags;
use libisa::{instruction::kind::InstructionKind, Word};
use thiserror::Error;

pub mod flags;


#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ALUError {
    #[error("Unsupported ALU operation {0}")]
    UnsupportedOperation(InstructionKind),
}

/// Arithmetic wraps modulo 256.
pub struct ALU {
    pub flags: ALUFlags,
}

impl ALU {
    pub fn new() -> Self {
        Self {
            flags: ALUFlags::empty(),
        }
    }

    /// Runs the ALU operation `kind` and returns the value to store in the first operand's register.
    /// For `AddI` the second operand is the immediate itself.
    pub fn operate(&mut self, kind: InstructionKind, a: Word, b: Word) -> Result<Word, ALUError> {
        match kind {
            InstructionKind::Add | InstructionKind::AddI => Ok(self.add(a, b)),
            InstructionKind::Mul => Ok(self.mul(a, b)),
            InstructionKind::Cmp => {
                self.cmp(a, b);
                Ok(a)
            }
            _ => Err(ALUError::UnsupportedOperation(kind)),
        }
    }

    pub fn add(&self, a: Word, b: Word) -> Word {
        a.wrapping_add(b)
    }

    pub fn mul(&self, a: Word, b: Word) -> Word {
        a.wrapping_mul(b)
    }

    pub fn cmp(&mut self, a: Word, b: Word) {
        self.flags = match a.cmp(&b) {
            Ordering::Equal => ALUFlags::EQUAL,
            Ordering::Greater => ALUFlags::GREATER,
            Ordering::Less => ALUFlags::LESS,
        };
    }

    pub fn equal(&self) -> bool {
        self.flags.contains(ALUFlags::EQUAL)
    }
}

impl Default for ALU {
    fn default() -> Self {
        Self::new()
    }
}
