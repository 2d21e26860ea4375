use std::fmt::Display;

use bimap::BiMap;
use lazy_static::lazy_static;

use crate::Word;

lazy_static! {
    static ref KIND_OPCODE_BIMAP: BiMap<InstructionKind, Word> = BiMap::from_iter([
        (InstructionKind::Hlt, 0b0000_0001),
        (InstructionKind::Ret, 0b0001_0001),
        (InstructionKind::Push, 0b0100_0101),
        (InstructionKind::Pop, 0b0100_0110),
        (InstructionKind::Prn, 0b0100_0111),
        (InstructionKind::Call, 0b0101_0000),
        (InstructionKind::Jmp, 0b0101_0100),
        (InstructionKind::Jeq, 0b0101_0101),
        (InstructionKind::Jne, 0b0101_0110),
        (InstructionKind::Ldi, 0b1000_0010),
        (InstructionKind::Add, 0b1010_0000),
        (InstructionKind::Mul, 0b1010_0010),
        (InstructionKind::Cmp, 0b1010_0111),
        (InstructionKind::AddI, 0b1010_1111),
    ]);
}

const OPERAND_COUNT_SHIFT: u32 = 6;
const ALU_BIT: Word = 0b0010_0000;
const SETS_PC_BIT: Word = 0b0001_0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    Ldi,
    Prn,
    Hlt,

    Push,
    Pop,

    Call,
    Ret,

    Jmp,
    Jeq,
    Jne,

    Add,
    Mul,
    Cmp,
    AddI,
}

impl InstructionKind {
    pub fn from_opcode(opcode: Word) -> Option<Self> {
        KIND_OPCODE_BIMAP.get_by_right(&opcode).copied()
    }

    pub fn opcode(&self) -> Word {
        *KIND_OPCODE_BIMAP
            .get_by_left(self)
            .expect("No opcode mapping for instruction kind")
    }

    /// Number of operand bytes following the opcode, encoded in its two upper bits.
    pub fn operand_count(&self) -> usize {
        (self.opcode() >> OPERAND_COUNT_SHIFT) as usize
    }

    /// Width of the whole instruction in bytes, opcode included.
    pub fn width(&self) -> usize {
        1 + self.operand_count()
    }

    pub fn is_alu(&self) -> bool {
        self.opcode() & ALU_BIT != 0
    }

    /// Whether the instruction is responsible for the program counter itself.
    pub fn sets_pc(&self) -> bool {
        self.opcode() & SETS_PC_BIT != 0
    }

    pub fn has_reg_a(&self) -> bool {
        self.operand_count() >= 1
    }

    pub fn has_reg_b(&self) -> bool {
        self.operand_count() == 2 && !self.has_immediate()
    }

    pub fn has_immediate(&self) -> bool {
        // The second operand of these is a literal, not a register index.
        matches!(self, Self::Ldi | Self::AddI)
    }
}

impl Display for InstructionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Ldi => "ldi",
            Self::Prn => "prn",
            Self::Hlt => "hlt",
            Self::Push => "push",
            Self::Pop => "pop",
            Self::Call => "call",
            Self::Ret => "ret",
            Self::Jmp => "jmp",
            Self::Jeq => "jeq",
            Self::Jne => "jne",
            Self::Add => "add",
            Self::Mul => "mul",
            Self::Cmp => "cmp",
            Self::AddI => "addi",
        })
    }
}
