pub mod image;
pub mod instruction;

pub type Word = u8;
pub type Address = u8;

pub type Register = usize;
pub type Immediate = Word;

pub const MEMORY_SIZE: usize = 256;
pub const REGISTER_COUNT: usize = 8;

/// Register reserved for the stack pointer by convention.
pub const STACK_POINTER: Register = 7;

/// Value the stack pointer holds on reset, one past the top of the stack.
pub const STACK_START: Address = 0xF4;
