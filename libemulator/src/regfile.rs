use libisa::{Register, Word, REGISTER_COUNT, STACK_POINTER, STACK_START};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegFile([Word; REGISTER_COUNT]);

impl RegFile {
    pub fn new() -> Self {
        let mut registers = [0; REGISTER_COUNT];
        registers[STACK_POINTER] = STACK_START;

        Self(registers)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.0.iter()
    }

    pub fn array_clone(&self) -> [Word; REGISTER_COUNT] {
        self.0
    }

    pub fn register(&self, index: Register) -> Option<Word> {
        self.0.get(index).copied()
    }

    pub fn register_mut(&mut self, index: Register) -> Option<&mut Word> {
        self.0.get_mut(index)
    }

    pub fn stack_pointer(&self) -> Word {
        self.0[STACK_POINTER]
    }
}

impl Default for RegFile {
    fn default() -> Self {
        Self::new()
    }
}
