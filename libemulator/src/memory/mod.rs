use libisa::{Address, Word, MEMORY_SIZE};

#[cfg(test)]
mod tests;

/// Flat byte-addressed store. Every `Address` is in range, so plain reads and
/// writes can't fail; address arithmetic that leaves the range is caught by
/// the `offset` helper instead of wrapping.
pub struct Memory([Word; MEMORY_SIZE]);

impl Memory {
    /// Copies `program` to the start of an otherwise zeroed memory.
    /// Bytes past `MEMORY_SIZE` are dropped, callers check the length first.
    pub fn new(program: &[u8]) -> Self {
        let mut data = [0; MEMORY_SIZE];

        for (cell, byte) in data.iter_mut().zip(program) {
            *cell = *byte;
        }

        Self(data)
    }

    pub fn byte(&self, addr: Address) -> Word {
        self.0[addr as usize]
    }

    pub fn byte_mut(&mut self, addr: Address) -> &mut Word {
        &mut self.0[addr as usize]
    }

    pub fn write(&mut self, addr: Address, value: Word) {
        *self.byte_mut(addr) = value;
    }

    /// Reads an address that may lie past the end of memory.
    pub fn get(&self, addr: usize) -> Option<Word> {
        self.0.get(addr).copied()
    }

    pub fn slice_from(&self, addr: Address) -> &[Word] {
        &self.0[addr as usize..]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.0.iter()
    }

    /// `addr + delta` if it still is a valid address.
    pub fn offset(addr: Address, delta: usize) -> Option<Address> {
        Address::try_from(addr as usize + delta).ok()
    }
}
