use libisa::MEMORY_SIZE;

use super::Memory;

#[test]
fn program_lands_at_zero_and_rest_is_zeroed() {
    let memory = Memory::new(&[0xAB, 0xCD]);

    assert_eq!(memory.byte(0), 0xAB);
    assert_eq!(memory.byte(1), 0xCD);
    assert!(memory.iter().skip(2).all(|byte| *byte == 0));
    assert_eq!(memory.iter().count(), MEMORY_SIZE);
}

#[test]
fn write_then_read() {
    let mut memory = Memory::new(&[]);

    memory.write(0xFF, 42);
    *memory.byte_mut(0x10) += 1;

    assert_eq!(memory.byte(0xFF), 42);
    assert_eq!(memory.byte(0x10), 1);
}

#[test]
fn get_past_end_is_none() {
    let memory = Memory::new(&[]);

    assert_eq!(memory.get(MEMORY_SIZE - 1), Some(0));
    assert_eq!(memory.get(MEMORY_SIZE), None);
}

#[test]
fn offset_does_not_wrap() {
    assert_eq!(Memory::offset(0xFD, 2), Some(0xFF));
    assert_eq!(Memory::offset(0xFE, 2), None);
}
