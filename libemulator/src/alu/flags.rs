use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ALUFlags: u8 {
        const EQUAL   = 0b001;
        const GREATER = 0b010;
        const LESS    = 0b100;
    }
}
