// ============================================================
// Instruction byte layout
//
//   bit 7     revert the whole run if this instruction fails
//   bit 6     payload carries a 32-byte EGLD amount
//   bits 0-5  command code (0 = destination address in payload)
// ============================================================

pub const REVERT_ON_FAILURE: u8 = 0x80;
pub const HAS_VALUE: u8 = 0x40;
/// Low six bits. Also the highest command code the routing table can hold.
pub const COMMAND_MASK: u8 = 0x3f;

/// Command code whose destination is read from the payload.
pub const ADDRESS_IN_PAYLOAD: u8 = 0x00;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Instruction(u8);

impl Instruction {
    pub const fn new(byte: u8) -> Self {
        Instruction(byte)
    }

    pub fn command(self) -> u8 {
        self.0 & COMMAND_MASK
    }

    pub fn revert_on_failure(self) -> bool {
        self.0 & REVERT_ON_FAILURE != 0
    }

    pub fn has_value(self) -> bool {
        self.0 & HAS_VALUE != 0
    }

    pub fn address_in_payload(self) -> bool {
        self.command() == ADDRESS_IN_PAYLOAD
    }
}

impl From<u8> for Instruction {
    fn from(byte: u8) -> Self {
        Instruction::new(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_independent_of_command() {
        let instruction = Instruction::new(REVERT_ON_FAILURE | HAS_VALUE | 0x05);
        assert!(instruction.revert_on_failure());
        assert!(instruction.has_value());
        assert_eq!(instruction.command(), 5);
        assert!(!instruction.address_in_payload());
    }

    #[test]
    fn plain_code_zero_reads_address_from_payload() {
        let instruction = Instruction::from(0x00);
        assert!(instruction.address_in_payload());
        assert!(!instruction.revert_on_failure());
        assert!(!instruction.has_value());

        let strict = Instruction::from(0x80);
        assert!(strict.address_in_payload());
        assert!(strict.revert_on_failure());
    }

    #[test]
    fn command_code_uses_low_six_bits() {
        assert_eq!(Instruction::new(0xff).command(), COMMAND_MASK);
        assert_eq!(Instruction::new(0x41).command(), 1);
    }
}
