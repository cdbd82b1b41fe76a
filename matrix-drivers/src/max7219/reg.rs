//! MAX7219 register map
//!
//! Every command is a 16-bit word: register address in the first byte,
//! data in the second. Digit registers hold one scan row each.

use matrix_core::traits::MAX_INTENSITY;

/// No operation; used to skip a device in the chain
pub const NOOP: u8 = 0x00;
/// Scan row 0
pub const DIGIT0: u8 = 0x01;
/// Scan row 7
pub const DIGIT7: u8 = 0x08;
/// BCD decode enable per digit (0 = raw segments)
pub const DECODE_MODE: u8 = 0x09;
/// LED current, 0-15
pub const INTENSITY: u8 = 0x0A;
/// Number of scanned digits minus one
pub const SCAN_LIMIT: u8 = 0x0B;
/// 0 = shutdown, 1 = normal operation
pub const SHUTDOWN: u8 = 0x0C;
/// 1 = all LEDs on
pub const DISPLAY_TEST: u8 = 0x0F;

/// Digit register for scan row `row` (0-7)
pub const fn digit(row: u8) -> u8 {
    DIGIT0 + (row & 0x07)
}

/// One register write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    /// Register address
    pub register: u8,
    /// Register value
    pub data: u8,
}

impl Command {
    /// Build a command
    pub const fn new(register: u8, data: u8) -> Self {
        Self { register, data }
    }

    /// Enter (`true`) or leave shutdown mode
    pub const fn shutdown(on: bool) -> Self {
        // The register is "normal operation", so the sense is inverted
        Self::new(SHUTDOWN, if on { 0 } else { 1 })
    }

    /// Enable or disable display-test mode
    pub const fn display_test(on: bool) -> Self {
        Self::new(DISPLAY_TEST, on as u8)
    }

    /// Set intensity, saturating at 15
    pub const fn intensity(level: u8) -> Self {
        let level = if level > MAX_INTENSITY {
            MAX_INTENSITY
        } else {
            level
        };
        Self::new(INTENSITY, level)
    }

    /// Scan the first `limit + 1` digits
    pub const fn scan_limit(limit: u8) -> Self {
        Self::new(SCAN_LIMIT, limit & 0x07)
    }

    /// Decode-mode bitmap, one bit per digit
    pub const fn decode_mode(mask: u8) -> Self {
        Self::new(DECODE_MODE, mask)
    }

    /// Raw row data for scan row `row`
    pub const fn row(row: u8, data: u8) -> Self {
        Self::new(digit(row), data)
    }

    /// Wire bytes, address first
    pub const fn to_bytes(self) -> [u8; 2] {
        [self.register, self.data]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_registers() {
        assert_eq!(digit(0), DIGIT0);
        assert_eq!(digit(7), DIGIT7);
    }

    #[test]
    fn test_shutdown_sense_is_inverted() {
        assert_eq!(Command::shutdown(true).to_bytes(), [0x0C, 0x00]);
        assert_eq!(Command::shutdown(false).to_bytes(), [0x0C, 0x01]);
    }

    #[test]
    fn test_intensity_saturates() {
        assert_eq!(Command::intensity(7).data, 7);
        assert_eq!(Command::intensity(200).data, 15);
    }

    #[test]
    fn test_control_commands() {
        assert_eq!(Command::display_test(true).to_bytes(), [0x0F, 0x01]);
        assert_eq!(Command::scan_limit(7).to_bytes(), [0x0B, 0x07]);
        assert_eq!(Command::decode_mode(0).to_bytes(), [0x09, 0x00]);
        assert_eq!(Command::row(3, 0xA5).to_bytes(), [0x04, 0xA5]);
    }
}
