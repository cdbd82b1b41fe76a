//! MAX7219 LED matrix driver
//!
//! Drives a daisy chain of MAX7219 (or MAX7221) chips, each wired to one
//! 8x8 LED module, from a shared SPI bus and a single chip-select line.
//!
//! # Wire protocol
//!
//! While chip-select is low every chip shifts 16 bits through to the next
//! one; on the rising edge each chip latches the word it currently holds.
//! A transaction therefore carries one `(register, data)` pair per chip,
//! the pair for the farthest chip first:
//!
//! ```text
//!  CS ‾‾\____________________________________________/‾‾‾ (settle 5µs)
//!        │ reg │ data │ reg │ data │ ... │ reg │ data │
//!         farthest                          nearest
//! ```
//!
//! A full display refresh is 8 such transactions, one per scan row.

pub mod display;
pub mod reg;

pub use display::{Frame, Max7219Display};
pub use reg::Command;

use embedded_hal::spi::{Mode, MODE_0};

/// Longest supported chain
pub const MAX_DEVICES: usize = 16;

/// Bytes in one transaction on the longest chain
pub const FRAME_CAPACITY: usize = MAX_DEVICES * 2;

/// Bus clock known to work with long chains and cheap module wiring
///
/// The chips accept up to 10 MHz; board code may go faster on short runs.
pub const SPI_FREQUENCY_HZ: u32 = 100_000;

/// Data is sampled on the rising clock edge, clock idles low
pub const SPI_MODE: Mode = MODE_0;

/// Minimum chip-select high time after a transaction, in microseconds
pub const CS_SETTLE_US: u32 = 5;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<SpiE, PinE> {
    /// SPI bus error
    Spi(SpiE),
    /// Chip-select pin error
    ChipSelect(PinE),
    /// Descriptor table longer than [`MAX_DEVICES`]
    TooManyDevices { count: usize },
    /// Per-device values do not match the number of devices
    DeviceCountMismatch { expected: usize, got: usize },
}
