//! Deployment configuration
//!
//! Module layouts are compile-time tables: the wiring of a finished clock
//! does not change at runtime. Power-on register defaults live here too so
//! drivers and board code agree on them.

use crate::topology::{DeviceDescriptor, Rotation};

/// Intensity applied by the power-on sequence (maximum)
pub const DEFAULT_INTENSITY: u8 = 15;

/// Scan-limit value that drives all 8 rows
pub const SCAN_LIMIT_ALL: u8 = 7;

/// Width of the two-row clock face
pub const CLOCK_WIDTH: usize = 32;

/// Height of the two-row clock face
pub const CLOCK_HEIGHT: usize = 16;

/// Two rows of four modules forming a 32x16 face
///
/// The controller feeds the bottom-right module. The chain runs right to
/// left along the bottom row, then left to right along the top row, which
/// is mounted upside down. Listed farthest first.
pub const CLOCK_32X16: [DeviceDescriptor; 8] = [
    DeviceDescriptor::new(24, 0).rotated(Rotation::Rotate180),
    DeviceDescriptor::new(16, 0).rotated(Rotation::Rotate180),
    DeviceDescriptor::new(8, 0).rotated(Rotation::Rotate180),
    DeviceDescriptor::new(0, 0).rotated(Rotation::Rotate180),
    DeviceDescriptor::new(0, 8),
    DeviceDescriptor::new(8, 8),
    DeviceDescriptor::new(16, 8),
    DeviceDescriptor::new(24, 8),
];

/// Single row of four modules fed from the right end, farthest first
pub const STRIP_32X8: [DeviceDescriptor; 4] = [
    DeviceDescriptor::new(0, 0),
    DeviceDescriptor::new(8, 0),
    DeviceDescriptor::new(16, 0),
    DeviceDescriptor::new(24, 0),
];
