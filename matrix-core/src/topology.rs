//! Module topology
//!
//! Every physical 8x8 module shows one 8x8 window of the frame buffer. A
//! [`DeviceDescriptor`] names the window's top-left corner and how the module
//! is mounted, so a module fitted upside-down or sideways still shows its
//! window right side up.
//!
//! The descriptor table is ordered from the module electrically farthest
//! from the controller to the nearest one.

use crate::traits::ReadBuffer;

/// Side length of one module in pixels
pub const MODULE_SIZE: usize = 8;

/// Mounting orientation of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// Mounted as designed
    #[default]
    Rotate0,
    /// Turned 90° clockwise
    Clockwise,
    /// Upside down
    Rotate180,
    /// Turned 90° counter-clockwise
    CounterClockwise,
}

/// Where one scan row of a module comes from in the frame buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanSource {
    /// Eight pixels of a row, see [`ReadBuffer::extract_horizontal`]
    Horizontal { x: usize, y: usize, reverse: bool },
    /// Eight pixels of a column, see [`ReadBuffer::extract_vertical`]
    Vertical { x: usize, y: usize, reverse: bool },
}

impl ScanSource {
    /// Fetch the scan-row byte from `buffer`
    pub fn read<B: ReadBuffer + ?Sized>(&self, buffer: &B) -> u8 {
        match *self {
            Self::Horizontal { x, y, reverse } => buffer.extract_horizontal(x, y, reverse),
            Self::Vertical { x, y, reverse } => buffer.extract_vertical(x, y, reverse),
        }
    }
}

impl Rotation {
    /// Source of scan row `row` (0-7) for a module at `(x, y)`
    ///
    /// `mirror` inverts the column order on top of the rotation. Rows past 7
    /// wrap, matching the digit register the chip would address.
    pub fn scan_source(self, x: usize, y: usize, mirror: bool, row: usize) -> ScanSource {
        let row = row % MODULE_SIZE;
        let last = MODULE_SIZE - 1;
        match self {
            Self::Rotate0 => ScanSource::Horizontal {
                x,
                y: y + row,
                reverse: mirror,
            },
            Self::Rotate180 => ScanSource::Horizontal {
                x,
                y: y + last - row,
                reverse: !mirror,
            },
            Self::Clockwise => ScanSource::Vertical {
                x: x + row,
                y,
                reverse: !mirror,
            },
            Self::CounterClockwise => ScanSource::Vertical {
                x: x + last - row,
                y,
                reverse: mirror,
            },
        }
    }
}

/// Placement of one physical module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceDescriptor {
    /// Left edge of the module's window in the frame buffer
    pub x: u16,
    /// Top edge of the module's window in the frame buffer
    pub y: u16,
    /// Mounting orientation
    pub rotation: Rotation,
    /// Column order inverted
    pub mirror: bool,
}

impl DeviceDescriptor {
    /// Module showing the window at `(x, y)`, mounted as designed
    pub const fn new(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            rotation: Rotation::Rotate0,
            mirror: false,
        }
    }

    /// Same module with a different orientation
    pub const fn rotated(self, rotation: Rotation) -> Self {
        Self { rotation, ..self }
    }

    /// Same module with the column order inverted
    pub const fn mirrored(self, mirror: bool) -> Self {
        Self { mirror, ..self }
    }

    /// Source of scan row `row` (0-7) for this module
    pub fn scan_source(&self, row: usize) -> ScanSource {
        self.rotation
            .scan_source(self.x as usize, self.y as usize, self.mirror, row)
    }

    /// Scan row `row` (0-7) of this module as the chip expects it
    pub fn scan_row<B: ReadBuffer + ?Sized>(&self, buffer: &B, row: usize) -> u8 {
        self.scan_source(row).read(buffer)
    }

    /// True if the whole 8x8 window lies inside a `width` x `height` buffer
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        self.x as usize + MODULE_SIZE <= width && self.y as usize + MODULE_SIZE <= height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::FrameBuffer;
    use crate::traits::DrawBuffer;

    /// One lit pixel at the top-left of an 8x8 buffer; returns the
    /// (row, byte) pairs that are non-zero for a module at (0, 0)
    fn lit_rows(desc: DeviceDescriptor) -> [(usize, u8); 1] {
        let mut buf = FrameBuffer::<8, 8>::new();
        buf.turn_dot(true, 0, 0);

        let mut found = None;
        for row in 0..MODULE_SIZE {
            let byte = desc.scan_row(&buf, row);
            if byte != 0 {
                assert!(found.is_none(), "more than one scan row lit");
                found = Some((row, byte));
            }
        }
        [found.expect("no scan row lit")]
    }

    #[test]
    fn test_rotate0_maps_corner_directly() {
        let desc = DeviceDescriptor::new(0, 0);
        assert_eq!(lit_rows(desc), [(0, 0x80)]);
        assert_eq!(lit_rows(desc.mirrored(true)), [(0, 0x01)]);
    }

    #[test]
    fn test_rotate180_inverts_rows_and_bits() {
        let desc = DeviceDescriptor::new(0, 0).rotated(Rotation::Rotate180);
        assert_eq!(lit_rows(desc), [(7, 0x01)]);
        assert_eq!(lit_rows(desc.mirrored(true)), [(7, 0x80)]);
    }

    #[test]
    fn test_clockwise_swaps_axes() {
        let desc = DeviceDescriptor::new(0, 0).rotated(Rotation::Clockwise);
        assert_eq!(lit_rows(desc), [(0, 0x01)]);
        assert_eq!(lit_rows(desc.mirrored(true)), [(0, 0x80)]);
    }

    #[test]
    fn test_counter_clockwise_swaps_axes_opposite() {
        let desc = DeviceDescriptor::new(0, 0).rotated(Rotation::CounterClockwise);
        assert_eq!(lit_rows(desc), [(7, 0x80)]);
        assert_eq!(lit_rows(desc.mirrored(true)), [(7, 0x01)]);
    }

    #[test]
    fn test_scan_source_offsets() {
        let desc = DeviceDescriptor::new(16, 8).rotated(Rotation::Clockwise);
        assert_eq!(
            desc.scan_source(3),
            ScanSource::Vertical {
                x: 19,
                y: 8,
                reverse: true
            }
        );

        let desc = DeviceDescriptor::new(16, 8).rotated(Rotation::Rotate180);
        assert_eq!(
            desc.scan_source(2),
            ScanSource::Horizontal {
                x: 16,
                y: 13,
                reverse: true
            }
        );
    }

    #[test]
    fn test_scan_row_wraps_past_module_height() {
        let mut buf = FrameBuffer::<8, 8>::new();
        buf.turn_dot(true, 0, 0);

        for rotation in [
            Rotation::Rotate0,
            Rotation::Clockwise,
            Rotation::Rotate180,
            Rotation::CounterClockwise,
        ] {
            let desc = DeviceDescriptor::new(0, 0).rotated(rotation);
            for row in 0..MODULE_SIZE {
                assert_eq!(desc.scan_source(row + MODULE_SIZE), desc.scan_source(row));
                assert_eq!(desc.scan_row(&buf, row + 2 * MODULE_SIZE), desc.scan_row(&buf, row));
            }
        }
    }

    #[test]
    fn test_fits_within() {
        assert!(DeviceDescriptor::new(24, 8).fits_within(32, 16));
        assert!(!DeviceDescriptor::new(25, 8).fits_within(32, 16));
        assert!(!DeviceDescriptor::new(0, 9).fits_within(32, 16));
    }
}
