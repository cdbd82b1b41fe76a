//! Frame buffer access traits
//!
//! The display driver only ever sees [`ReadBuffer`]; drawing code uses
//! [`DrawBuffer`]. One concrete type implements both, the split exists so
//! the driver's read-only contract is visible in its signature.

/// Read-only view used by the display driver
///
/// Both extractions return the 8 pixels as one byte. Anything outside the
/// buffer reads as 0, including requests that start outside it.
pub trait ReadBuffer {
    /// Buffer width in pixels
    fn width(&self) -> usize;

    /// Buffer height in pixels
    fn height(&self) -> usize;

    /// Eight pixels of row `y` starting at column `x`, moving right
    ///
    /// Column `x` lands in bit 7 of the result, column `x + 7` in bit 0.
    /// `reverse` swaps the bit order.
    fn extract_horizontal(&self, x: usize, y: usize, reverse: bool) -> u8;

    /// Eight pixels of column `x` starting at row `y`, moving down
    ///
    /// Row `y` lands in bit 7 of the result, row `y + 7` in bit 0.
    /// `reverse` swaps the bit order.
    fn extract_vertical(&self, x: usize, y: usize, reverse: bool) -> u8;
}

/// Mutating surface used by drawing code (text, glyphs, animations)
///
/// Coordinates are signed and may lie partly or fully outside the buffer;
/// whatever falls outside is clipped and never reported as an error.
pub trait DrawBuffer: ReadBuffer {
    /// Blit `height` rows of `data` with the top-left corner at `(x, y)`
    ///
    /// The low `width` bits of each element are the pixels, bit 0 being the
    /// rightmost column. `width` is clamped to the bit width of `T`.
    /// Destination pixels under the rectangle are overwritten, not merged.
    fn write<T: RowBits>(&mut self, data: &[T], x: isize, y: isize, width: usize, height: usize);

    /// Turn off every pixel in the rectangle
    fn clear(&mut self, x: isize, y: isize, width: usize, height: usize);

    /// Turn off every pixel
    fn clear_all(&mut self);

    /// Switch a single pixel
    fn turn_dot(&mut self, on: bool, x: isize, y: isize);

    /// [`write`](Self::write) with the height taken from `data`
    fn write_rows<T: RowBits>(&mut self, data: &[T], x: isize, y: isize, width: usize) {
        self.write(data, x, y, width, data.len());
    }
}

/// Unsigned integer usable as one source row for [`DrawBuffer::write`]
pub trait RowBits: Copy {
    /// Number of pixels one element can hold
    const BITS: usize;

    /// Widen to the common row representation
    fn to_bits(self) -> u128;
}

macro_rules! impl_row_bits {
    ($($t:ty),*) => {
        $(
            impl RowBits for $t {
                const BITS: usize = <$t>::BITS as usize;

                fn to_bits(self) -> u128 {
                    self as u128
                }
            }
        )*
    };
}

impl_row_bits!(u8, u16, u32, u64, u128);
