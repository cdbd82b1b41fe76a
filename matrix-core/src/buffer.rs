//! Frame buffer
//!
//! One bit per pixel, stored as a row of [`BitRange`]s per visual line:
//!
//! ```text
//!        x: 0 1 ...     7 8 9 ...    15 16 ...    W-1
//!          ┌─────────────┬─────────────┬──────────────┐
//!  y = 0   │(MSB)             rows[0]            (LSB)│
//!  y = 1   │                  rows[1]                 │
//!   ...    │                    ...                   │
//!          └─────────────┴─────────────┴──────────────┘
//! ```
//!
//! Pixel `(x, y)` is bit `W - x - 1` of `rows[y]`, so the leftmost column is
//! the most-significant bit. All clipping against the buffer edges happens
//! here; callers may pass any coordinates.

use core::fmt;

use crate::bits::{low_mask, BitRange};
use crate::traits::{DrawBuffer, ReadBuffer, RowBits};

/// Clip the half-open span `[start, start + len)` to `[0, limit)`
///
/// Returns `None` when nothing of the span is left.
fn clip_span(start: isize, len: usize, limit: usize) -> Option<(usize, usize)> {
    let len = isize::try_from(len).unwrap_or(isize::MAX);
    let end = start.saturating_add(len).min(limit as isize);
    let start = start.max(0);
    if start >= end {
        None
    } else {
        Some((start as usize, end as usize))
    }
}

/// `W` x `H` monochrome frame buffer, `W <= 128`
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer<const W: usize, const H: usize> {
    rows: [BitRange<W>; H],
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    /// Buffer width in pixels
    pub const WIDTH: usize = W;
    /// Buffer height in pixels
    pub const HEIGHT: usize = H;

    /// Create a blank buffer
    pub const fn new() -> Self {
        Self {
            rows: [BitRange::new(); H],
        }
    }

    /// Read a single pixel; anything outside the buffer is off
    pub fn dot(&self, x: isize, y: isize) -> bool {
        match Self::bit_index(x, y) {
            Some((bit, row)) => self.rows[row].get(bit),
            None => false,
        }
    }

    /// Storage of row `y`
    pub fn row(&self, y: usize) -> Option<&BitRange<W>> {
        self.rows.get(y)
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> &[BitRange<W>; H] {
        &self.rows
    }

    /// Map a visual coordinate to (bit index, row index)
    fn bit_index(x: isize, y: isize) -> Option<(usize, usize)> {
        if x < 0 || y < 0 || x as usize >= W || y as usize >= H {
            return None;
        }
        Some((W - x as usize - 1, y as usize))
    }
}

impl<const W: usize, const H: usize> Default for FrameBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> ReadBuffer for FrameBuffer<W, H> {
    fn width(&self) -> usize {
        W
    }

    fn height(&self) -> usize {
        H
    }

    fn extract_horizontal(&self, x: usize, y: usize, reverse: bool) -> u8 {
        if x >= W || y >= H {
            return 0;
        }

        let row = &self.rows[y];
        // Columns x..x+8 occupy bit indices (top - 8)..top
        let top = W - x;
        let mut byte: BitRange<8> = if top >= 8 {
            row.extract_range(top - 8)
        } else {
            // Past the right edge: missing columns come in as zeros
            BitRange::from_bits(row.extract_range::<8>(0).bits() << (8 - top))
        };

        if reverse {
            byte.reverse();
        }
        byte.into()
    }

    fn extract_vertical(&self, x: usize, y: usize, reverse: bool) -> u8 {
        if x >= W || y >= H {
            return 0;
        }

        let bit = W - x - 1;
        let mut byte = BitRange::<8>::new();
        for (i, row) in self.rows[y..].iter().take(8).enumerate() {
            if row.get(bit) {
                byte.set(7 - i, true);
            }
        }

        if reverse {
            byte.reverse();
        }
        byte.into()
    }
}

impl<const W: usize, const H: usize> DrawBuffer for FrameBuffer<W, H> {
    fn write<T: RowBits>(&mut self, data: &[T], x: isize, y: isize, width: usize, height: usize) {
        let width = width.min(T::BITS);
        let height = height.min(data.len());

        let Some((x0, x1)) = clip_span(x, width, W) else {
            return;
        };
        let Some((y0, y1)) = clip_span(y, height, H) else {
            return;
        };

        // Bit index that source bit 0 (column x + width - 1) lands on.
        // Negative when the source sticks out past the right edge.
        let right_space = W as isize - x - width as isize;
        let start = W - x1;
        let visible = x1 - x0;

        for buf_i in y0..y1 {
            let data_i = (buf_i as isize - y) as usize;
            let src = data[data_i].to_bits() & low_mask(width);
            let placed = if right_space >= 0 {
                src << right_space
            } else {
                src >> -right_space
            };

            let row = &mut self.rows[buf_i];
            row.set_range(start, visible, false);
            *row |= BitRange::from_bits(placed);
        }
    }

    fn clear(&mut self, x: isize, y: isize, width: usize, height: usize) {
        let Some((x0, x1)) = clip_span(x, width, W) else {
            return;
        };
        let Some((y0, y1)) = clip_span(y, height, H) else {
            return;
        };

        for row in &mut self.rows[y0..y1] {
            row.set_range(W - x1, x1 - x0, false);
        }
    }

    fn clear_all(&mut self) {
        for row in self.rows.iter_mut() {
            row.reset();
        }
    }

    fn turn_dot(&mut self, on: bool, x: isize, y: isize) {
        if let Some((bit, row)) = Self::bit_index(x, y) {
            self.rows[row].set(bit, on);
        }
    }
}

/// ASCII dump, `*` for lit pixels, under a dashed header
impl<const W: usize, const H: usize> fmt::Display for FrameBuffer<W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..W {
            f.write_str("-")?;
        }
        f.write_str("\n")?;
        for row in self.rows.iter() {
            for bit in (0..W).rev() {
                f.write_str(if row.get(bit) { "*" } else { " " })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl<const W: usize, const H: usize> fmt::Debug for FrameBuffer<W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameBuffer<{}, {}>\n{}", W, H, self)
    }
}
