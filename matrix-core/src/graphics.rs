//! embedded-graphics support
//!
//! With the `graphics` feature enabled, [`FrameBuffer`] is a
//! [`DrawTarget`] with [`BinaryColor`] pixels, so fonts, primitives and
//! images from the embedded-graphics ecosystem can draw into it directly.
//! Out-of-buffer pixels are clipped by the buffer itself.
//!
//! Both [`DrawTarget`] and [`DrawBuffer`] define `clear`; import only the
//! one you need or call it with the trait path.

use core::convert::Infallible;

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Size},
    pixelcolor::BinaryColor,
    primitives::Rectangle,
    Pixel,
};

use crate::buffer::FrameBuffer;
use crate::traits::DrawBuffer;

impl<const W: usize, const H: usize> OriginDimensions for FrameBuffer<W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl<const W: usize, const H: usize> DrawTarget for FrameBuffer<W, H> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.turn_dot(color.is_on(), point.x as isize, point.y as isize);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let x = area.top_left.x as isize;
        let y = area.top_left.y as isize;
        let width = area.size.width as usize;
        let height = area.size.height as usize;

        match color {
            BinaryColor::Off => DrawBuffer::clear(self, x, y, width, height),
            BinaryColor::On => {
                // Clip first; `write` caps the width at 128 bits before clipping
                let left = x.max(0);
                let right = x.saturating_add(width as isize).min(W as isize);
                if left >= right {
                    return Ok(());
                }
                let span = (right - left) as usize;
                let bottom = y.saturating_add(height as isize).min(H as isize);
                for row_y in y.max(0)..bottom {
                    self.write(&[u128::MAX], left, row_y, span, 1);
                }
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        match color {
            BinaryColor::Off => {
                self.clear_all();
                Ok(())
            }
            BinaryColor::On => self.fill_solid(&self.bounding_box(), color),
        }
    }
}
