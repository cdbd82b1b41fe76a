//! Capability traits
//!
//! These traits split access to the frame buffer between the drawing side
//! and the display driver, and define the values exchanged with the
//! collaborators outside this workspace.

pub mod brightness;
pub mod buffer;

pub use brightness::{Brightness, MAX_INTENSITY};
pub use buffer::{DrawBuffer, ReadBuffer, RowBits};
