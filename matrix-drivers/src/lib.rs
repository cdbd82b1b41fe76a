//! Hardware driver implementations
//!
//! This crate pushes `matrix-core` frame buffers to real hardware:
//!
//! - MAX7219 / MAX7221 daisy chains driving 8x8 LED modules
//!
//! Drivers are written against the `embedded-hal` 1.0 blocking traits, so
//! any chip HAL providing `SpiBus`, `OutputPin` and `DelayNs` can be used.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod max7219;

pub use max7219::{Command, Error, Max7219Display};
