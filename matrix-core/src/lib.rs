//! Board-agnostic graphics core for MAX7219 dot-matrix displays
//!
//! This crate contains everything that does not touch the bus:
//!
//! - Fixed-width bit vectors used as row storage
//! - The monochrome frame buffer with clipping draw operations
//! - Read-only / drawing capability traits
//! - Module topology (placement, rotation, mirroring)
//! - Deployment presets
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐   DrawBuffer   ┌──────────────────────┐
//! │ drawing code (text, ...) │ ─────────────▶ │ FrameBuffer<W, H>    │
//! └──────────────────────────┘                │  rows: [BitRange<W>] │
//!                                             └──────────────────────┘
//!                                                        │ ReadBuffer
//!                                                        ▼
//!                                             ┌──────────────────────┐
//!                                             │ matrix-drivers       │
//!                                             │  DeviceDescriptor[]  │
//!                                             └──────────────────────┘
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod bits;
pub mod buffer;
pub mod config;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod topology;
pub mod traits;

// Re-export key types at crate root for convenience
pub use bits::BitRange;
pub use buffer::FrameBuffer;
pub use topology::{DeviceDescriptor, Rotation, ScanSource, MODULE_SIZE};
pub use traits::{Brightness, DrawBuffer, ReadBuffer, RowBits};
