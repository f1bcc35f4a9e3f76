//! Shared items for the BitDogLab digit-counter firmware.
//!
//! The hardware-facing modules are gated on the `pico1` feature; the
//! debounce engine, counter arithmetic, and frame rendering are pure and
//! also compile on the host (`host` feature) for testing.
#![no_std]

pub mod blinker;
pub mod button;
mod counter;
mod error;
#[cfg(feature = "pico1")]
mod hardware;
#[cfg(feature = "pico1")]
pub mod matrix;
mod never;
pub mod patterns;
#[cfg(feature = "pico1")]
mod pio_irqs;
pub mod render;
mod shared_constants;

// Re-export commonly used items
pub use blinker::BlinkState;
#[cfg(feature = "pico1")]
pub use blinker::Blinker;
pub use button::{ButtonId, PressFlags, PressSource, confirm_press};
#[cfg(feature = "pico1")]
pub use button::Buttons;
pub use counter::Counter;
pub use error::{Error, Result};
#[cfg(feature = "pico1")]
pub use hardware::Hardware;
#[cfg(feature = "pico1")]
pub use matrix::{MatrixDisplay, MatrixNotifier};
pub use never::Never;
pub use render::{Frame, Rgb, digit_frame, normalize_digit, pixel_word};
pub use shared_constants::*;
