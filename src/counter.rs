//! The digit/color pair the buttons step through.

use crate::patterns::COLOR_PALETTE;
use crate::render::Rgb;

/// Current digit (0..=9) and color index (0..=6).
///
/// Owned exclusively by the main loop; the button tasks never touch it.
/// Both fields wrap with modulo arithmetic on every update, so they can
/// never leave their valid ranges.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, defmt::Format)]
pub struct Counter {
    digit: u8,
    color_index: u8,
}

impl Counter {
    /// Steps the digit and color forward (button A).
    pub const fn increment(&mut self) {
        self.digit = (self.digit + 1) % 10;
        self.color_index = (self.color_index + 1) % 7;
    }

    /// Steps the digit and color backward (button B).
    ///
    /// Adding `modulus - 1` is the unsigned equivalent of subtracting one
    /// with wraparound.
    pub const fn decrement(&mut self) {
        self.digit = (self.digit + 9) % 10;
        self.color_index = (self.color_index + 6) % 7;
    }

    #[must_use]
    pub const fn digit(&self) -> u8 {
        self.digit
    }

    #[must_use]
    pub const fn color_index(&self) -> u8 {
        self.color_index
    }

    /// The palette entry for the current color index.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "color_index is kept in 0..=6 by the wrapping updates"
    )]
    pub const fn color(&self) -> Rgb {
        COLOR_PALETTE[self.color_index as usize]
    }
}
