//! Pure frame rendering: digit plus color in, 25 row-major pixels out.

use smart_leds::RGB8;

use crate::patterns::DIGIT_PATTERNS;
use crate::shared_constants::PIXEL_COUNT;

/// RGB color representation re-exported from `smart_leds`.
pub type Rgb = RGB8;

/// One full matrix update: exactly [`PIXEL_COUNT`] pixels in row-major order.
pub type Frame = [Rgb; PIXEL_COUNT];

pub const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Maps any signed digit onto 0..=9.
///
/// The double modulo keeps the result non-negative for negative inputs,
/// and `normalize_digit(d) == normalize_digit(d + 10)` for all `d`.
#[must_use]
pub const fn normalize_digit(digit: i32) -> usize {
    (((digit % 10) + 10) % 10) as usize
}

/// Renders `digit` in `color`: lit cells of the digit's bitmap get `color`,
/// every other cell is black. Deterministic, always a full frame.
#[must_use]
#[expect(
    clippy::indexing_slicing,
    reason = "normalize_digit guarantees an index in 0..=9"
)]
pub fn digit_frame(digit: i32, color: Rgb) -> Frame {
    let pattern = &DIGIT_PATTERNS[normalize_digit(digit)];
    let mut frame = [BLACK; PIXEL_COUNT];
    for (pixel, &cell) in frame.iter_mut().zip(pattern.iter()) {
        if cell != 0 {
            *pixel = color;
        }
    }
    frame
}

/// The 32-bit word the serializer shifts onto the data pin for one pixel:
/// the color sits in the top three bytes (GRB wire order, i.e. shifted
/// left 8 bits) and the low byte is zero.
#[must_use]
pub const fn pixel_word(color: Rgb) -> u32 {
    u32::from_be_bytes([color.g, color.r, color.b, 0])
}
