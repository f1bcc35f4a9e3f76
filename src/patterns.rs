//! Fixed lookup data for the 5x5 matrix: digit bitmaps and the color
//! palette cycled by the buttons.
//!
//! The bitmap table is carried over from the board's stock firmware as-is
//! and is treated as opaque data; rows are listed top to bottom, cells
//! left to right (row-major, matching the strip wiring).

use smart_leds::colors;

use crate::render::Rgb;
use crate::shared_constants::{DIGIT_COUNT, PALETTE_LEN, PIXEL_COUNT};

/// Colors cycled by the buttons, one step per confirmed press.
pub const COLOR_PALETTE: [Rgb; PALETTE_LEN] = [
    colors::RED,
    colors::GREEN,
    colors::BLUE,
    colors::YELLOW,
    colors::MAGENTA,
    colors::CYAN,
    colors::WHITE,
];

/// One 25-cell bitmap per digit; a nonzero cell is lit in the current color.
pub const DIGIT_PATTERNS: [[u8; PIXEL_COUNT]; DIGIT_COUNT] = [
    // 0
    [
        1, 1, 1, 1, 1, //
        1, 0, 0, 0, 1, //
        1, 0, 0, 0, 1, //
        1, 0, 0, 0, 1, //
        1, 1, 1, 1, 1, //
    ],
    // 1 (stock bitmap, kept verbatim)
    [
        0, 1, 1, 1, 0, //
        0, 0, 1, 0, 0, //
        0, 0, 1, 0, 0, //
        0, 1, 1, 0, 0, //
        0, 0, 1, 0, 0, //
    ],
    // 2
    [
        1, 1, 1, 1, 1, //
        1, 0, 0, 0, 0, //
        1, 1, 1, 1, 1, //
        0, 0, 0, 0, 1, //
        1, 1, 1, 1, 1, //
    ],
    // 3
    [
        1, 1, 1, 1, 1, //
        0, 0, 0, 0, 1, //
        1, 1, 1, 1, 1, //
        0, 0, 0, 0, 1, //
        1, 1, 1, 1, 1, //
    ],
    // 4
    [
        1, 0, 0, 0, 0, //
        0, 0, 0, 0, 1, //
        1, 1, 1, 1, 1, //
        1, 0, 0, 0, 1, //
        1, 0, 0, 0, 1, //
    ],
    // 5
    [
        1, 1, 1, 1, 1, //
        0, 0, 0, 0, 1, //
        1, 1, 1, 1, 1, //
        1, 0, 0, 0, 0, //
        1, 1, 1, 1, 1, //
    ],
    // 6
    [
        1, 1, 1, 1, 1, //
        1, 0, 0, 0, 1, //
        1, 1, 1, 1, 1, //
        1, 0, 0, 0, 0, //
        1, 1, 1, 1, 1, //
    ],
    // 7
    [
        0, 0, 0, 0, 1, //
        0, 1, 0, 0, 0, //
        0, 0, 1, 0, 0, //
        0, 0, 0, 1, 0, //
        1, 1, 1, 1, 1, //
    ],
    // 8
    [
        1, 1, 1, 1, 1, //
        1, 0, 0, 0, 1, //
        1, 1, 1, 1, 1, //
        1, 0, 0, 0, 1, //
        1, 1, 1, 1, 1, //
    ],
    // 9
    [
        1, 1, 1, 1, 1, //
        0, 0, 0, 0, 1, //
        1, 1, 1, 1, 1, //
        1, 0, 0, 0, 1, //
        1, 1, 1, 1, 1, //
    ],
];
