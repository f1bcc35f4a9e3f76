//! Host-level tests for digit normalization and frame rendering.
#![cfg(feature = "host")]

use bitdog_counter::patterns::{COLOR_PALETTE, DIGIT_PATTERNS};
use bitdog_counter::render::BLACK;
use bitdog_counter::{PIXEL_COUNT, Rgb, digit_frame, normalize_digit, pixel_word};
use smart_leds::colors;

#[test]
fn normalize_maps_into_digit_range() {
    for digit in -100..=100 {
        let normalized = normalize_digit(digit);
        assert!(normalized <= 9, "normalize({digit}) = {normalized}");
        assert_eq!(normalized, normalize_digit(digit + 10), "period 10 at {digit}");
    }
}

#[test]
fn normalize_is_identity_on_valid_digits() {
    for digit in 0..10 {
        assert_eq!(normalize_digit(digit), digit as usize);
    }
}

#[test]
fn frame_matches_bitmap_cell_for_cell() {
    let color = colors::CYAN;
    for digit in 0..10 {
        let frame = digit_frame(digit, color);
        assert_eq!(frame.len(), PIXEL_COUNT);
        for (index, (&pixel, &cell)) in
            frame.iter().zip(DIGIT_PATTERNS[digit as usize].iter()).enumerate()
        {
            let expected = if cell == 1 { color } else { BLACK };
            assert_eq!(pixel, expected, "digit {digit}, cell {index}");
        }
    }
}

#[test]
fn negative_digit_renders_like_its_normalized_form() {
    let color = colors::YELLOW;
    assert_eq!(digit_frame(-3, color), digit_frame(7, color));
    assert_eq!(digit_frame(-10, color), digit_frame(0, color));
}

#[test]
fn rendering_is_deterministic() {
    let first = digit_frame(8, colors::MAGENTA);
    let second = digit_frame(8, colors::MAGENTA);
    assert_eq!(first, second);
}

#[test]
fn pixel_word_is_color_shifted_left_one_byte() {
    let color = Rgb::new(0x12, 0x34, 0x56);
    let packed = (u32::from(color.g) << 16) | (u32::from(color.r) << 8) | u32::from(color.b);
    assert_eq!(pixel_word(color), packed << 8);
}

#[test]
fn pixel_word_low_byte_is_always_zero() {
    for color in COLOR_PALETTE {
        assert_eq!(pixel_word(color) & 0xFF, 0);
    }
    assert_eq!(pixel_word(BLACK), 0);
}
