use embassy_time::Duration;

// The matrix is a 5x5 grid of WS2812 pixels, wired as one strip in
// row-major order.
pub const MATRIX_SIDE: usize = 5;
pub const PIXEL_COUNT: usize = MATRIX_SIDE * MATRIX_SIDE;

pub const DIGIT_COUNT: usize = 10;
pub const PALETTE_LEN: usize = 7;

/// Quiet period a press must survive before it counts as confirmed.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(50);

/// Delay between status-LED toggles (100 ms toggles, 5 Hz blink).
pub const BLINK_INTERVAL: Duration = Duration::from_millis(100);
