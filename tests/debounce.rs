//! Host-level tests for the debounce engine and the sticky press flags,
//! driven by scripted press sources on the std time driver.
#![cfg(feature = "host")]

use std::time::Instant;

use bitdog_counter::{ButtonId, DEBOUNCE_WINDOW, PressFlags, PressSource, confirm_press};
use embassy_futures::block_on;
use embassy_time::{Duration, Timer};

/// A press source that replays a fixed script: `edge_gaps` are the delays
/// between successive falling edges, `held` is the pin level sampled when
/// a debounce window finally expires.
struct ScriptedButton {
    edge_gaps: &'static [u64],
    next_edge: usize,
    held: bool,
    samples: usize,
}

impl ScriptedButton {
    fn new(edge_gaps: &'static [u64], held: bool) -> Self {
        Self {
            edge_gaps,
            next_edge: 0,
            held,
            samples: 0,
        }
    }
}

impl PressSource for ScriptedButton {
    async fn wait_for_press_edge(&mut self) {
        match self.edge_gaps.get(self.next_edge) {
            Some(&gap_ms) => {
                self.next_edge += 1;
                Timer::after(Duration::from_millis(gap_ms)).await;
            }
            // Script exhausted: no further edges ever arrive.
            None => core::future::pending().await,
        }
    }

    fn is_pressed(&mut self) -> bool {
        self.samples += 1;
        self.held
    }
}

#[test]
fn single_edge_still_held_confirms_once() {
    let mut button = ScriptedButton::new(&[], true);
    let start = Instant::now();
    let confirmed = block_on(confirm_press(&mut button));
    assert!(confirmed);
    assert_eq!(button.samples, 1);
    assert!(start.elapsed() >= std::time::Duration::from_millis(DEBOUNCE_WINDOW.as_millis()));
}

#[test]
fn edge_released_before_window_is_discarded() {
    let mut button = ScriptedButton::new(&[], false);
    let confirmed = block_on(confirm_press(&mut button));
    assert!(!confirmed);
    assert_eq!(button.samples, 1);
}

#[test]
fn bounce_burst_collapses_to_one_confirmation() {
    // Four more edges, 5 ms apart, all inside the first window; only the
    // window armed by the last edge gets to re-sample the pin.
    let mut button = ScriptedButton::new(&[5, 5, 5, 5], true);
    let start = Instant::now();
    let confirmed = block_on(confirm_press(&mut button));
    assert!(confirmed);
    assert_eq!(button.samples, 1);
    // 4 * 5 ms of bouncing plus one full quiet window.
    assert!(start.elapsed() >= std::time::Duration::from_millis(4 * 5 + 50));
}

#[test]
fn bounce_burst_ending_released_sets_nothing() {
    let mut button = ScriptedButton::new(&[5, 5, 5], false);
    let confirmed = block_on(confirm_press(&mut button));
    assert!(!confirmed);
    assert_eq!(button.samples, 1);
}

#[test]
fn late_edge_rearms_the_window() {
    // An edge 40 ms in lands inside the first window and restarts it, so
    // confirmation cannot complete before 40 + 50 ms.
    let mut button = ScriptedButton::new(&[40], true);
    let start = Instant::now();
    let confirmed = block_on(confirm_press(&mut button));
    assert!(confirmed);
    assert!(start.elapsed() >= std::time::Duration::from_millis(40 + 50));
}

#[test]
fn press_flags_are_sticky_and_independent() {
    let flags = PressFlags::new();
    flags.set(ButtonId::A);
    flags.set(ButtonId::B);

    // A wake is already pending, so the wait completes immediately.
    block_on(flags.wait());

    assert!(flags.take(ButtonId::A));
    assert!(flags.take(ButtonId::B));

    // Cleared flags stay cleared until the next confirmed press.
    assert!(!flags.take(ButtonId::A));
    assert!(!flags.take(ButtonId::B));
}

#[test]
fn taking_one_flag_leaves_the_other_set() {
    let flags = PressFlags::new();
    flags.set(ButtonId::B);
    assert!(!flags.take(ButtonId::A));
    assert!(flags.take(ButtonId::B));
}
