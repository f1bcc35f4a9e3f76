//! Fixed-rate heartbeat on the status LED, independent of button state.

#[cfg(feature = "pico1")]
use embassy_executor::Spawner;
#[cfg(feature = "pico1")]
use embassy_rp::gpio::{Level, Output};
#[cfg(feature = "pico1")]
use embassy_time::Timer;

#[cfg(feature = "pico1")]
use crate::shared_constants::BLINK_INTERVAL;
#[cfg(feature = "pico1")]
use crate::{Error, Result};

/// On/off state of the status LED; flipped on every timer firing.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, defmt::Format)]
pub enum BlinkState {
    #[default]
    Off,
    On,
}

impl BlinkState {
    /// The state after one more timer firing.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }

    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

/// Blinks the status LED at a fixed rate for as long as the board is
/// powered. Fire-and-forget; there is nothing to control after spawning.
#[cfg(feature = "pico1")]
pub struct Blinker;

#[cfg(feature = "pico1")]
impl Blinker {
    /// Spawns the blink task on the given LED output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskSpawn`] if the task cannot be spawned.
    #[must_use = "Must be used to manage the spawned task"]
    pub fn new(led: Output<'static>, spawner: Spawner) -> Result<Self> {
        let token = blink_loop(led).map_err(Error::TaskSpawn)?;
        spawner.spawn(token);
        Ok(Self)
    }
}

#[cfg(feature = "pico1")]
#[embassy_executor::task]
async fn blink_loop(mut led: Output<'static>) -> ! {
    let mut state = BlinkState::default();
    loop {
        // Fixed delay between toggles; no drift compensation.
        Timer::after(BLINK_INTERVAL).await;
        state = state.toggled();
        led.set_level(if state.is_on() { Level::High } else { Level::Low });
    }
}
