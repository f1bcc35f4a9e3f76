//! Debounced push-buttons with sticky press flags.
//!
//! Each physical button gets its own task and its own flag, so a bounce
//! burst on one button can never cancel the other button's pending
//! confirmation. A press is confirmed by the edge-triggered re-arm scheme
//! from [`confirm_press`]; the confirmed press is handed to the main loop
//! through [`PressFlags`], which only the main loop may clear.

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;
use portable_atomic::{AtomicBool, Ordering};

use crate::shared_constants::DEBOUNCE_WINDOW;

#[cfg(feature = "pico1")]
use defmt::{debug, info};
#[cfg(feature = "pico1")]
use embassy_executor::Spawner;
#[cfg(feature = "pico1")]
use embassy_rp::gpio::Input;

#[cfg(feature = "pico1")]
use crate::{Error, Result};

/// Identifies one of the two physical buttons.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub enum ButtonId {
    A,
    B,
}

/// Sticky per-button press flags plus a wake signal for the main loop.
///
/// Each flag is set only by its button's debounce task and cleared only by
/// the main loop ([`PressFlags::take`]); single-word atomics are all the
/// synchronization this hand-off needs. Repeated confirmations between two
/// polls collapse into one set flag.
pub struct PressFlags {
    a: AtomicBool,
    b: AtomicBool,
    wake: Signal<CriticalSectionRawMutex, ()>,
}

impl PressFlags {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            a: AtomicBool::new(false),
            b: AtomicBool::new(false),
            wake: Signal::new(),
        }
    }

    const fn flag(&self, id: ButtonId) -> &AtomicBool {
        match id {
            ButtonId::A => &self.a,
            ButtonId::B => &self.b,
        }
    }

    /// Marks a confirmed press and wakes the main loop. Called only from
    /// the button tasks.
    pub fn set(&self, id: ButtonId) {
        self.flag(id).store(true, Ordering::Release);
        self.wake.signal(());
    }

    /// Clears the flag for `id`, returning whether it was set. Only the
    /// main loop calls this.
    pub fn take(&self, id: ButtonId) -> bool {
        self.flag(id).swap(false, Ordering::AcqRel)
    }

    /// Waits until at least one press has been confirmed since the last
    /// wait. Returns immediately if one already is.
    pub async fn wait(&self) {
        self.wake.wait().await;
    }
}

impl Default for PressFlags {
    fn default() -> Self {
        Self::new()
    }
}

/// The edge/level source a debounce window runs against.
///
/// Implemented by `embassy_rp::gpio::Input` on hardware; host tests drive
/// the engine with scripted sources instead.
pub trait PressSource {
    /// Completes on the next falling edge (active-low button going down).
    async fn wait_for_press_edge(&mut self);

    /// Samples the current level; true while the button is held down.
    fn is_pressed(&mut self) -> bool;
}

/// Runs one debounce confirmation window after an initial falling edge.
///
/// Every further edge inside the window supersedes the pending check and
/// re-arms it, so a bounce burst collapses into a single confirmation at
/// the end of the first quiet [`DEBOUNCE_WINDOW`]. Once the window expires
/// the pin is re-sampled: still low means a genuine press (returns true);
/// released means the edge was noise (returns false).
pub async fn confirm_press<S: PressSource>(source: &mut S) -> bool {
    loop {
        match select(source.wait_for_press_edge(), Timer::after(DEBOUNCE_WINDOW)).await {
            // Another edge: the dropped timer is the cancelled check.
            Either::First(()) => {}
            Either::Second(()) => return source.is_pressed(),
        }
    }
}

#[cfg(feature = "pico1")]
impl PressSource for Input<'static> {
    async fn wait_for_press_edge(&mut self) {
        self.wait_for_falling_edge().await;
    }

    fn is_pressed(&mut self) -> bool {
        self.is_low()
    }
}

/// Handle for the two debounced buttons, held by the main loop.
#[cfg(feature = "pico1")]
pub struct Buttons<'a>(&'a PressFlags);

#[cfg(feature = "pico1")]
impl Buttons<'_> {
    /// Creates the static press flags shared with the button tasks.
    ///
    /// This should be assigned to a static variable and passed to
    /// [`Buttons::new`].
    #[must_use]
    pub const fn notifier() -> PressFlags {
        PressFlags::new()
    }

    /// Spawns one debounce task per button.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskSpawn`] if a task cannot be spawned.
    #[must_use = "Must be used to manage the spawned tasks"]
    pub fn new(
        button_a: Input<'static>,
        button_b: Input<'static>,
        notifier: &'static PressFlags,
        spawner: Spawner,
    ) -> Result<Self> {
        let token = button_task(button_a, ButtonId::A, notifier).map_err(Error::TaskSpawn)?;
        spawner.spawn(token);
        let token = button_task(button_b, ButtonId::B, notifier).map_err(Error::TaskSpawn)?;
        spawner.spawn(token);
        Ok(Self(notifier))
    }

    /// Waits until at least one press has been confirmed.
    pub async fn wait_for_press(&self) {
        self.0.wait().await;
    }

    /// Clears and returns the sticky flag for `id`.
    pub fn take(&self, id: ButtonId) -> bool {
        self.0.take(id)
    }
}

#[cfg(feature = "pico1")]
#[embassy_executor::task(pool_size = 2)]
async fn button_task(mut input: Input<'static>, id: ButtonId, flags: &'static PressFlags) -> ! {
    loop {
        input.wait_for_press_edge().await;
        if confirm_press(&mut input).await {
            info!("button {} press confirmed", id);
            flags.set(id);
        } else {
            debug!("button {} edge discarded as bounce", id);
        }
    }
}
