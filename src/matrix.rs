//! The 5x5 WS2812 matrix as a notifier-driven device.
//!
//! A spawned driver task owns the PIO state machine and DMA channel and
//! awaits whole frames on a signal; the [`MatrixDisplay`] handle renders a
//! digit/color pair and pushes the resulting frame. Every update is a full
//! 25-pixel frame in row-major order; there is no partial-frame path.

use embassy_executor::Spawner;
use embassy_rp::Peri;
use embassy_rp::peripherals::{DMA_CH0, PIN_7, PIO0};
use embassy_rp::pio::Pio;
use embassy_rp::pio_programs::ws2812::{Grb, PioWs2812, PioWs2812Program};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::render::{Frame, Rgb, digit_frame};
use crate::shared_constants::PIXEL_COUNT;
use crate::{Error, Result};

/// A type alias for the notifier that carries frames to the driver task.
pub type MatrixNotifier = Signal<CriticalSectionRawMutex, Frame>;

/// Handle for pushing frames to the matrix driver task.
pub struct MatrixDisplay<'a>(&'a MatrixNotifier);

impl MatrixDisplay<'_> {
    /// Creates the static notifier shared with the driver task.
    ///
    /// This should be assigned to a static variable and passed to
    /// [`MatrixDisplay::new`].
    #[must_use]
    pub const fn notifier() -> MatrixNotifier {
        Signal::new()
    }

    /// Spawns the driver task on the matrix's PIO, DMA channel, and data pin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskSpawn`] if the task cannot be spawned.
    #[must_use = "Must be used to manage the spawned task"]
    pub fn new(
        pio: Peri<'static, PIO0>,
        dma: Peri<'static, DMA_CH0>,
        pin: Peri<'static, PIN_7>,
        notifier: &'static MatrixNotifier,
        spawner: Spawner,
    ) -> Result<Self> {
        let token = matrix_driver_loop(pio, dma, pin, notifier).map_err(Error::TaskSpawn)?;
        spawner.spawn(token);
        Ok(Self(notifier))
    }

    /// Renders `digit` in `color` and hands the frame to the driver task.
    ///
    /// A frame signaled before the driver picked up the previous one
    /// replaces it; only the newest frame reaches the matrix.
    pub fn show(&self, digit: u8, color: Rgb) {
        self.0.signal(digit_frame(i32::from(digit), color));
    }
}

#[embassy_executor::task]
async fn matrix_driver_loop(
    pio: Peri<'static, PIO0>,
    dma: Peri<'static, DMA_CH0>,
    pin: Peri<'static, PIN_7>,
    notifier: &'static MatrixNotifier,
) -> ! {
    let Pio {
        mut common, sm0, ..
    } = Pio::new(pio, crate::pio_irqs::Pio0Irqs);
    let program = PioWs2812Program::new(&mut common);
    let mut driver =
        PioWs2812::<PIO0, 0, PIXEL_COUNT, Grb>::new(&mut common, sm0, dma, pin, &program);
    loop {
        let frame = notifier.wait().await;
        driver.write(&frame).await;
    }
}
