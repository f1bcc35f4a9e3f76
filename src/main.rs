//! Digit counter for the BitDogLab 5x5 LED matrix.
//!
//! Button A steps the displayed digit and its color forward, button B
//! steps them backward, and the red status LED blinks as a heartbeat.
//! Runs on a Raspberry Pi Pico RP2040. See the `README.md` for more
//! information.
#![no_std]
#![no_main]

use bitdog_counter::{
    Blinker, ButtonId, Buttons, Counter, Hardware, MatrixDisplay, MatrixNotifier, Never,
    PressFlags, Result,
};
use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use panic_probe as _;

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    // If it returns, something went wrong.
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Never> {
    let hardware = Hardware::default();

    static MATRIX_NOTIFIER: MatrixNotifier = MatrixDisplay::notifier();
    let display = MatrixDisplay::new(
        hardware.pio0,
        hardware.dma,
        hardware.matrix_pin,
        &MATRIX_NOTIFIER,
        spawner,
    )?;

    static PRESS_FLAGS: PressFlags = Buttons::notifier();
    let buttons = Buttons::new(hardware.button_a, hardware.button_b, &PRESS_FLAGS, spawner)?;

    let _blinker = Blinker::new(hardware.status_led, spawner)?;

    let mut counter = Counter::default();
    display.show(counter.digit(), counter.color());
    info!("counter running: {}", counter);

    // The single place business state changes: drain both sticky flags
    // each wakeup so neither button's event is ever lost.
    loop {
        buttons.wait_for_press().await;
        if buttons.take(ButtonId::A) {
            counter.increment();
            info!("button A: {}", counter);
            display.show(counter.digit(), counter.color());
        }
        if buttons.take(ButtonId::B) {
            counter.decrement();
            info!("button B: {}", counter);
            display.show(counter.digit(), counter.color());
        }
    }
}
