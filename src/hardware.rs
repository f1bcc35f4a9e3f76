use embassy_rp::peripherals::{DMA_CH0, PIN_7, PIO0};
use embassy_rp::{
    Peri,
    gpio::{self, Level},
};

/// Represents the hardware components of the BitDogLab counter.
pub struct Hardware {
    /// Button A, active-low with pull-up; steps the counter forward.
    pub button_a: gpio::Input<'static>,
    /// Button B, active-low with pull-up; steps the counter backward.
    pub button_b: gpio::Input<'static>,
    /// The red channel of the on-board RGB LED, used as the heartbeat.
    pub status_led: gpio::Output<'static>,
    /// PIO block driving the WS2812 matrix.
    pub pio0: Peri<'static, PIO0>,
    /// DMA channel feeding the matrix's PIO state machine.
    pub dma: Peri<'static, DMA_CH0>,
    /// Data pin of the 5x5 matrix.
    pub matrix_pin: Peri<'static, PIN_7>,
    // Green and blue channels of the RGB LED, held dark.
    _green: gpio::Output<'static>,
    _blue: gpio::Output<'static>,
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals = embassy_rp::init(embassy_rp::config::Config::default());

        let button_a = gpio::Input::new(peripherals.PIN_5, gpio::Pull::Up);
        let button_b = gpio::Input::new(peripherals.PIN_6, gpio::Pull::Up);

        let status_led = gpio::Output::new(peripherals.PIN_13, Level::Low);
        let green = gpio::Output::new(peripherals.PIN_11, Level::Low);
        let blue = gpio::Output::new(peripherals.PIN_12, Level::Low);

        Self {
            button_a,
            button_b,
            status_led,
            pio0: peripherals.PIO0,
            dma: peripherals.DMA_CH0,
            matrix_pin: peripherals.PIN_7,
            _green: green,
            _blue: blue,
        }
    }
}
