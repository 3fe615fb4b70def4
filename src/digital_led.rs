//! The GPIO variant of the LED: plain logic-level writes.

use embassy_rp::gpio;

use crate::led::MorseLed;

/// An LED on a driven digital output pin.
pub struct DigitalLed<'d> {
    led: gpio::Output<'d>,
}

impl<'d> DigitalLed<'d> {
    /// Wraps an already-configured output, e.g.
    /// `DigitalLed::new(gpio::Output::new(p.PIN_25, Level::Low))`.
    #[must_use]
    pub fn new(led: gpio::Output<'d>) -> Self {
        Self { led }
    }
}

impl MorseLed for DigitalLed<'_> {
    fn set_on(&mut self) {
        self.led.set_high();
    }

    fn set_off(&mut self) {
        self.led.set_low();
    }
}
