//! Confirm button (active-low with internal pull-up).
//!
//! The button is read by level, not by edge: the input sampler and the
//! long-press monitor both poll it, each at its own period.

use embassy_nrf::gpio::{Input, Pin, Pull};
use embassy_nrf::Peripheral;
use pocket_arcade::io::DigitalInput;

pub struct ConfirmButton {
    pin: Input<'static>,
}

impl ConfirmButton {
    pub fn new(pin: impl Peripheral<P = impl Pin> + 'static) -> Self {
        Self {
            pin: Input::new(pin, Pull::Up),
        }
    }
}

impl DigitalInput for ConfirmButton {
    fn is_pressed(&self) -> bool {
        self.pin.is_low()
    }
}
