//! Two-axis analog joystick on the SAADC.
//!
//! Channel 0 is the vertical axis (AIN0 / P0.02), channel 1 the
//! horizontal axis (AIN1 / P0.03).  Both are converted at 12 bits in one
//! scan; the converter can report slightly negative values near ground,
//! which are clamped into `0..=ADC_MAX`.

use embassy_nrf::saadc::Saadc;
use pocket_arcade::config::ADC_MAX;
use pocket_arcade::io::DualChannelScan;

pub struct Joystick {
    adc: Saadc<'static, 2>,
}

impl Joystick {
    /// Calibrate the converter once before the first conversion.
    pub async fn new(adc: Saadc<'static, 2>) -> Self {
        adc.calibrate().await;
        Self { adc }
    }
}

impl DualChannelScan for Joystick {
    async fn scan(&mut self) -> [u16; 2] {
        let mut buf = [0i16; 2];
        self.adc.sample(&mut buf).await;
        buf.map(|raw| raw.clamp(0, ADC_MAX as i16) as u16)
    }
}
