//! Hardware seams consumed by the tasks.
//!
//! The firmware binary implements these for the nRF52840 SAADC and GPIO;
//! tests implement them with plain values.

/// Joystick axis, i.e. one analog channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Source of 12-bit joystick readings.
#[allow(async_fn_in_trait)]
pub trait AnalogInput {
    /// Convert one channel. Suspends until the conversion completes; there
    /// is no timeout, a stalled converter stalls the caller.
    async fn sample(&mut self, axis: Axis) -> u16;
}

/// The confirm button, already translated from its electrical level.
pub trait DigitalInput {
    fn is_pressed(&self) -> bool;
}

impl<T: DigitalInput + ?Sized> DigitalInput for &T {
    fn is_pressed(&self) -> bool {
        (**self).is_pressed()
    }
}

/// Converter that reads both joystick channels in one scan, returned as
/// `[vertical, horizontal]`.
#[allow(async_fn_in_trait)]
pub trait DualChannelScan {
    async fn scan(&mut self) -> [u16; 2];
}

/// Per-axis reads on top of a two-channel scan.
///
/// The vertical read triggers the scan and keeps the horizontal half for
/// the read that follows, so a vertical-then-horizontal sample costs one
/// conversion round.
pub struct ScannedJoystick<S> {
    scanner: S,
    pending_horizontal: Option<u16>,
}

impl<S> ScannedJoystick<S> {
    pub const fn new(scanner: S) -> Self {
        Self {
            scanner,
            pending_horizontal: None,
        }
    }
}

impl<S: DualChannelScan> AnalogInput for ScannedJoystick<S> {
    async fn sample(&mut self, axis: Axis) -> u16 {
        match axis {
            Axis::Vertical => {
                let [vertical, horizontal] = self.scanner.scan().await;
                self.pending_horizontal = Some(horizontal);
                vertical
            }
            Axis::Horizontal => match self.pending_horizontal.take() {
                Some(horizontal) => horizontal,
                None => self.scanner.scan().await[1],
            },
        }
    }
}
