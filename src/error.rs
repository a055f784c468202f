//! Unified error type for pocket-arcade.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the firmware.
///
/// None of these are fatal: a failed frame is logged and dropped, the
/// next period repaints.  Peripheral bring-up failures never reach this
/// type, they panic in `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Drawing into or flushing the display buffer failed (I²C NACK, bus error).
    Display,

    /// The display lock was not released within `DISPLAY_LOCK_TIMEOUT_MS`.
    DisplayTimeout,
}

impl From<embassy_time::TimeoutError> for Error {
    fn from(_: embassy_time::TimeoutError) -> Self {
        Error::DisplayTimeout
    }
}
