//! nRF52840 implementations of the library's hardware seams.
//!
//! Only the firmware binary compiles this module; the library never
//! names a peripheral.

mod button;
mod joystick;
mod oled;

pub use button::ConfirmButton;
pub use joystick::Joystick;
pub use oled::Oled;
