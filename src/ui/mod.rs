//! User interface subsystem - menu navigation, button gestures and the
//! OLED frame composition.
//!
//! ## Components
//!
//! - **Input logic**: joystick deflection and menu cursor arithmetic
//! - **Long press**: hold detection for the "back to menu" gesture
//! - **Menu**: navigator state machine driven by the input sampler
//! - **Display**: frame composition + the serializer guarding the panel

pub mod display;
pub mod input_logic;
pub mod long_press;
pub mod menu;

pub use display::{DisplaySerializer, Surface};
pub use long_press::LongPress;
pub use menu::{Launch, NavEvent, NavState, Navigator};
