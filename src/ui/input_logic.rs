use crate::config::{ADC_MAX, INITIAL_SELECTION, JOY_THRESHOLD};
use crate::state::InputSample;

/// A joystick deflection past the threshold on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stick {
    Up,
    Down,
    Left,
    Right,
}

fn near_max(value: u16) -> bool {
    value > ADC_MAX - JOY_THRESHOLD
}

fn near_min(value: u16) -> bool {
    value < JOY_THRESHOLD
}

/// Vertical deflection: high Y reads as down, low Y as up.
pub fn vertical(sample: &InputSample) -> Option<Stick> {
    if near_max(sample.y_axis) {
        Some(Stick::Down)
    } else if near_min(sample.y_axis) {
        Some(Stick::Up)
    } else {
        None
    }
}

/// Horizontal deflection. The X axis is mounted inverted: high X is left.
pub fn horizontal(sample: &InputSample) -> Option<Stick> {
    if near_max(sample.x_axis) {
        Some(Stick::Left)
    } else if near_min(sample.x_axis) {
        Some(Stick::Right)
    } else {
        None
    }
}

/// Move selection cursor one item up, stopping at the first selectable row.
pub fn select_prev(selected: u8) -> u8 {
    if selected > INITIAL_SELECTION {
        selected - 1
    } else {
        INITIAL_SELECTION
    }
}

/// Move selection cursor one item down if another item exists.
pub fn select_next(selected: u8, item_count: u8) -> u8 {
    if selected + 1 < item_count {
        selected + 1
    } else {
        selected
    }
}
