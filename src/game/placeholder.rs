//! Titles that are listed in the menu but not implemented yet.
//!
//! They show their launch message and idle until the long press takes
//! the console back to the menu.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::DrawTarget;

use super::rng::Rng;
use super::{Game, GameKind, Tick};
use crate::state::InputSample;
use crate::ui::display::draw_message;

pub struct Placeholder {
    kind: GameKind,
}

impl Placeholder {
    pub fn new(kind: GameKind) -> Self {
        Self { kind }
    }
}

impl Game for Placeholder {
    fn init(&mut self, _rng: &mut Rng) {}

    fn tick(&mut self, _input: &InputSample, _rng: &mut Rng) -> Tick {
        Tick::Idle
    }

    fn is_session_over(&self) -> bool {
        false
    }

    fn score(&self) -> u32 {
        0
    }

    fn render<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        draw_message(target, self.kind.launch_message())
    }
}
