//! Games and the interface the engine drives them through.
//!
//! Every title implements [`Game`]. The engine task holds an
//! [`ActiveGame`] for the lifetime of a session, ticks it once per period
//! with the latest input sample and renders whatever it reports.

pub mod placeholder;
pub mod rng;
pub mod snake;


use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::DrawTarget;

use crate::state::InputSample;
use placeholder::Placeholder;
use rng::Rng;
use snake::SnakeGame;

/// Titles reachable from the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameKind {
    Tetris,
    Snake,
    Pong,
}

impl GameKind {
    /// Menu row that launches this game.
    pub const fn menu_index(self) -> u8 {
        match self {
            GameKind::Tetris => 1,
            GameKind::Snake => 2,
            GameKind::Pong => 3,
        }
    }

    pub fn from_menu_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(GameKind::Tetris),
            2 => Some(GameKind::Snake),
            3 => Some(GameKind::Pong),
            _ => None,
        }
    }

    /// Status line shown while the session starts.
    pub const fn launch_message(self) -> &'static str {
        match self {
            GameKind::Tetris => "Starting Tetris...",
            GameKind::Snake => "Starting Snake...",
            GameKind::Pong => "Starting Pong...",
        }
    }
}

/// Outcome of one simulation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// Nothing changed; no frame needed.
    Idle,
    /// State advanced; commit a new frame.
    Advanced,
    /// Session ended with this final score.
    Over { score: u32 },
}

pub trait Game {
    /// Reset to the start-of-session state.
    fn init(&mut self, rng: &mut Rng);

    /// Advance one period using the latest input sample.
    fn tick(&mut self, input: &InputSample, rng: &mut Rng) -> Tick;

    fn is_session_over(&self) -> bool;

    fn score(&self) -> u32;

    /// Compose the current frame. The target is already cleared.
    fn render<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>;
}

/// The game owned by the engine for the current session.
pub enum ActiveGame {
    Snake(SnakeGame),
    Placeholder(Placeholder),
}

impl ActiveGame {
    pub fn new(kind: GameKind, rng: &mut Rng) -> Self {
        match kind {
            GameKind::Snake => ActiveGame::Snake(SnakeGame::new(rng)),
            GameKind::Tetris | GameKind::Pong => ActiveGame::Placeholder(Placeholder::new(kind)),
        }
    }
}

impl Game for ActiveGame {
    fn init(&mut self, rng: &mut Rng) {
        match self {
            ActiveGame::Snake(g) => g.init(rng),
            ActiveGame::Placeholder(g) => g.init(rng),
        }
    }

    fn tick(&mut self, input: &InputSample, rng: &mut Rng) -> Tick {
        match self {
            ActiveGame::Snake(g) => g.tick(input, rng),
            ActiveGame::Placeholder(g) => g.tick(input, rng),
        }
    }

    fn is_session_over(&self) -> bool {
        match self {
            ActiveGame::Snake(g) => g.is_session_over(),
            ActiveGame::Placeholder(g) => g.is_session_over(),
        }
    }

    fn score(&self) -> u32 {
        match self {
            ActiveGame::Snake(g) => g.score(),
            ActiveGame::Placeholder(g) => g.score(),
        }
    }

    fn render<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        match self {
            ActiveGame::Snake(g) => g.render(target),
            ActiveGame::Placeholder(g) => g.render(target),
        }
    }
}
