//! Grid-based Snake.
//!
//! The playfield is the display minus the score strip, divided into
//! 4×4 px cells: 32 columns × 13 rows.  The snake moves one cell per tick
//! in `direction` and only starts moving once the stick has been pushed
//! for the first time.
//!
//! Per tick:
//!
//! 1. Steer from the latest sample. A new direction is only accepted on
//!    the axis that is currently still, so the head can never turn back
//!    into its own neck. Vertical wins when both axes are deflected.
//! 2. Shift the body one cell; the tail cell is vacated unless the snake
//!    grows this tick.
//! 3. Leaving the playfield or running into the body ends the session.
//! 4. Landing on food scores a point, grows the body by one (up to
//!    `MAX_SNAKE_LEN`) and places new food.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::DrawTarget;
use heapless::Vec;

use super::rng::Rng;
use super::{Game, Tick};
use crate::config::{FOOD_PLACEMENT_ATTEMPTS, GRID_COLS, GRID_ROWS, MAX_SNAKE_LEN};
use crate::state::InputSample;
use crate::ui::display::draw_snake_frame;
use crate::ui::input_logic::{horizontal, vertical, Stick};

/// A playfield cell in grid units; row 0 is just below the score strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell {
    pub col: i16,
    pub row: i16,
}

impl Cell {
    pub const fn new(col: i16, row: i16) -> Self {
        Self { col, row }
    }

    /// Starting cell: horizontal centre, vertically at the middle of the
    /// whole panel (not of the playfield).
    pub const fn start() -> Self {
        Self::new(GRID_COLS / 2, 8)
    }

    pub fn step(self, direction: Direction) -> Self {
        Self::new(
            self.col + direction.dx as i16,
            self.row + direction.dy as i16,
        )
    }

    pub fn in_playfield(self) -> bool {
        (0..GRID_COLS).contains(&self.col) && (0..GRID_ROWS).contains(&self.row)
    }
}

/// Unit step on at most one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Direction {
    dx: i8,
    dy: i8,
}

impl Direction {
    pub const STILL: Self = Self { dx: 0, dy: 0 };
    pub const UP: Self = Self { dx: 0, dy: -1 };
    pub const DOWN: Self = Self { dx: 0, dy: 1 };
    pub const LEFT: Self = Self { dx: -1, dy: 0 };
    pub const RIGHT: Self = Self { dx: 1, dy: 0 };

    pub fn dx(self) -> i8 {
        self.dx
    }

    pub fn dy(self) -> i8 {
        self.dy
    }

    pub fn is_still(self) -> bool {
        self == Self::STILL
    }
}

impl From<Stick> for Direction {
    fn from(stick: Stick) -> Self {
        match stick {
            Stick::Up => Direction::UP,
            Stick::Down => Direction::DOWN,
            Stick::Left => Direction::LEFT,
            Stick::Right => Direction::RIGHT,
        }
    }
}

pub struct SnakeGame {
    body: Vec<Cell, MAX_SNAKE_LEN>,
    direction: Direction,
    food: Cell,
    score: u32,
    over: bool,
}

impl SnakeGame {
    pub fn new(rng: &mut Rng) -> Self {
        let mut game = Self {
            body: Vec::new(),
            direction: Direction::STILL,
            food: Cell::new(1, 1),
            score: 0,
            over: false,
        };
        game.init(rng);
        game
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    fn steer(&mut self, input: &InputSample) {
        let vertical = if self.direction.dy == 0 { vertical(input) } else { None };
        let horizontal = if self.direction.dx == 0 { horizontal(input) } else { None };
        if let Some(stick) = vertical.or(horizontal) {
            self.direction = stick.into();
        }
    }

    /// Food goes somewhere in the interior (never on the outermost ring).
    /// Occupied cells are redrawn a bounded number of times; after that the
    /// last candidate is kept even if the body covers it.
    fn place_food(&mut self, rng: &mut Rng) {
        let mut candidate = self.food;
        for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
            candidate = Cell::new(
                1 + rng.below((GRID_COLS - 2) as u32) as i16,
                1 + rng.below((GRID_ROWS - 2) as u32) as i16,
            );
            if !self.body.contains(&candidate) {
                break;
            }
        }
        self.food = candidate;
    }

    fn end(&mut self) -> Tick {
        self.over = true;
        Tick::Over { score: self.score }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(body: &[Cell], direction: Direction, food: Cell) -> Self {
        let mut cells = Vec::new();
        for cell in body {
            let _ = cells.push(*cell);
        }
        Self {
            body: cells,
            direction,
            food,
            score: 0,
            over: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Cell) {
        self.food = food;
    }
}

impl Game for SnakeGame {
    fn init(&mut self, rng: &mut Rng) {
        self.body.clear();
        let _ = self.body.push(Cell::start());
        self.direction = Direction::STILL;
        self.score = 0;
        self.over = false;
        self.place_food(rng);
    }

    fn tick(&mut self, input: &InputSample, rng: &mut Rng) -> Tick {
        if self.over {
            return Tick::Over { score: self.score };
        }

        self.steer(input);
        if self.direction.is_still() {
            return Tick::Idle;
        }

        let head = self.head().step(self.direction);
        let vacated = self.body[self.body.len() - 1];
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = head;

        if !head.in_playfield() {
            return self.end();
        }
        if self.body[1..].contains(&head) {
            return self.end();
        }

        if head == self.food {
            self.score += 1;
            // Growing keeps the cell the tail just left.
            let _ = self.body.push(vacated);
            self.place_food(rng);
        }

        Tick::Advanced
    }

    fn is_session_over(&self) -> bool {
        self.over
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn render<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        draw_snake_frame(target, &self.body, self.food, self.score)
    }
}
