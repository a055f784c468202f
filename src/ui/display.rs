//! Frame composition and the display serializer.
//!
//! The `draw_*` functions compose one screen into any monochrome
//! [`DrawTarget`]; they never flush.  [`DisplaySerializer`] owns the
//! physical surface behind an async mutex and is the only way tasks reach
//! it: each `render_*` call takes the lock, clears, composes, commits once
//! and releases, so no task ever sees a half-drawn frame.

use core::fmt::Write;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};
use embassy_time::{with_timeout, Duration};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::config::{
    CELL_SIZE, DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_WIDTH, SCOREBOARD_HEIGHT,
};
use crate::error::Error;
use crate::game::snake::Cell;
use crate::game::Game;

/// A monochrome frame buffer that can be pushed to the panel in one go.
pub trait Surface: DrawTarget<Color = BinaryColor> {
    /// Send the composed buffer to the panel.
    fn commit(&mut self) -> Result<(), Error>;
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

fn centered_x(text: &str) -> i32 {
    ((DISPLAY_WIDTH - text.len() as i32 * FONT_WIDTH) / 2).max(0)
}

fn score_line(score: u32) -> heapless::String<20> {
    let mut line = heapless::String::new();
    let _ = write!(line, "Score: {}", score);
    line
}

/// Single status line, centered on the panel.
pub fn draw_message<D>(target: &mut D, message: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_baseline(
        message,
        Point::new(centered_x(message), DISPLAY_HEIGHT / 2 - 5),
        text_style(),
        Baseline::Top,
    )
    .draw(target)?;
    Ok(())
}

/// Centered title, then one row per entry at `y = (index + 1) * 10` with a
/// `"> "` marker in front of the selected one.  `items[0]` has menu index 1.
pub fn draw_menu<D>(target: &mut D, title: &str, items: &[&str], selected: u8) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_baseline(title, Point::new(centered_x(title), 0), text_style(), Baseline::Top)
        .draw(target)?;

    for (row, name) in items.iter().enumerate() {
        let index = row as u8 + 1;
        let marker = if index == selected { "> " } else { "  " };
        let mut line: heapless::String<24> = heapless::String::new();
        let _ = line.push_str(marker);
        let _ = line.push_str(name);
        let y = (index as i32 + 1) * 10;
        Text::with_baseline(line.as_str(), Point::new(0, y), text_style(), Baseline::Top)
            .draw(target)?;
    }
    Ok(())
}

/// Pixel rectangle covered by a grid cell.
pub fn cell_rect(cell: Cell) -> Rectangle {
    Rectangle::new(
        Point::new(
            cell.col as i32 * CELL_SIZE,
            cell.row as i32 * CELL_SIZE + SCOREBOARD_HEIGHT,
        ),
        Size::new(CELL_SIZE as u32, CELL_SIZE as u32),
    )
}

/// Score header, playfield border, food and every body cell.
pub fn draw_snake_frame<D>(target: &mut D, body: &[Cell], food: Cell, score: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let fill = PrimitiveStyle::with_fill(BinaryColor::On);

    Text::with_baseline(score_line(score).as_str(), Point::zero(), text_style(), Baseline::Top)
        .draw(target)?;

    Rectangle::new(
        Point::new(0, SCOREBOARD_HEIGHT),
        Size::new(DISPLAY_WIDTH as u32, (DISPLAY_HEIGHT - SCOREBOARD_HEIGHT) as u32),
    )
    .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
    .draw(target)?;

    cell_rect(food).into_styled(fill).draw(target)?;
    for segment in body {
        cell_rect(*segment).into_styled(fill).draw(target)?;
    }
    Ok(())
}

/// "Game Over" and the final score, both centered.
pub fn draw_game_over<D>(target: &mut D, score: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    const GAME_OVER: &str = "Game Over";
    let score = score_line(score);

    Text::with_baseline(
        GAME_OVER,
        Point::new(centered_x(GAME_OVER), DISPLAY_HEIGHT / 2 - 10),
        text_style(),
        Baseline::Top,
    )
    .draw(target)?;
    Text::with_baseline(
        score.as_str(),
        Point::new(centered_x(score.as_str()), DISPLAY_HEIGHT / 2 + 2),
        text_style(),
        Baseline::Top,
    )
    .draw(target)?;
    Ok(())
}

/// Exclusive, scoped access to the display surface.
///
/// With `lock_timeout = None` acquisition waits forever.  With a timeout a
/// holder that never lets go surfaces as [`Error::DisplayTimeout`] instead
/// of freezing every task that draws.
pub struct DisplaySerializer<M: RawMutex, S> {
    surface: Mutex<M, S>,
    lock_timeout: Option<Duration>,
}

impl<M: RawMutex, S: Surface> DisplaySerializer<M, S> {
    pub const fn new(surface: S, lock_timeout: Option<Duration>) -> Self {
        Self {
            surface: Mutex::new(surface),
            lock_timeout,
        }
    }

    /// Acquire the surface. The guard releases it on drop.
    pub async fn lock(&self) -> Result<MutexGuard<'_, M, S>, Error> {
        match self.lock_timeout {
            Some(timeout) => Ok(with_timeout(timeout, self.surface.lock()).await?),
            None => Ok(self.surface.lock().await),
        }
    }

    /// Clear, compose and commit exactly one frame under the lock.
    pub async fn commit_frame<F>(&self, compose: F) -> Result<(), Error>
    where
        F: FnOnce(&mut S) -> Result<(), S::Error>,
    {
        let mut surface = self.lock().await?;
        surface.clear(BinaryColor::Off).map_err(|_| Error::Display)?;
        compose(&mut *surface).map_err(|_| Error::Display)?;
        surface.commit()
    }

    pub async fn render_message(&self, message: &str) -> Result<(), Error> {
        self.commit_frame(|s| draw_message(s, message)).await
    }

    pub async fn render_menu(&self, title: &str, items: &[&str], selected: u8) -> Result<(), Error> {
        self.commit_frame(|s| draw_menu(s, title, items, selected)).await
    }

    pub async fn render_snake_frame(&self, body: &[Cell], food: Cell, score: u32) -> Result<(), Error> {
        self.commit_frame(|s| draw_snake_frame(s, body, food, score)).await
    }

    /// Let the active game draw its own frame.
    pub async fn render_game<G: Game>(&self, game: &G) -> Result<(), Error> {
        self.commit_frame(|s| game.render(s)).await
    }

    pub async fn render_game_over(&self, score: u32) -> Result<(), Error> {
        self.commit_frame(|s| draw_game_over(s, score)).await
    }
}
