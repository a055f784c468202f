//! Library interface for pocket-arcade.
//!
//! Everything that does not touch a peripheral lives here so it can be
//! tested on the host: the shared state store, the menu navigator, the
//! long-press detector, the Snake engine, frame composition and the task
//! bodies themselves (generic over the input and display seams).
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and supplies the nRF52840 implementations of [`io::AnalogInput`],
//! [`io::DigitalInput`] and [`ui::Surface`].

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod error;
pub mod game;
pub mod io;
pub mod state;
pub mod tasks;
pub mod ui;

pub use error::Error;
pub use state::{InputSample, Screen, SharedState};

// ═══════════════════════════════════════════════════════════════════════════
// Cross-module scenarios
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use crate::config::{INITIAL_SELECTION, LONG_PRESS_HOLD_MS, LONG_PRESS_POLL_MS};
    use crate::game::rng::Rng;
    use crate::game::snake::{Cell, SnakeGame};
    use crate::game::{Game, GameKind, Tick};
    use crate::state::{InputSample, Screen, SharedState};
    use crate::ui::{LongPress, NavEvent, NavState, Navigator};

    const DOWN: InputSample = InputSample {
        x_axis: 2048,
        y_axis: 4095,
        pressed: false,
    };
    const RIGHT: InputSample = InputSample {
        x_axis: 0,
        y_axis: 2048,
        pressed: false,
    };
    const PRESS: InputSample = InputSample {
        x_axis: 2048,
        y_axis: 2048,
        pressed: true,
    };
    const IDLE: InputSample = InputSample::IDLE;

    /// Feed one sample the way the input sampler does.
    fn sample(shared: &SharedState, nav: &mut Navigator, s: InputSample) -> NavEvent {
        shared.store_sample(s);
        nav.on_sample(shared, &s)
    }

    // ════════════════════════════════════════════════════════════════════════
    // Menu → Snake → Game Over → Menu
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn snake_session_from_menu_to_game_over_and_back() {
        let shared = SharedState::new();
        let mut nav = Navigator::new();
        let mut rng = Rng::new(0x1234);

        assert_eq!(sample(&shared, &mut nav, DOWN), NavEvent::Moved(2));
        sample(&shared, &mut nav, IDLE);

        let launch = match sample(&shared, &mut nav, PRESS) {
            NavEvent::Launch(launch) => launch,
            other => panic!("expected launch, got {:?}", other),
        };
        assert_eq!(launch.game, GameKind::Snake);
        assert!(shared.is_game_running());
        assert_eq!(shared.screen(), Screen::Playing(GameKind::Snake));

        let mut game = SnakeGame::new(&mut rng);
        game.set_food(Cell::new(1, 1));
        let start = game.head();

        sample(&shared, &mut nav, RIGHT);
        for _ in 0..3 {
            assert_eq!(game.tick(&shared.sample(), &mut rng), Tick::Advanced);
        }
        assert_eq!(game.head(), Cell::new(start.col + 3, start.row));
        assert_eq!(nav.state(), NavState::GameRunning);

        sample(&shared, &mut nav, IDLE);
        let score = loop {
            if let Tick::Over { score } = game.tick(&shared.sample(), &mut rng) {
                break score;
            }
        };
        assert_eq!(score, 0);

        assert!(shared.finish_session(launch.session));
        assert!(!shared.is_game_running());
        assert_eq!(shared.screen(), Screen::MainMenu);
        assert_eq!(shared.selection(), INITIAL_SELECTION);

        sample(&shared, &mut nav, IDLE);
        assert_eq!(nav.state(), NavState::MainMenuIdle);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Long press
    // ════════════════════════════════════════════════════════════════════════

    /// Hold the button through the monitor's polls until it fires.
    fn hold_until_long_press(shared: &SharedState, detector: &mut LongPress, from_ms: u64) -> u64 {
        let mut now = from_ms;
        loop {
            if detector.poll(true, now) {
                shared.trigger_long_press();
                return now - from_ms;
            }
            now += LONG_PRESS_POLL_MS;
        }
    }

    #[test]
    fn long_press_leaves_a_running_game() {
        let shared = SharedState::new();
        let mut nav = Navigator::new();
        let mut detector = LongPress::new(LONG_PRESS_HOLD_MS);

        shared.set_selection(3);
        let launch = match sample(&shared, &mut nav, PRESS) {
            NavEvent::Launch(launch) => launch,
            other => panic!("expected launch, got {:?}", other),
        };
        assert_eq!(launch.game, GameKind::Pong);

        let held = hold_until_long_press(&shared, &mut detector, 10_000);
        assert_eq!(held, LONG_PRESS_HOLD_MS);
        assert!(shared.long_press_raised());
        assert!(!shared.is_current(launch.session));
        assert_eq!(shared.screen(), Screen::MainMenu);
        assert_eq!(shared.selection(), INITIAL_SELECTION);

        // The button is still down: nothing relaunches until it is released.
        assert_eq!(sample(&shared, &mut nav, PRESS), NavEvent::None);
        assert_eq!(nav.state(), NavState::MainMenuIdle);
        sample(&shared, &mut nav, IDLE);
        assert!(matches!(sample(&shared, &mut nav, PRESS), NavEvent::Launch(_)));
    }

    #[test]
    fn long_press_on_the_menu_resets_selection() {
        let shared = SharedState::new();
        let mut nav = Navigator::new();
        let mut detector = LongPress::new(LONG_PRESS_HOLD_MS);

        sample(&shared, &mut nav, DOWN);
        sample(&shared, &mut nav, DOWN);
        assert_eq!(shared.selection(), 3);

        hold_until_long_press(&shared, &mut detector, 0);
        assert_eq!(shared.selection(), INITIAL_SELECTION);
        assert_eq!(shared.screen(), Screen::MainMenu);
        assert!(!shared.is_game_running());
    }

    #[test]
    fn game_over_after_long_press_does_not_end_next_session() {
        let shared = SharedState::new();
        let mut nav = Navigator::new();
        let mut detector = LongPress::new(LONG_PRESS_HOLD_MS);

        let first = match sample(&shared, &mut nav, PRESS) {
            NavEvent::Launch(launch) => launch,
            other => panic!("expected launch, got {:?}", other),
        };
        hold_until_long_press(&shared, &mut detector, 0);
        detector.poll(false, 5_000);
        sample(&shared, &mut nav, IDLE);

        let second = match sample(&shared, &mut nav, PRESS) {
            NavEvent::Launch(launch) => launch,
            other => panic!("expected launch, got {:?}", other),
        };

        assert!(!shared.finish_session(first.session));
        assert!(shared.is_current(second.session));
    }
}
