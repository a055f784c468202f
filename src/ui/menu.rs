//! Menu navigator - turns input samples into selection moves and launches.
//!
//! ```text
//!   MainMenuIdle ──press──▶ GameLaunching ──next sample──▶ GameRunning
//!        ▲                                                     │
//!        └──────────── long press / game over ─────────────────┘
//! ```
//!
//! The navigator runs inside the input sampler task.  It owns the
//! transition into a game; the way back is taken by whoever ends the
//! session (long-press monitor or game engine) through the shared store,
//! and the navigator notices it on its next sample.

use crate::config::MENU_ITEM_COUNT;
use crate::game::GameKind;
use crate::state::{InputSample, SessionId, SharedState};
use crate::ui::input_logic::{select_next, select_prev, vertical, Stick};

/// Navigator states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavState {
    MainMenuIdle,
    GameLaunching,
    GameRunning,
}

/// A launch request handed to the game engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Launch {
    pub game: GameKind,
    pub session: SessionId,
}

/// Result of feeding one sample to the navigator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavEvent {
    /// Nothing to do.
    None,
    /// Vertical gesture; carries the (possibly unchanged) selection.
    Moved(u8),
    /// Selected game launched.
    Launch(Launch),
}

impl NavEvent {
    /// Gestures that must be followed by the settle delay.
    pub fn needs_settle(&self) -> bool {
        !matches!(self, NavEvent::None)
    }
}

pub struct Navigator {
    state: NavState,
    /// Set once a press has launched something; cleared on release.
    button_latched: bool,
}

impl Navigator {
    pub const fn new() -> Self {
        Self {
            state: NavState::MainMenuIdle,
            button_latched: false,
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    /// Follow transitions made by other tasks.
    fn sync(&mut self, shared: &SharedState) {
        self.state = match (self.state, shared.is_game_running()) {
            (_, false) => NavState::MainMenuIdle,
            (NavState::MainMenuIdle, true) | (NavState::GameLaunching, true) => {
                NavState::GameRunning
            }
            (NavState::GameRunning, true) => NavState::GameRunning,
        };
    }

    /// Handle one sample. Only acts while the menu is showing.
    pub fn on_sample(&mut self, shared: &SharedState, sample: &InputSample) -> NavEvent {
        self.sync(shared);

        if !sample.pressed {
            self.button_latched = false;
            if shared.is_ignoring_press() {
                shared.release_ignore();
            }
        }

        if self.state != NavState::MainMenuIdle {
            return NavEvent::None;
        }

        let selected = shared.selection();
        match vertical(sample) {
            Some(Stick::Down) => {
                shared.set_selection(select_next(selected, MENU_ITEM_COUNT));
                return NavEvent::Moved(shared.selection());
            }
            Some(Stick::Up) => {
                shared.set_selection(select_prev(selected));
                return NavEvent::Moved(shared.selection());
            }
            _ => {}
        }

        if sample.pressed && !self.button_latched && !shared.is_ignoring_press() {
            self.button_latched = true;
            if let Some(game) = GameKind::from_menu_index(selected) {
                let session = shared.begin_session(game);
                self.state = NavState::GameLaunching;
                return NavEvent::Launch(Launch { game, session });
            }
        }

        NavEvent::None
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Screen;

    const DOWN: InputSample = InputSample {
        x_axis: 2048,
        y_axis: 4095,
        pressed: false,
    };
    const UP: InputSample = InputSample {
        x_axis: 2048,
        y_axis: 0,
        pressed: false,
    };
    const PRESS: InputSample = InputSample {
        x_axis: 2048,
        y_axis: 2048,
        pressed: true,
    };
    const IDLE: InputSample = InputSample::IDLE;

    #[test]
    fn down_moves_selection() {
        let shared = SharedState::new();
        let mut nav = Navigator::new();
        assert_eq!(nav.on_sample(&shared, &DOWN), NavEvent::Moved(2));
        assert_eq!(shared.selection(), 2);
    }

    #[test]
    fn repeated_moves_saturate() {
        let shared = SharedState::new();
        let mut nav = Navigator::new();
        for _ in 0..10 {
            nav.on_sample(&shared, &DOWN);
            assert!((1..MENU_ITEM_COUNT).contains(&shared.selection()));
        }
        assert_eq!(shared.selection(), MENU_ITEM_COUNT - 1);
        for _ in 0..10 {
            nav.on_sample(&shared, &UP);
            assert!((1..MENU_ITEM_COUNT).contains(&shared.selection()));
        }
        assert_eq!(shared.selection(), 1);
    }

    #[test]
    fn saturated_move_still_settles() {
        let shared = SharedState::new();
        let mut nav = Navigator::new();
        let ev = nav.on_sample(&shared, &UP);
        assert_eq!(ev, NavEvent::Moved(1));
        assert!(ev.needs_settle());
        assert!(!nav.on_sample(&shared, &IDLE).needs_settle());
    }

    #[test]
    fn press_launches_selected_game() {
        let shared = SharedState::new();
        let mut nav = Navigator::new();
        nav.on_sample(&shared, &DOWN);
        let ev = nav.on_sample(&shared, &PRESS);
        match ev {
            NavEvent::Launch(launch) => {
                assert_eq!(launch.game, GameKind::Snake);
                assert!(shared.is_current(launch.session));
            }
            other => panic!("expected launch, got {:?}", other),
        }
        assert_eq!(nav.state(), NavState::GameLaunching);
        assert_eq!(shared.screen(), Screen::Playing(GameKind::Snake));
    }

    #[test]
    fn no_navigation_while_game_runs() {
        let shared = SharedState::new();
        let mut nav = Navigator::new();
        nav.on_sample(&shared, &PRESS);
        assert_eq!(nav.on_sample(&shared, &DOWN), NavEvent::None);
        assert_eq!(nav.state(), NavState::GameRunning);
        assert_eq!(shared.selection(), 1);
    }

    #[test]
    fn returns_to_idle_when_session_ends() {
        let shared = SharedState::new();
        let mut nav = Navigator::new();
        nav.on_sample(&shared, &PRESS);
        nav.on_sample(&shared, &IDLE);
        assert_eq!(nav.state(), NavState::GameRunning);
        shared.return_to_menu();
        nav.on_sample(&shared, &IDLE);
        assert_eq!(nav.state(), NavState::MainMenuIdle);
    }

    #[test]
    fn held_button_launches_only_once() {
        let shared = SharedState::new();
        let mut nav = Navigator::new();
        assert!(matches!(nav.on_sample(&shared, &PRESS), NavEvent::Launch(_)));
        shared.return_to_menu();
        assert_eq!(nav.on_sample(&shared, &PRESS), NavEvent::None);
        nav.on_sample(&shared, &IDLE);
        assert!(matches!(nav.on_sample(&shared, &PRESS), NavEvent::Launch(_)));
    }

    #[test]
    fn press_after_long_press_is_swallowed_until_release() {
        let shared = SharedState::new();
        let mut nav = Navigator::new();
        shared.trigger_long_press();
        assert_eq!(nav.on_sample(&shared, &PRESS), NavEvent::None);
        assert!(shared.is_ignoring_press());
        nav.on_sample(&shared, &IDLE);
        assert!(!shared.is_ignoring_press());
        assert!(matches!(nav.on_sample(&shared, &PRESS), NavEvent::Launch(_)));
    }
}
