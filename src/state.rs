//! Shared state store - the fields every task reads.
//!
//! Each field is an individual atomic with a single writer:
//!
//! - **Input sampler** - sole writer of the latest [`InputSample`].
//! - **Navigator / long-press monitor / game exit path** - writers of the
//!   screen, selection, session and running flags.
//!
//! There is no transaction across fields. A reader may see the selection
//! change between two loads; the fields are logically independent, so
//! only tearing of an individual value has to be prevented.
//!
//! Tasks get a `&'static SharedState` handle instead of reaching for
//! free-standing globals.

use core::sync::atomic::{AtomicBool, AtomicU16, AtomicU8, Ordering};

use crate::config::{ADC_MAX, ADC_MID, INITIAL_SELECTION, MENU_ITEM_COUNT};
use crate::game::GameKind;

/// What currently owns the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    MainMenu,
    Playing(GameKind),
}

impl Screen {
    /// Encode as the menu row that leads to this screen (0 for the menu).
    pub const fn to_u8(self) -> u8 {
        match self {
            Screen::MainMenu => 0,
            Screen::Playing(game) => game.menu_index(),
        }
    }

    /// Decode; anything that is not a game row maps to the menu.
    pub fn from_u8(raw: u8) -> Self {
        match GameKind::from_menu_index(raw) {
            Some(game) => Screen::Playing(game),
            None => Screen::MainMenu,
        }
    }
}

/// One joystick + button reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSample {
    /// Horizontal axis, `0..=4095`.
    pub x_axis: u16,
    /// Vertical axis, `0..=4095`.
    pub y_axis: u16,
    /// Confirm button held down.
    pub pressed: bool,
}

impl InputSample {
    /// Stick centred, button released.
    pub const IDLE: Self = Self {
        x_axis: ADC_MID,
        y_axis: ADC_MID,
        pressed: false,
    };

    /// Build a sample, clamping both axes to the 12-bit range.
    pub fn new(x_axis: u16, y_axis: u16, pressed: bool) -> Self {
        Self {
            x_axis: x_axis.min(ADC_MAX),
            y_axis: y_axis.min(ADC_MAX),
            pressed,
        }
    }
}

impl Default for InputSample {
    fn default() -> Self {
        Self::IDLE
    }
}

/// Identifies one game session so a late exit from an old session cannot
/// tear down a newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionId(u8);

/// Process-wide state shared by the sampler, monitor, render loop and game.
pub struct SharedState {
    screen: AtomicU8,
    selection: AtomicU8,
    game_running: AtomicBool,
    long_press: AtomicBool,
    ignore_next_press: AtomicBool,
    session: AtomicU8,
    x_axis: AtomicU16,
    y_axis: AtomicU16,
    pressed: AtomicBool,
}

impl SharedState {
    /// Power-on state: main menu, first game selected, nothing running.
    pub const fn new() -> Self {
        Self {
            screen: AtomicU8::new(Screen::MainMenu.to_u8()),
            selection: AtomicU8::new(INITIAL_SELECTION),
            game_running: AtomicBool::new(false),
            long_press: AtomicBool::new(false),
            ignore_next_press: AtomicBool::new(false),
            session: AtomicU8::new(0),
            x_axis: AtomicU16::new(InputSample::IDLE.x_axis),
            y_axis: AtomicU16::new(InputSample::IDLE.y_axis),
            pressed: AtomicBool::new(false),
        }
    }

    // Input sample (written by the sampler only)

    pub fn store_sample(&self, sample: InputSample) {
        self.x_axis.store(sample.x_axis, Ordering::Relaxed);
        self.y_axis.store(sample.y_axis, Ordering::Relaxed);
        self.pressed.store(sample.pressed, Ordering::Relaxed);
    }

    /// Latest sample. The three fields are loaded independently.
    pub fn sample(&self) -> InputSample {
        InputSample {
            x_axis: self.x_axis.load(Ordering::Relaxed),
            y_axis: self.y_axis.load(Ordering::Relaxed),
            pressed: self.pressed.load(Ordering::Relaxed),
        }
    }

    // Screen / selection

    pub fn screen(&self) -> Screen {
        Screen::from_u8(self.screen.load(Ordering::Acquire))
    }

    pub fn selection(&self) -> u8 {
        self.selection.load(Ordering::Acquire)
    }

    /// Store a new selection, clamped to the selectable rows.
    pub fn set_selection(&self, index: u8) {
        let clamped = index.clamp(INITIAL_SELECTION, MENU_ITEM_COUNT - 1);
        self.selection.store(clamped, Ordering::Release);
    }

    // Session lifecycle

    pub fn is_game_running(&self) -> bool {
        self.game_running.load(Ordering::Acquire)
    }

    pub fn long_press_raised(&self) -> bool {
        self.long_press.load(Ordering::Acquire)
    }

    /// Enter a game: clear a stale long-press edge, switch the screen and
    /// raise the running flag last so readers that see it also see the rest.
    pub fn begin_session(&self, game: GameKind) -> SessionId {
        self.long_press.store(false, Ordering::Release);
        self.screen
            .store(Screen::Playing(game).to_u8(), Ordering::Release);
        let id = self.session.fetch_add(1, Ordering::AcqRel).wrapping_add(1);
        self.game_running.store(true, Ordering::Release);
        SessionId(id)
    }

    /// Whether `session` is still the one that owns the console.
    pub fn is_current(&self, session: SessionId) -> bool {
        self.is_game_running() && self.session.load(Ordering::Acquire) == session.0
    }

    /// Full exit transition: stop the game, show the menu, reset selection.
    pub fn return_to_menu(&self) {
        self.game_running.store(false, Ordering::Release);
        self.screen
            .store(Screen::MainMenu.to_u8(), Ordering::Release);
        self.selection.store(INITIAL_SELECTION, Ordering::Release);
    }

    /// Exit at the end of `session` unless it was already left (long press)
    /// or something newer took over.
    pub fn finish_session(&self, session: SessionId) -> bool {
        if !self.is_current(session) {
            return false;
        }
        self.return_to_menu();
        true
    }

    /// Long press detected: raise the edge, swallow the release that
    /// follows, and take the full exit transition.
    pub fn trigger_long_press(&self) {
        self.long_press.store(true, Ordering::Release);
        self.ignore_next_press.store(true, Ordering::Release);
        self.return_to_menu();
    }

    // Ignore-next-press latch

    pub fn is_ignoring_press(&self) -> bool {
        self.ignore_next_press.load(Ordering::Acquire)
    }

    pub fn release_ignore(&self) {
        self.ignore_next_press.store(false, Ordering::Release);
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_on_state_is_menu_with_first_game_selected() {
        let shared = SharedState::new();
        assert_eq!(shared.screen(), Screen::MainMenu);
        assert_eq!(shared.selection(), INITIAL_SELECTION);
        assert!(!shared.is_game_running());
        assert!(!shared.long_press_raised());
        assert!(!shared.is_ignoring_press());
        assert_eq!(shared.sample(), InputSample::IDLE);
    }

    #[test]
    fn screen_encoding_follows_menu_rows() {
        assert_eq!(Screen::MainMenu.to_u8(), 0);
        assert_eq!(Screen::Playing(GameKind::Tetris).to_u8(), 1);
        assert_eq!(Screen::Playing(GameKind::Snake).to_u8(), 2);
        assert_eq!(Screen::Playing(GameKind::Pong).to_u8(), 3);
        for raw in 0..=3 {
            assert_eq!(Screen::from_u8(raw).to_u8(), raw);
        }
        assert_eq!(Screen::from_u8(200), Screen::MainMenu);
    }

    #[test]
    fn sample_axes_are_clamped() {
        let s = InputSample::new(9000, 4095, true);
        assert_eq!(s.x_axis, 4095);
        assert_eq!(s.y_axis, 4095);
        assert!(s.pressed);
    }

    #[test]
    fn store_and_load_sample() {
        let shared = SharedState::new();
        let s = InputSample::new(10, 4000, true);
        shared.store_sample(s);
        assert_eq!(shared.sample(), s);
    }

    #[test]
    fn selection_is_clamped_to_selectable_rows() {
        let shared = SharedState::new();
        shared.set_selection(0);
        assert_eq!(shared.selection(), 1);
        shared.set_selection(2);
        assert_eq!(shared.selection(), 2);
        shared.set_selection(42);
        assert_eq!(shared.selection(), MENU_ITEM_COUNT - 1);
    }

    #[test]
    fn begin_session_sets_running_and_screen() {
        let shared = SharedState::new();
        shared.trigger_long_press();
        let id = shared.begin_session(GameKind::Snake);
        assert!(shared.is_game_running());
        assert!(!shared.long_press_raised());
        assert_eq!(shared.screen(), Screen::Playing(GameKind::Snake));
        assert!(shared.is_current(id));
    }

    #[test]
    fn long_press_resets_to_menu() {
        let shared = SharedState::new();
        shared.set_selection(3);
        let id = shared.begin_session(GameKind::Pong);
        shared.trigger_long_press();
        assert!(shared.long_press_raised());
        assert!(shared.is_ignoring_press());
        assert!(!shared.is_game_running());
        assert_eq!(shared.screen(), Screen::MainMenu);
        assert_eq!(shared.selection(), INITIAL_SELECTION);
        assert!(!shared.is_current(id));
    }

    #[test]
    fn stale_session_cannot_end_newer_one() {
        let shared = SharedState::new();
        let old = shared.begin_session(GameKind::Snake);
        shared.trigger_long_press();
        let new = shared.begin_session(GameKind::Tetris);

        assert!(!shared.finish_session(old));
        assert!(shared.is_game_running());
        assert!(shared.is_current(new));

        assert!(shared.finish_session(new));
        assert!(!shared.is_game_running());
        assert_eq!(shared.screen(), Screen::MainMenu);
    }

    #[test]
    fn cancelled_session_leaves_menu_state_alone() {
        let shared = SharedState::new();
        let id = shared.begin_session(GameKind::Snake);
        shared.trigger_long_press();
        shared.set_selection(3);

        assert!(!shared.finish_session(id));
        assert_eq!(shared.selection(), 3);
        assert_eq!(shared.screen(), Screen::MainMenu);
    }

    #[test]
    fn session_ids_wrap() {
        let shared = SharedState::new();
        let mut last = shared.begin_session(GameKind::Snake);
        for _ in 0..300 {
            let next = shared.begin_session(GameKind::Snake);
            assert_ne!(next, last);
            last = next;
        }
        assert!(shared.is_current(last));
    }
}
