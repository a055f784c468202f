//! Application-wide constants and compile-time configuration.
//!
//! All timing parameters, joystick thresholds, board geometry and menu
//! contents live here so they can be tuned in one place.

// Task periods

/// Input sampler period (ms).
pub const SAMPLE_PERIOD_MS: u64 = 50;

/// Long-press monitor poll period (ms).
pub const LONG_PRESS_POLL_MS: u64 = 100;

/// Menu render loop period (ms).
pub const RENDER_PERIOD_MS: u64 = 100;

/// Game engine tick period (ms). One grid cell per tick.
pub const GAME_TICK_MS: u64 = 100;

// Gesture timing

/// Hold time after which the confirm button counts as a long press (ms).
pub const LONG_PRESS_HOLD_MS: u64 = 1000;

/// Settle delay after a menu move or a launch (ms).
pub const SETTLE_DELAY_MS: u64 = 500;

/// How long the Game Over screen stays up before returning to the menu (ms).
pub const GAME_OVER_DWELL_MS: u64 = 5000;

/// Pause between the "Starting ..." message and the first game tick (ms).
pub const LAUNCH_PAUSE_MS: u64 = 100;

/// Upper bound on waiting for the display lock (ms). A holder that keeps
/// the surface longer is reported as `Error::DisplayTimeout`.
pub const DISPLAY_LOCK_TIMEOUT_MS: u64 = 1000;

// Joystick

/// Full-scale value of a 12-bit SAADC conversion.
pub const ADC_MAX: u16 = 4095;

/// Resting value of a centred joystick axis.
pub const ADC_MID: u16 = 2048;

/// Distance from either rail that counts as a deflection.
pub const JOY_THRESHOLD: u16 = 300;

// Display geometry (SSD1306 128×64)

pub const DISPLAY_WIDTH: i32 = 128;
pub const DISPLAY_HEIGHT: i32 = 64;

/// Width of one glyph of the UI font (px).
pub const FONT_WIDTH: i32 = 6;

/// Snake grid cell edge (px).
pub const CELL_SIZE: i32 = 4;

/// Height of the score strip above the playfield (px).
pub const SCOREBOARD_HEIGHT: i32 = 12;

/// Playfield width in grid cells.
pub const GRID_COLS: i16 = (DISPLAY_WIDTH / CELL_SIZE) as i16;

/// Playfield height in grid cells.
pub const GRID_ROWS: i16 = ((DISPLAY_HEIGHT - SCOREBOARD_HEIGHT) / CELL_SIZE) as i16;

/// Maximum number of snake segments.
pub const MAX_SNAKE_LEN: usize = 50;

/// Candidate cells drawn before food placement settles for an occupied one.
pub const FOOD_PLACEMENT_ATTEMPTS: usize = 16;

/// Seed used when the hardware RNG hands back zero.
pub const RNG_FALLBACK_SEED: u32 = 0x2545_F491;

// Menu

/// Title row (index 0, not selectable).
pub const MENU_TITLE: &str = "Main Menu";

/// Selectable rows; row `i` of this table has menu index `i + 1`.
pub const MENU_ITEMS: [&str; 3] = ["Tetris", "Snake", "Pong"];

/// Number of menu rows including the title.
pub const MENU_ITEM_COUNT: u8 = MENU_ITEMS.len() as u8 + 1;

/// First selectable menu index; also the selection after a reset.
pub const INITIAL_SELECTION: u8 = 1;

// GPIO pin assignments (nRF52840-DK)
//
// These are logical names; the actual `embassy_nrf::peripherals::*` are
// taken in `main.rs`.  Adjust for your custom PCB.
//
//   Joystick Y (AIN0)  → P0.02
//   Joystick X (AIN1)  → P0.03
//   Confirm button     → P0.11 (active-low, internal pull-up)
//   I²C SDA            → P0.26
//   I²C SCL            → P0.27
