//! Task bodies.
//!
//! Each function here is the whole life of one periodic task. They are
//! generic over the hardware seams so `main.rs` only has to instantiate
//! them inside `#[embassy_executor::task]` wrappers.
//!
//! | task               | period | writes                         |
//! |--------------------|--------|--------------------------------|
//! | input sampler      | 50 ms  | sample, selection, session     |
//! | long-press monitor | 100 ms | long press, running, screen    |
//! | render loop        | 100 ms | (display only)                 |
//! | game engine        | 100 ms | running, screen (on game over) |
//!
//! The display serializer is the only lock; everything else goes through
//! the atomics in [`SharedState`].

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Instant, Timer};

use crate::config::{
    GAME_OVER_DWELL_MS, GAME_TICK_MS, LAUNCH_PAUSE_MS, LONG_PRESS_HOLD_MS, LONG_PRESS_POLL_MS,
    MENU_ITEMS, MENU_TITLE, RENDER_PERIOD_MS, SAMPLE_PERIOD_MS, SETTLE_DELAY_MS,
};
use crate::game::rng::Rng;
use crate::game::{ActiveGame, Game, Tick};
use crate::io::{AnalogInput, Axis, DigitalInput};
use crate::state::{InputSample, SharedState};
use crate::ui::{DisplaySerializer, Launch, LongPress, NavEvent, Navigator, Surface};

/// How a game session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionEnd {
    /// Long press (or a newer session) took the console away.
    Cancelled,
    /// Collision; the Game Over screen was shown.
    GameOver { score: u32 },
}

/// Read the vertical channel, then the horizontal one, then the button.
pub async fn read_sample<A, B>(joystick: &mut A, button: &B) -> InputSample
where
    A: AnalogInput,
    B: DigitalInput,
{
    let y_axis = joystick.sample(Axis::Vertical).await;
    let x_axis = joystick.sample(Axis::Horizontal).await;
    InputSample::new(x_axis, y_axis, button.is_pressed())
}

/// Draw the menu snapshot unless a game owns the screen.
pub async fn paint_menu<M, S>(shared: &SharedState, display: &DisplaySerializer<M, S>)
where
    M: RawMutex,
    S: Surface,
{
    if shared.is_game_running() {
        return;
    }
    if let Err(e) = display
        .render_menu(MENU_TITLE, &MENU_ITEMS, shared.selection())
        .await
    {
        warn!("Menu repaint failed: {}", e);
    }
}

/// Input sampler: publish a sample every period and, while the menu is
/// up, drive the navigator.
pub async fn input_sampler<A, B, M, S>(
    shared: &SharedState,
    joystick: &mut A,
    button: &B,
    display: &DisplaySerializer<M, S>,
    launch: &Signal<M, Launch>,
) -> !
where
    A: AnalogInput,
    B: DigitalInput,
    M: RawMutex,
    S: Surface,
{
    let mut navigator = Navigator::new();

    loop {
        let sample = read_sample(joystick, button).await;
        shared.store_sample(sample);

        let event = navigator.on_sample(shared, &sample);
        match event {
            NavEvent::Moved(selection) => {
                debug!("Menu: selection {}", selection);
                paint_menu(shared, display).await;
            }
            NavEvent::Launch(request) => {
                info!("Menu: launching {}", request.game);
                launch.signal(request);
            }
            NavEvent::None => {}
        }

        if event.needs_settle() {
            Timer::after_millis(SETTLE_DELAY_MS).await;
        }
        Timer::after_millis(SAMPLE_PERIOD_MS).await;
    }
}

/// Long-press monitor: the only way out of a running game.
pub async fn long_press_monitor<B, M, S>(
    shared: &SharedState,
    button: &B,
    display: &DisplaySerializer<M, S>,
) -> !
where
    B: DigitalInput,
    M: RawMutex,
    S: Surface,
{
    let mut detector = LongPress::new(LONG_PRESS_HOLD_MS);

    loop {
        if detector.poll(button.is_pressed(), Instant::now().as_millis()) {
            info!("Long press: leaving {}", shared.screen());
            shared.trigger_long_press();
            paint_menu(shared, display).await;
        }
        Timer::after_millis(LONG_PRESS_POLL_MS).await;
    }
}

/// Render loop: repaint the menu every period while no game runs.
pub async fn render_loop<M, S>(shared: &SharedState, display: &DisplaySerializer<M, S>) -> !
where
    M: RawMutex,
    S: Surface,
{
    loop {
        paint_menu(shared, display).await;
        Timer::after_millis(RENDER_PERIOD_MS).await;
    }
}

/// Game engine: wait for a launch, run the session, repeat.
pub async fn game_engine<M, S>(
    shared: &SharedState,
    display: &DisplaySerializer<M, S>,
    launch: &Signal<M, Launch>,
    rng: &mut Rng,
) -> !
where
    M: RawMutex,
    S: Surface,
{
    loop {
        let request = launch.wait().await;
        let end = run_session(shared, display, request, rng).await;
        info!("Session ended: {}", end);
    }
}

/// One game session, from the launch message to the exit transition.
///
/// Cancellation is cooperative: the long-press flag is checked once per
/// tick and the loop returns on its own.
pub async fn run_session<M, S>(
    shared: &SharedState,
    display: &DisplaySerializer<M, S>,
    request: Launch,
    rng: &mut Rng,
) -> SessionEnd
where
    M: RawMutex,
    S: Surface,
{
    let Launch { game, session } = request;

    if let Err(e) = display.render_message(game.launch_message()).await {
        warn!("Launch message dropped: {}", e);
    }
    Timer::after_millis(LAUNCH_PAUSE_MS).await;

    let mut active = ActiveGame::new(game, rng);
    if let ActiveGame::Snake(_) = active {
        if let Err(e) = display.render_game(&active).await {
            warn!("Frame dropped: {}", e);
        }
    }

    loop {
        if shared.long_press_raised() || !shared.is_current(session) {
            return SessionEnd::Cancelled;
        }

        match active.tick(&shared.sample(), rng) {
            Tick::Idle => {}
            Tick::Advanced => {
                if let Err(e) = display.render_game(&active).await {
                    warn!("Frame dropped: {}", e);
                }
            }
            Tick::Over { score } => {
                info!("Game over, score {}", score);
                if let Err(e) = display.render_game_over(score).await {
                    warn!("Game over screen dropped: {}", e);
                }
                Timer::after_millis(GAME_OVER_DWELL_MS).await;
                if shared.finish_session(session) {
                    paint_menu(shared, display).await;
                }
                return SessionEnd::GameOver { score };
            }
        }

        Timer::after_millis(GAME_TICK_MS).await;
    }
}
