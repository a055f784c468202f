//! pocket-arcade firmware entry point.
//!
//! Brings up the SAADC joystick, the confirm button and the SSD1306 panel,
//! paints the main menu and spawns the four periodic tasks:
//!
//! - input sampler (50 ms): joystick + button, drives the menu
//! - long-press monitor (100 ms): 1 s hold returns to the menu
//! - render loop (100 ms): menu repaint while no game runs
//! - game engine (100 ms ticks): one session per launch request
//!
//! Peripheral bring-up failures halt here; nothing after start-up panics.

#![no_std]
#![no_main]

mod board;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::peripherals::{self, TWISPI0};
use embassy_nrf::saadc::{self, ChannelConfig, Saadc};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, rng};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Duration;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use board::{ConfirmButton, Joystick, Oled};
use pocket_arcade::config::DISPLAY_LOCK_TIMEOUT_MS;
use pocket_arcade::game::rng::Rng;
use pocket_arcade::io::ScannedJoystick;
use pocket_arcade::tasks;
use pocket_arcade::ui::{DisplaySerializer, Launch};
use pocket_arcade::SharedState;

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    RNG => rng::InterruptHandler<peripherals::RNG>;
});

type Panel = Oled<Twim<'static, TWISPI0>>;
type Display = DisplaySerializer<CriticalSectionRawMutex, Panel>;

static SHARED: SharedState = SharedState::new();
static LAUNCH: Signal<CriticalSectionRawMutex, Launch> = Signal::new();
static DISPLAY: StaticCell<Display> = StaticCell::new();
static BUTTON: StaticCell<ConfirmButton> = StaticCell::new();

#[embassy_executor::task]
async fn input_sampler_task(
    mut joystick: ScannedJoystick<Joystick>,
    button: &'static ConfirmButton,
    display: &'static Display,
) {
    tasks::input_sampler(&SHARED, &mut joystick, button, display, &LAUNCH).await
}

#[embassy_executor::task]
async fn long_press_task(button: &'static ConfirmButton, display: &'static Display) {
    tasks::long_press_monitor(&SHARED, button, display).await
}

#[embassy_executor::task]
async fn render_task(display: &'static Display) {
    tasks::render_loop(&SHARED, display).await
}

#[embassy_executor::task]
async fn game_task(display: &'static Display, mut rng: Rng) {
    tasks::game_engine(&SHARED, display, &LAUNCH, &mut rng).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("pocket-arcade starting");

    // Seed the game RNG from the hardware TRNG.
    let mut trng = rng::Rng::new(p.RNG, Irqs);
    let mut seed = [0u8; 4];
    trng.fill_bytes(&mut seed).await;
    let rng = Rng::new(u32::from_le_bytes(seed));

    // Joystick: channel 0 = Y (P0.02), channel 1 = X (P0.03).
    let mut adc_config = saadc::Config::default();
    adc_config.resolution = saadc::Resolution::_12BIT;
    let y_axis = ChannelConfig::single_ended(p.P0_02);
    let x_axis = ChannelConfig::single_ended(p.P0_03);
    let adc = Saadc::new(p.SAADC, Irqs, adc_config, [y_axis, x_axis]);
    let joystick = ScannedJoystick::new(Joystick::new(adc).await);

    let button: &'static ConfirmButton = BUTTON.init(ConfirmButton::new(p.P0_11));

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let panel = unwrap!(Oled::new(i2c));
    let display: &'static Display = DISPLAY.init(DisplaySerializer::new(
        panel,
        Some(Duration::from_millis(DISPLAY_LOCK_TIMEOUT_MS)),
    ));
    info!("Display initialised");

    tasks::paint_menu(&SHARED, display).await;

    unwrap!(spawner.spawn(input_sampler_task(joystick, button, display)));
    unwrap!(spawner.spawn(long_press_task(button, display)));
    unwrap!(spawner.spawn(render_task(display)));
    unwrap!(spawner.spawn(game_task(display, rng)));

    info!("All tasks spawned");
}
