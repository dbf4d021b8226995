//! Stepwake - Step-to-Dismiss Watch Face Firmware
//!
//! Shows the time on an SH1106 panel and, at the configured wake time,
//! buzzes until the wearer has walked enough steps to prove they are up.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::rtc::Rtc;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use stepwake_drivers::display::Sh1106;
use stepwake_drivers::vibe::VibeMotor;

use crate::clock::RtcClock;
use crate::config::load_config;

/// Embedded configuration (compiled into firmware)
/// Edit watch.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../watch.toml");

mod channels;
mod clock;
mod config;
mod tasks;

// Shared by every task that needs the time
static CLOCK: StaticCell<RtcClock> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Stepwake firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config(EMBEDDED_CONFIG);

    let clock: &'static RtcClock = CLOCK.init(RtcClock::new(Rtc::new(p.RTC), config.clock));
    info!("RTC initialized");

    // SH1106 on I2C0 (SCL=GPIO5, SDA=GPIO4)
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, I2cConfig::default());
    let mut display = Sh1106::new(i2c);
    if let Err(e) = display.init() {
        warn!("Display init failed: {:?}", e);
    }
    info!("Display initialized");

    // Vibration motor MOSFET (GPIO15, active high)
    let motor = VibeMotor::new_active_high(Output::new(p.PIN_15, Level::Low));

    // Pedometer step interrupt (GPIO16) and dismiss button (GPIO14, active low)
    let step_pin = Input::new(p.PIN_16, Pull::Down);
    let button = Input::new(p.PIN_14, Pull::Up);

    spawner.spawn(tasks::tick_task(clock)).unwrap();
    spawner.spawn(tasks::vibe_task(motor)).unwrap();
    spawner.spawn(tasks::pedometer_task(step_pin, clock)).unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();
    spawner.spawn(tasks::alarm_task(clock, config.alarm)).unwrap();
    spawner
        .spawn(tasks::face_task(display, clock, config.wake))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
