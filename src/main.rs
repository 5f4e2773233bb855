//! Doorbell Firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Adapters (outer ring)                    │
//! │                                                          │
//! │  PinDriver(GPIO2)   Esp32TimeAdapter   FreeRtos          │
//! │  (OutputPin)        (TimePort)         (DelayNs)         │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ──────────────      │
//! │                                                          │
//! │     ButtonDriver ──press──▶ RingController               │
//! │                                                          │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! A single cooperative loop: sample the button, feed presses to the
//! bell, advance the bell, sleep one poll interval.

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{PinDriver, Pull};
use esp_idf_hal::peripherals::Peripherals;
use log::info;

use doorbell::adapters::time::Esp32TimeAdapter;
use doorbell::app::ports::TimePort;
use doorbell::config;
use doorbell::drivers::button::{ButtonDriver, ButtonEvent};
use doorbell::drivers::ring::RingController;
use doorbell::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Doorbell v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Config (build-time override or defaults) ───────────
    let config = config::load()?;
    info!("Config: {:?}", config);

    // ── 3. Peripherals ────────────────────────────────────────
    // Typed pins must match pins::BELL_GPIO / pins::BUTTON_GPIO.
    let peripherals = Peripherals::take()?;
    let mut bell_pin = PinDriver::output(peripherals.pins.gpio2)?;
    bell_pin.set_low()?;
    let mut button_pin = PinDriver::input(peripherals.pins.gpio0)?;
    button_pin.set_pull(Pull::Up)?;

    let time = Esp32TimeAdapter::new();
    let mut bell = RingController::new(pins::BELL_GPIO, bell_pin, time, FreeRtos);
    let mut button = ButtonDriver::new(pins::BUTTON_GPIO, config.debounce_ms);

    // ── 4. Boot chime ─────────────────────────────────────────
    bell.trigger(u32::from(config.boot_rings));

    // ── 5. Main loop ──────────────────────────────────────────
    info!(
        "Entering main loop (poll={}ms, rings/press={})",
        config.poll_interval_ms, config.rings_per_press
    );
    loop {
        if let Some(ButtonEvent::Press) = button.tick(button_pin.is_low(), time.now_ms()) {
            bell.trigger(u32::from(config.rings_per_press));
        }
        bell.advance();
        FreeRtos::delay_ms(config.poll_interval_ms);
    }
}
