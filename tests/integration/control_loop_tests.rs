//! Button → bell wiring as the firmware main loop runs it.

use doorbell::config::BellConfig;
use doorbell::drivers::button::{ButtonDriver, ButtonEvent};
use doorbell::{RingController, pins};

use crate::mock_hw::{MockClock, MockDelay, MockPin, SimTime};

/// One iteration of the firmware loop with a scripted button level.
struct Loop {
    time: SimTime,
    config: BellConfig,
    button: ButtonDriver,
    bell: RingController<MockPin, MockClock, MockDelay>,
}

impl Loop {
    fn boot(config: BellConfig) -> Self {
        let time = SimTime::starting_at(0);
        let mut bell = time.bell(pins::BELL_GPIO);
        bell.trigger(u32::from(config.boot_rings));
        Self {
            button: ButtonDriver::new(pins::BUTTON_GPIO, config.debounce_ms),
            time,
            config,
            bell,
        }
    }

    fn step(&mut self, pressed: bool) {
        if let Some(ButtonEvent::Press) = self.button.tick(pressed, self.time.now()) {
            self.bell.trigger(u32::from(self.config.rings_per_press));
        }
        self.bell.advance();
        self.time.advance(self.config.poll_interval_ms);
    }

    fn run(&mut self, pressed: bool, duration_ms: u32) {
        let end = self.time.now() + duration_ms;
        while self.time.now() < end {
            self.step(pressed);
        }
    }
}

#[test]
fn boot_chime_then_quiet() {
    let mut l = Loop::boot(BellConfig::default());
    l.run(false, 5_000);
    assert_eq!(l.time.pulses().len(), usize::from(BellConfig::default().boot_rings));
}

#[test]
fn silent_boot() {
    let mut l = Loop::boot(BellConfig {
        boot_rings: 0,
        ..BellConfig::default()
    });
    l.run(false, 5_000);
    assert!(l.time.writes().is_empty());
}

#[test]
fn press_rings_configured_batch() {
    let mut l = Loop::boot(BellConfig {
        boot_rings: 0,
        rings_per_press: 4,
        ..BellConfig::default()
    });
    l.run(false, 100);
    l.run(true, 150);
    l.run(false, 5_000);
    assert_eq!(l.time.pulses().len(), 4);
}

#[test]
fn held_button_rings_once() {
    let mut l = Loop::boot(BellConfig {
        boot_rings: 0,
        ..BellConfig::default()
    });
    l.run(true, 10_000);
    assert_eq!(l.time.pulses().len(), 3);
}

#[test]
fn press_during_batch_restarts_it() {
    let mut l = Loop::boot(BellConfig {
        boot_rings: 0,
        rings_per_press: 3,
        ..BellConfig::default()
    });
    l.run(true, 100);
    l.run(false, 600);
    let before = l.time.pulses().len();
    assert!(before >= 1 && before < 3, "first batch still in progress");
    l.run(true, 100);
    l.run(false, 5_000);
    assert_eq!(l.time.pulses().len(), before + 3);
}
