//! Bell ring controller.
//!
//! Pulses a single digital output a requested number of times: each pulse
//! holds the pin HIGH for [`PULSE_TIME_MS`], and consecutive pulses of a
//! batch are separated by more than [`RING_INTERVAL_MS`] measured from the
//! end of the previous pulse.
//!
//! The main loop calls [`RingController::advance`] every poll cycle and
//! [`RingController::trigger`] whenever a new batch should start.
//!
//! ## Blocking contract
//!
//! `advance()` returns immediately except when it emits a pulse, in which
//! case it blocks the caller for exactly `PULSE_TIME_MS` via the supplied
//! `DelayNs`. Budget the polling loop for that worst case.
//!
//! ## State machine
//!
//! | From    | Event                         | To      |
//! |---------|-------------------------------|---------|
//! | Idle    | `trigger(n > 0)`              | Ringing |
//! | Ringing | `trigger(n > 0)` (restart)    | Ringing |
//! | Ringing | `trigger(0)` / `cancel()`     | Idle    |
//! | Ringing | pulse, remaining > 0          | Ringing |
//! | Ringing | pulse, remaining reaches 0    | Idle    |

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::{debug, info, warn};

use crate::app::ports::TimePort;

/// How long the pin is held HIGH per pulse.
pub const PULSE_TIME_MS: u32 = 200;
/// Spacing that must be exceeded between the end of one pulse and the
/// start of the next.
pub const RING_INTERVAL_MS: u32 = 300;

/// Observable controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingState {
    Idle,
    Ringing { remaining: u32 },
}

pub struct RingController<P, C, D> {
    gpio: i32,
    pin: P,
    clock: C,
    delay: D,
    /// End of the last pulse. `None` means no pulse yet in this batch,
    /// so the next `advance()` fires without consulting the clock delta.
    last_ring_ms: Option<u32>,
    remaining_rings: u32,
}

impl<P, C, D> RingController<P, C, D>
where
    P: OutputPin,
    C: TimePort,
    D: DelayNs,
{
    /// Bind the controller to `pin`. Does not touch the pin or the clock.
    pub fn new(gpio: i32, pin: P, clock: C, delay: D) -> Self {
        Self {
            gpio,
            pin,
            clock,
            delay,
            last_ring_ms: None,
            remaining_rings: 0,
        }
    }

    /// Start a batch of `times` pulses, discarding whatever the previous
    /// batch still owed. The first pulse is due on the next `advance()`.
    /// `times == 0` leaves the controller idle.
    pub fn trigger(&mut self, times: u32) {
        if self.remaining_rings > 0 {
            warn!(
                "bell(gpio{}): restart discards {} pending ring(s)",
                self.gpio, self.remaining_rings
            );
        }
        self.last_ring_ms = None;
        self.remaining_rings = times;
        if times > 0 {
            info!("bell(gpio{}): ringing {} time(s)", self.gpio, times);
        }
    }

    /// Drop any pulses still owed. An in-flight pulse cannot be interrupted.
    pub fn cancel(&mut self) {
        self.trigger(0);
    }

    /// Poll from the main loop. Emits at most one pulse and returns
    /// whether it did.
    pub fn advance(&mut self) -> bool {
        if self.remaining_rings == 0 {
            return false;
        }

        let now = self.clock.now_ms();
        if let Some(last) = self.last_ring_ms {
            if now.wrapping_sub(last) <= RING_INTERVAL_MS {
                return false;
            }
        }

        self.pulse();

        self.remaining_rings -= 1;
        self.last_ring_ms = Some(self.clock.now_ms());
        debug!(
            "bell(gpio{}): pulse done, {} remaining",
            self.gpio, self.remaining_rings
        );
        if self.remaining_rings == 0 {
            info!("bell(gpio{}): batch complete", self.gpio);
        }
        true
    }

    fn pulse(&mut self) {
        if let Err(e) = self.pin.set_high() {
            warn!("bell(gpio{}): set_high failed: {:?}", self.gpio, e);
        }
        self.delay.delay_ms(PULSE_TIME_MS);
        if let Err(e) = self.pin.set_low() {
            warn!("bell(gpio{}): set_low failed: {:?}", self.gpio, e);
        }
    }
}

impl<P, C, D> RingController<P, C, D> {
    /// GPIO number this controller drives.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Pulses still owed in the current batch.
    pub fn remaining(&self) -> u32 {
        self.remaining_rings
    }

    pub fn is_ringing(&self) -> bool {
        self.remaining_rings > 0
    }

    pub fn state(&self) -> RingState {
        match self.remaining_rings {
            0 => RingState::Idle,
            remaining => RingState::Ringing { remaining },
        }
    }

    /// Tear down and hand back the pin, clock and delay.
    pub fn release(self) -> (P, C, D) {
        (self.pin, self.clock, self.delay)
    }
}
