//! Polled, debounced bell push-button.
//!
//! ## Hardware
//!
//! Active-low momentary switch with the internal pull-up enabled. The
//! main loop samples the level every poll cycle and feeds it to
//! [`ButtonDriver::tick`] together with the current monotonic time.
//!
//! A press is reported once, after the contact has stayed closed for the
//! debounce window. Holding the button does not repeat.

/// Button events emitted after debouncing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Press,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonState {
    Released,
    DebounceWait { since_ms: u32 },
    Pressed,
}

pub struct ButtonDriver {
    gpio: i32,
    debounce_ms: u32,
    state: ButtonState,
}

impl ButtonDriver {
    pub fn new(gpio: i32, debounce_ms: u32) -> Self {
        Self {
            gpio,
            debounce_ms,
            state: ButtonState::Released,
        }
    }

    /// GPIO pin this button is attached to.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Call from the main loop at each poll.
    /// `pressed` is the raw contact level (true = closed).
    pub fn tick(&mut self, pressed: bool, now_ms: u32) -> Option<ButtonEvent> {
        match self.state {
            ButtonState::Released => {
                if pressed {
                    self.state = ButtonState::DebounceWait { since_ms: now_ms };
                }
                None
            }

            ButtonState::DebounceWait { since_ms } => {
                if !pressed {
                    // Bounce
                    self.state = ButtonState::Released;
                    return None;
                }
                if now_ms.wrapping_sub(since_ms) >= self.debounce_ms {
                    self.state = ButtonState::Pressed;
                    log::debug!("button(gpio{}): press", self.gpio);
                    return Some(ButtonEvent::Press);
                }
                None
            }

            ButtonState::Pressed => {
                if !pressed {
                    self.state = ButtonState::Released;
                }
                None
            }
        }
    }
}
