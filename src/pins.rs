//! GPIO assignments for the doorbell board.
//!
//! Single source of truth for pin numbers. `main` hands the matching
//! typed `esp-idf-hal` pins to the drivers; the numbers here label them in
//! logs.

/// Digital output driving the bell solenoid / buzzer transistor (active HIGH).
pub const BELL_GPIO: i32 = 2;

/// Digital input: bell push-button, active LOW with internal pull-up.
/// GPIO0 doubles as the BOOT strap button on most dev boards.
pub const BUTTON_GPIO: i32 = 0;
