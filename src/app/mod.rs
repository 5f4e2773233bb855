//! Application boundary — port traits the drivers are generic over.
//!
//! Everything that touches hardware or platform time is reached through
//! the traits in [`ports`], keeping the ring logic fully testable without
//! real peripherals.

pub mod ports;
