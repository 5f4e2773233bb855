//! Firmware configuration parameters
//!
//! Everything about the doorbell that may differ between installations.
//! The pulse width and ring interval are fixed in
//! [`drivers::ring`](crate::drivers::ring) and deliberately absent here.
//!
//! A JSON override can be baked in at build time through the
//! `DOORBELL_CONFIG` environment variable; otherwise defaults apply.

use serde::{Deserialize, Serialize};

use crate::drivers::ring::RING_INTERVAL_MS;
use crate::error::{ConfigError, Result};

/// Upper bound on any single ring batch.
pub const MAX_RINGS: u8 = 20;

/// Doorbell configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BellConfig {
    /// Rings emitted for one button press
    pub rings_per_press: u8,
    /// Rings emitted once at start-up (0 = silent boot)
    pub boot_rings: u8,
    /// Main loop period between `advance()` calls (milliseconds)
    pub poll_interval_ms: u32,
    /// Button debounce window (milliseconds)
    pub debounce_ms: u32,
}

impl Default for BellConfig {
    fn default() -> Self {
        Self {
            rings_per_press: 3,
            boot_rings: 1,
            poll_interval_ms: 10, // 100 Hz
            debounce_ms: 50,
        }
    }
}

impl BellConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    /// The result is not validated; call [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|_| ConfigError::Malformed.into())
    }

    /// Reject out-of-range values. Nothing is clamped.
    pub fn validate(&self) -> Result<()> {
        if self.rings_per_press == 0 || self.rings_per_press > MAX_RINGS {
            return Err(ConfigError::ValidationFailed("rings_per_press must be 1..=20").into());
        }
        if self.boot_rings > MAX_RINGS {
            return Err(ConfigError::ValidationFailed("boot_rings must be <= 20").into());
        }
        // The loop must poll faster than the ring interval or pulses drift late.
        if self.poll_interval_ms == 0 || self.poll_interval_ms >= RING_INTERVAL_MS {
            return Err(ConfigError::ValidationFailed(
                "poll_interval_ms must be 1..ring interval",
            )
            .into());
        }
        if self.debounce_ms == 0 || self.debounce_ms > 1000 {
            return Err(ConfigError::ValidationFailed("debounce_ms must be 1..=1000").into());
        }
        Ok(())
    }
}

/// Load the build-time override (if any) and validate it.
pub fn load() -> Result<BellConfig> {
    let config = match option_env!("DOORBELL_CONFIG") {
        Some(json) => BellConfig::from_json(json)?,
        None => BellConfig::default(),
    };
    config.validate()?;
    Ok(config)
}
