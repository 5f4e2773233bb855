//! Port traits — the boundary between the ring logic and the platform.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ RingController (domain)
//! ```
//!
//! Digital output and blocking delay come straight from `embedded-hal`
//! (`OutputPin`, `DelayNs`). The monotonic clock has no `embedded-hal`
//! equivalent, so it lives here.

// ───────────────────────────────────────────────────────────────
// Time port (driven adapter: platform timer → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock since an arbitrary epoch (usually boot).
///
/// The counter is 32-bit and wraps after ~49.7 days. Consumers must
/// compare readings with `wrapping_sub`, never plain subtraction.
pub trait TimePort {
    fn now_ms(&self) -> u32;
}
