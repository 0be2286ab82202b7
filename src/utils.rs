//! Small helpers shared across the order book implementation.

use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch, used to stamp [`crate::Order::created_at`].
///
/// Kept as a single function so a caller embedding this crate in a
/// deterministic test harness has one place to intercept if it ever needs
/// an injectable clock; today it is a direct pass-through to the system clock.
pub fn current_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is set before the Unix epoch")
        .as_millis() as u64
}
