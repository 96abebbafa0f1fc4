use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch; pre-epoch times clamp to zero.
pub fn unix_millis(t: SystemTime) -> i64 {
    t.duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}
