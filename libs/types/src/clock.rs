//! Wall-clock source for order and trade timestamps

use chrono::Utc;

/// Current time as Unix nanos.
///
/// Falls back to microsecond precision scaled to nanos once the nanosecond
/// representation overflows `i64` (after year 2262).
pub fn unix_nanos() -> i64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros().saturating_mul(1_000))
}
