//! Human-friendly rendering of how long ago a status was set.

use crate::time::Timestamp;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Format used once a status is at least a day old.
pub const ABSOLUTE_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Describe the age of `then` relative to `now`.
///
/// Under a minute (or in the future) is `just now`, under an hour counts
/// minutes, under a day counts hours, and anything older falls back to the
/// absolute UTC date.
#[must_use]
pub fn relative_age(then: Timestamp, now: Timestamp) -> String {
    let seconds = (now - then).num_seconds();
    if seconds < MINUTE {
        "just now".to_string()
    } else if seconds < HOUR {
        ago(seconds / MINUTE, "minute")
    } else if seconds < DAY {
        ago(seconds / HOUR, "hour")
    } else {
        then.format(ABSOLUTE_FORMAT).to_string()
    }
}

fn ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
