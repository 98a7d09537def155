//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `last_updated_time`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Format used by the polling endpoint: `YYYY-MM-DD HH:MM:SS`, UTC.
pub const WIRE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render `ts` in [`WIRE_FORMAT`].
#[must_use]
pub fn to_wire(ts: Timestamp) -> String {
    ts.format(WIRE_FORMAT).to_string()
}
