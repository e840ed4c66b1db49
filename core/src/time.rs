//! Time related utils.

use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Seconds since the unix epoch as a decimal string.
///
/// This is the representation carried by expiry headers.
pub fn format_epoch_seconds(t: DateTime) -> String {
    t.timestamp().to_string()
}
