//! Timestamp formatting for terminal output.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Renders a [`Timestamp`] in the system timezone as
/// `YYYY-MM-DD HH:MM:SS TZ`. Used for the plan's audit stamps
/// (`generated_at`, `last_recalc_at`), which are stored in UTC.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}
