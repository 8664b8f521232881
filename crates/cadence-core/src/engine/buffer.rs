//! Buffer policy: maps days-until-deadline to trailing revision days.

/// Threshold table mapping days until deadline to trailing buffer days.
/// Descending, first match wins; lower bounds are inclusive.
pub const BUFFER_DAY_RULES: &[(i64, u32)] = &[(30, 3), (10, 2), (3, 1)];

/// Number of trailing revision/buffer days to reserve for the given
/// distance to the deadline. Negative distances (deadline already past)
/// reserve nothing.
pub fn buffer_day_count(days_until_deadline: i64) -> u32 {
    for &(min_days, buffer) in BUFFER_DAY_RULES {
        if days_until_deadline >= min_days {
            return buffer;
        }
    }
    0
}
