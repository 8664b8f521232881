//! Calendar enumerator: classifies the days between start and deadline.

use std::collections::HashSet;

use jiff::civil::{Date, Weekday};
use jiff::Span;

use crate::error::{DateResultExt, Result};
use crate::models::DayType;

/// One enumerated calendar day. Capacity is intentionally absent: the
/// allocator resolves it from the caller's per-type budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyDay {
    /// Calendar date
    pub date: Date,
    /// Classification before capacity assignment
    pub day_type: DayType,
}

/// Enumerates the days in `[start, deadline)` in order.
///
/// The trailing `buffer_day_count` positions are labeled buffer
/// regardless of weekday, weekend, or rest classification; before that
/// tail, explicit rest dates are labeled rest and everything else falls
/// to weekday/weekend by day of week.
pub fn enumerate_study_days(
    start: Date,
    deadline: Date,
    buffer_day_count: u32,
    rest_days: &[Date],
) -> Result<Vec<StudyDay>> {
    let rest_set: HashSet<Date> = rest_days.iter().copied().collect();

    let total_days = i64::from((deadline - start).get_days());
    let study_days = (total_days - i64::from(buffer_day_count)).max(0);

    let mut days = Vec::with_capacity(total_days.max(0) as usize);

    for i in 0..study_days {
        let date = start
            .checked_add(Span::new().days(i))
            .date_context("study day out of calendar range")?;

        let day_type = if rest_set.contains(&date) {
            DayType::Rest
        } else if matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday) {
            DayType::Weekend
        } else {
            DayType::Weekday
        };

        days.push(StudyDay { date, day_type });
    }

    // Trailing buffer days override whatever the date would otherwise be.
    for i in 0..i64::from(buffer_day_count).min(total_days) {
        let date = start
            .checked_add(Span::new().days(study_days + i))
            .date_context("buffer day out of calendar range")?;
        days.push(StudyDay {
            date,
            day_type: DayType::Buffer,
        });
    }

    Ok(days)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_enumeration_covers_half_open_window() {
        // 2026-09-07 is a Monday.
        let days = enumerate_study_days(date(2026, 9, 7), date(2026, 9, 14), 0, &[])
            .expect("Failed to enumerate");
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].date, date(2026, 9, 7));
        assert_eq!(days[6].date, date(2026, 9, 13));
    }

    #[test]
    fn test_weekday_weekend_classification() {
        let days = enumerate_study_days(date(2026, 9, 7), date(2026, 9, 14), 0, &[])
            .expect("Failed to enumerate");
        // Monday through Friday, then Saturday and Sunday.
        for day in &days[..5] {
            assert_eq!(day.day_type, DayType::Weekday, "on {}", day.date);
        }
        assert_eq!(days[5].day_type, DayType::Weekend);
        assert_eq!(days[6].day_type, DayType::Weekend);
    }

    #[test]
    fn test_rest_days_relabeled_before_buffer_tail() {
        let rest = vec![date(2026, 9, 8)];
        let days = enumerate_study_days(date(2026, 9, 7), date(2026, 9, 14), 2, &rest)
            .expect("Failed to enumerate");
        assert_eq!(days[1].day_type, DayType::Rest);
        // Last two positions are buffer even though they would be
        // weekend days naturally.
        assert_eq!(days[5].day_type, DayType::Buffer);
        assert_eq!(days[6].day_type, DayType::Buffer);
    }

    #[test]
    fn test_buffer_overrides_rest_in_trailing_positions() {
        // Rest day lands on the final (buffer) position.
        let rest = vec![date(2026, 9, 13)];
        let days = enumerate_study_days(date(2026, 9, 7), date(2026, 9, 14), 1, &rest)
            .expect("Failed to enumerate");
        assert_eq!(days[6].date, date(2026, 9, 13));
        assert_eq!(days[6].day_type, DayType::Buffer);
    }

    #[test]
    fn test_deadline_in_past_yields_no_days() {
        let days = enumerate_study_days(date(2026, 9, 7), date(2026, 9, 1), 0, &[])
            .expect("Failed to enumerate");
        assert!(days.is_empty());
    }

    #[test]
    fn test_enumeration_spans_multi_year_windows() {
        // Two years out, crossing the 2028 leap day: 365 + 366 days.
        let days = enumerate_study_days(date(2026, 9, 7), date(2028, 9, 7), 3, &[])
            .expect("Failed to enumerate");
        assert_eq!(days.len(), 731);
        assert!(days[..728].iter().all(|d| d.day_type != DayType::Buffer));
        assert!(days[728..].iter().all(|d| d.day_type == DayType::Buffer));
    }

    #[test]
    fn test_buffer_larger_than_window_is_clamped() {
        let days = enumerate_study_days(date(2026, 9, 7), date(2026, 9, 9), 3, &[])
            .expect("Failed to enumerate");
        assert_eq!(days.len(), 2);
        assert!(days.iter().all(|d| d.day_type == DayType::Buffer));
    }
}
