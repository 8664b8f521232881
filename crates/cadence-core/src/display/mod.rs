//! Display formatting for plan output.
//!
//! Domain models implement [`std::fmt::Display`] directly (in
//! [`models`]), producing markdown-formatted text, and wrapper types here
//! add contextual formatting for the read-model views. The same data can
//! then be rendered by the CLI, logged, or embedded in larger reports
//! without duplicating formatting logic.
//!
//! ## Module Organization
//!
//! - [`datetime`]: timestamp formatting utilities
//! - [`models`]: Display implementations for domain models
//! - Wrappers in this module: [`TodaySchedule`], [`UpcomingWeeks`]

pub mod datetime;
pub mod models;

use std::fmt;

pub use datetime::LocalDateTime;

use crate::engine::{TodayView, WeekView};

/// Wrapper for rendering today's schedule with per-lesson checkmarks.
pub struct TodaySchedule<'a>(pub &'a TodayView);

impl fmt::Display for TodaySchedule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(
            f,
            "## Today: {} ({}, {} / {} min{})",
            view.date,
            view.day_type,
            view.total_alloc_mins,
            view.capacity_mins,
            if view.is_heavy_day { ", heavy" } else { "" }
        )?;
        writeln!(f)?;

        if view.lessons.is_empty() {
            writeln!(f, "Nothing scheduled today.")?;
            return Ok(());
        }

        for lesson in &view.lessons {
            writeln!(
                f,
                "- [{}] {} ({} min)",
                if lesson.completed { "x" } else { " " },
                lesson.title,
                lesson.duration_mins
            )?;
        }
        Ok(())
    }
}

/// Wrapper for rendering the upcoming weekly view.
pub struct UpcomingWeeks<'a>(pub &'a [WeekView]);

impl UpcomingWeeks<'_> {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of weeks in the view.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for UpcomingWeeks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No upcoming weeks in the plan.")?;
            return Ok(());
        }

        writeln!(f, "## Upcoming Weeks")?;
        writeln!(f)?;
        for week in self.0 {
            write!(
                f,
                "{}{}",
                if week.is_current { "> " } else { "  " },
                week.target
            )?;
            writeln!(
                f,
                "    {} of {} lessons complete",
                week.completed_count,
                week.target.lesson_ids.len()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::engine::TodayLesson;
    use crate::models::DayType;

    #[test]
    fn test_today_schedule_renders_checkmarks() {
        let view = TodayView {
            date: date(2026, 9, 7),
            day_type: DayType::Weekday,
            capacity_mins: 60,
            total_alloc_mins: 60,
            is_heavy_day: false,
            lessons: vec![
                TodayLesson {
                    id: "a".to_string(),
                    title: "Intro".to_string(),
                    duration_mins: 10,
                    completed: true,
                },
                TodayLesson {
                    id: "b".to_string(),
                    title: "Deep Dive".to_string(),
                    duration_mins: 50,
                    completed: false,
                },
            ],
        };

        let output = format!("{}", TodaySchedule(&view));
        assert!(output.contains("- [x] Intro (10 min)"));
        assert!(output.contains("- [ ] Deep Dive (50 min)"));
        assert!(output.contains("60 / 60 min"));
    }

    #[test]
    fn test_upcoming_weeks_empty_message() {
        let output = format!("{}", UpcomingWeeks(&[]));
        assert!(output.contains("No upcoming weeks"));
    }
}
