//! Read-model helpers for downstream endpoints: today's allocation and
//! the upcoming weekly view. Pure projections over a stored plan; they
//! never trigger recalculation.

use std::collections::HashMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::aggregate::week_start;
use crate::error::Result;
use crate::models::{CompletionSnapshot, Curriculum, DayType, StudyPlan, WeeklyTarget};

/// Number of weeks returned by [`weekly_view`].
pub const WEEKLY_VIEW_WEEKS: usize = 4;

/// A lesson within today's view, enriched with completion state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodayLesson {
    /// Lesson identifier
    pub id: String,
    /// Lesson title
    pub title: String,
    /// Planned minutes for the lesson
    pub duration_mins: u32,
    /// Whether the user already completed it
    pub completed: bool,
}

/// Today's allocation projected for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodayView {
    /// Calendar date (today)
    pub date: Date,
    /// Day classification
    pub day_type: DayType,
    /// Capacity in minutes for the day
    pub capacity_mins: u32,
    /// Total planned minutes
    pub total_alloc_mins: u32,
    /// Whether the day is overloaded
    pub is_heavy_day: bool,
    /// Lessons planned for today, in order
    pub lessons: Vec<TodayLesson>,
}

/// One week of the upcoming weekly view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekView {
    /// The underlying weekly target
    #[serde(flatten)]
    pub target: WeeklyTarget,
    /// How many of the week's lessons are already complete
    pub completed_count: u32,
    /// Whether this is the week containing today
    pub is_current: bool,
}

/// The allocation for `today`, with each lesson enriched with title,
/// minutes, and completion state. While the plan is overdue this is the
/// synthetic catch-up allocation; otherwise it is the stored allocation
/// matching today's date, or `None` when today is outside the window.
pub fn today_view(
    plan: &StudyPlan,
    curriculum: &Curriculum,
    completion: &CompletionSnapshot,
    today: Date,
) -> Option<TodayView> {
    let alloc = if plan.is_overdue {
        plan.today_allocation.as_ref()
    } else {
        plan.daily_allocations.iter().find(|a| a.date == today)
    }?;

    let lessons_by_id: HashMap<&str, (&str, u32)> = curriculum
        .sections
        .iter()
        .flat_map(|s| s.lessons.iter())
        .map(|l| (l.id.as_str(), (l.title.as_str(), l.duration_mins())))
        .collect();

    let lessons = alloc
        .lesson_ids
        .iter()
        .map(|id| {
            let (title, duration_mins) = lessons_by_id
                .get(id.as_str())
                .copied()
                .unwrap_or(("(unknown lesson)", 0));
            TodayLesson {
                id: id.clone(),
                title: title.to_string(),
                duration_mins,
                completed: completion.is_complete(id),
            }
        })
        .collect();

    Some(TodayView {
        date: alloc.date,
        day_type: alloc.day_type,
        capacity_mins: alloc.capacity_mins,
        total_alloc_mins: alloc.total_alloc_mins,
        is_heavy_day: alloc.is_heavy_day,
        lessons,
    })
}

/// Up to four weeks of targets starting from the week containing
/// `today`, each annotated with its completed-lesson count and whether
/// it is the current week.
pub fn weekly_view(
    plan: &StudyPlan,
    completion: &CompletionSnapshot,
    today: Date,
) -> Result<Vec<WeekView>> {
    let current_week = week_start(today)?;

    let views = plan
        .weekly_targets
        .iter()
        .filter(|w| w.week_start >= current_week)
        .take(WEEKLY_VIEW_WEEKS)
        .map(|w| WeekView {
            completed_count: w
                .lesson_ids
                .iter()
                .filter(|id| completion.is_complete(id))
                .count() as u32,
            is_current: w.week_start == current_week,
            target: w.clone(),
        })
        .collect();

    Ok(views)
}
