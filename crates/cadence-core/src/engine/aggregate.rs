//! Aggregator: derives phases, monthly milestones, weekly targets, and
//! the feasibility verdict from the daily allocations.

use std::collections::{BTreeMap, HashMap};

use jiff::civil::{Date, Weekday};
use jiff::Span;

use crate::error::{DateResultExt, Result};
use crate::models::{DailyAllocation, MonthlyMilestone, OrderedLesson, Phase, WeeklyTarget};

/// Fixed experience-point target for meeting a weekly goal.
pub const WEEKLY_GOAL_XP: u32 = 100;

/// Fixed experience-point target for meeting a monthly milestone.
pub const MONTHLY_GOAL_XP: u32 = 300;

/// Sentinel shortfall reported when average daily capacity is zero.
pub const INFEASIBLE_SENTINEL_DAYS: u32 = 999;

/// Walks the daily allocations in date order and opens a new phase each
/// time the owning section changes (including at the very first lesson).
/// A single-section curriculum naturally yields exactly one phase.
///
/// Deadline overrun flagging happens afterwards in [`flag_overrun_phases`]
/// so the walk itself stays a pure fold.
pub fn build_phases(allocations: &[DailyAllocation], lessons: &[OrderedLesson]) -> Vec<Phase> {
    let by_id: HashMap<&str, &OrderedLesson> =
        lessons.iter().map(|l| (l.id.as_str(), l)).collect();

    let mut phases: Vec<Phase> = Vec::new();
    let mut current: Option<Phase> = None;

    for alloc in allocations {
        for lesson_id in &alloc.lesson_ids {
            let Some(lesson) = by_id.get(lesson_id.as_str()) else {
                continue;
            };

            let section_changed = current
                .as_ref()
                .map_or(true, |p| p.section_id != lesson.section_id);

            if section_changed {
                if let Some(done) = current.take() {
                    phases.push(done);
                }
                current = Some(Phase {
                    section_id: lesson.section_id.clone(),
                    section_title: lesson.section_title.clone(),
                    phase_index: phases.len() as u32,
                    start_date: alloc.date,
                    end_date: alloc.date,
                    lesson_count: 0,
                    total_mins: 0,
                    milestone_label: format!("Complete {}", lesson.section_title),
                    cannot_complete_by_deadline: false,
                    warning_message: None,
                });
            }

            if let Some(phase) = current.as_mut() {
                phase.end_date = alloc.date;
                phase.lesson_count += 1;
                phase.total_mins += lesson.duration_mins();
            }
        }
    }

    if let Some(done) = current {
        phases.push(done);
    }

    phases
}

/// Flags phases whose end date falls after the deadline.
pub fn flag_overrun_phases(phases: &mut [Phase], deadline: Date) {
    for phase in phases {
        if phase.end_date > deadline {
            phase.cannot_complete_by_deadline = true;
            phase.warning_message = Some(format!(
                "At your current goal, \"{}\" cannot be completed by your deadline",
                phase.section_title
            ));
        }
    }
}

/// Groups phases by the calendar month containing each phase's end date.
/// Months are emitted in chronological order.
pub fn build_monthly_milestones(phases: &[Phase]) -> Vec<MonthlyMilestone> {
    let mut months: BTreeMap<Date, MonthlyMilestone> = BTreeMap::new();

    for phase in phases {
        let month = months
            .entry(phase.end_date.first_of_month())
            .or_insert_with(|| MonthlyMilestone {
                month_key: phase.end_date.strftime("%Y-%m").to_string(),
                month_label: phase.end_date.strftime("%B %Y").to_string(),
                sections_complete: Vec::new(),
                lesson_count: 0,
                xp_target: MONTHLY_GOAL_XP,
            });

        month.sections_complete.push(phase.section_title.clone());
        month.lesson_count += phase.lesson_count;
    }

    months.into_values().collect()
}

/// Monday of the ISO week containing the given date.
pub fn week_start(date: Date) -> Result<Date> {
    let days_since_monday = i64::from(date.weekday().since(Weekday::Monday));
    date.checked_sub(Span::new().days(days_since_monday))
        .date_context("week start out of calendar range")
}

/// Groups allocations by ISO week (Monday-anchored), summing allocated
/// minutes, assigned lesson identifiers, and available capacity. Weeks
/// are emitted in chronological order; over-capacity weeks get a warning
/// message (legitimately reachable, since the allocator always places at
/// least one lesson on a capacity-positive day).
pub fn build_weekly_targets(
    allocations: &[DailyAllocation],
    weekday_capacity_mins: u32,
    weekend_capacity_mins: u32,
) -> Result<Vec<WeeklyTarget>> {
    let mut weeks: BTreeMap<Date, WeeklyTarget> = BTreeMap::new();

    for alloc in allocations {
        let start = week_start(alloc.date)?;

        let week = weeks.entry(start).or_insert_with(|| WeeklyTarget {
            week_start: start,
            week_label: format!("Week of {}", start.strftime("%b %d, %Y")),
            lesson_ids: Vec::new(),
            total_mins: 0,
            capacity_mins: 0,
            xp_target: WEEKLY_GOAL_XP,
            over_capacity_warning: false,
            over_capacity_message: None,
        });

        week.lesson_ids.extend(alloc.lesson_ids.iter().cloned());
        week.total_mins += alloc.total_alloc_mins;
        week.capacity_mins += alloc
            .day_type
            .capacity_mins(weekday_capacity_mins, weekend_capacity_mins);
    }

    let mut targets: Vec<WeeklyTarget> = weeks.into_values().collect();
    for week in &mut targets {
        if week.total_mins > week.capacity_mins {
            week.over_capacity_warning = true;
            week.over_capacity_message = Some(format!(
                "This week's plan ({} min) exceeds your goal ({} min)",
                week.total_mins, week.capacity_mins
            ));
        }
    }

    Ok(targets)
}

/// Feasibility verdict plus remediation hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feasibility {
    /// Whether every lesson was assigned to some day
    pub is_feasible: bool,
    /// Shortfall in whole days when infeasible
    pub infeasible_by_days: u32,
    /// Hint: buffer days that could be dropped
    pub remove_buffer_to_fit_days: Option<u32>,
    /// Hint: days the deadline could be pushed
    pub push_deadline_days: Option<u32>,
}

impl Feasibility {
    fn feasible() -> Self {
        Self {
            is_feasible: true,
            infeasible_by_days: 0,
            remove_buffer_to_fit_days: None,
            push_deadline_days: None,
        }
    }
}

/// Feasibility holds iff every input lesson was assigned. Otherwise the
/// shortfall is the unscheduled minutes divided by the average daily
/// capacity across study days, rounded up, with a sentinel when that
/// average is zero. The hints are informational; nothing is auto-applied.
pub fn assess_feasibility(
    lessons: &[OrderedLesson],
    allocations: &[DailyAllocation],
    buffer_day_count: u32,
) -> Feasibility {
    let scheduled: usize = allocations.iter().map(|a| a.lesson_ids.len()).sum();
    if scheduled >= lessons.len() {
        return Feasibility::feasible();
    }

    let total_lesson_mins: u64 = lessons.iter().map(|l| u64::from(l.duration_mins())).sum();
    let available_mins: u64 = allocations
        .iter()
        .map(|a| u64::from(a.capacity_mins))
        .sum();
    let study_day_count = allocations
        .iter()
        .filter(|a| a.day_type.is_study_day())
        .count()
        .max(1) as u64;

    let overflow_mins = total_lesson_mins.saturating_sub(available_mins);
    let avg_daily_capacity = available_mins / study_day_count;

    let infeasible_by_days = if avg_daily_capacity == 0 {
        INFEASIBLE_SENTINEL_DAYS
    } else {
        overflow_mins
            .div_ceil(avg_daily_capacity)
            .min(u64::from(u32::MAX)) as u32
    };

    Feasibility {
        is_feasible: false,
        infeasible_by_days,
        remove_buffer_to_fit_days: Some(buffer_day_count),
        push_deadline_days: Some(infeasible_by_days),
    }
}
