//! Recalculation controller: the stateful entry points.
//!
//! [`generate`] performs the first run for a user/curriculum pair;
//! [`recalculate`] is invoked on login, on content changes, or on demand
//! and decides between no-op, completion, overdue handling, and a full
//! regeneration from today forward.
//!
//! Both are free functions over plain values: the caller passes the
//! previous plan in and persists the returned plan, so there is no
//! storage dependency anywhere in the engine. The same-day idempotency
//! guard is a logical check, not a concurrency primitive; callers that
//! can race concurrent triggers for one enrollment must serialize around
//! these calls themselves.

use jiff::civil::Date;
use jiff::Timestamp;
use log::info;

use super::{aggregate, allocator, buffer, calendar, sequencer};
use crate::error::{PlanError, Result};
use crate::models::{
    CompletionSnapshot, Curriculum, DailyAllocation, DayType, OrderedLesson, PlanStatus,
    RecalcLogEntry, ScheduleStatus, StudyPlan,
};
use crate::params::PlanParams;

/// Maximum number of retained recalculation audit entries.
pub const MAX_RECALC_LOG_ENTRIES: usize = 20;

/// Deadlines closer than this many days trigger the tight-deadline
/// warning.
pub const TIGHT_DEADLINE_DAYS: i64 = 10;

/// Generates the first study plan for a curriculum.
///
/// `today` is the caller's current civil date and becomes the start of
/// the plan window. Fails with [`PlanError::NotReady`] when the
/// curriculum has no lessons yet, and with
/// [`PlanError::StructuralInvariant`] on malformed section ordering.
/// Infeasibility is not a failure: the returned plan then carries
/// `is_feasible == false` plus remediation hints.
pub fn generate(
    curriculum: &Curriculum,
    params: &PlanParams,
    today: Date,
) -> Result<StudyPlan> {
    params.validate()?;

    if curriculum.lesson_count() == 0 {
        return Err(PlanError::NotReady {
            id: curriculum.id.clone(),
        });
    }

    let lessons = sequencer::linearize(curriculum)?;
    build_plan(&lessons, params, today)
}

/// Builds a plan window over the given (already linearized) lesson
/// sequence, starting at `start`. Shared by first-run generation and
/// standard recalculation (which passes only the incomplete suffix).
fn build_plan(lessons: &[OrderedLesson], params: &PlanParams, start: Date) -> Result<StudyPlan> {
    info!(
        "generating plan: {} lessons, deadline {}, reason {}",
        lessons.len(),
        params.deadline,
        params.reason
    );

    let days_until_deadline = i64::from((params.deadline - start).get_days());
    let buffer_day_count = buffer::buffer_day_count(days_until_deadline);

    let days = calendar::enumerate_study_days(
        start,
        params.deadline,
        buffer_day_count,
        &params.rest_days,
    )?;

    let daily_allocations = allocator::allocate(
        lessons,
        &days,
        params.weekday_capacity_mins,
        params.weekend_capacity_mins,
    );

    let feasibility = aggregate::assess_feasibility(lessons, &daily_allocations, buffer_day_count);

    let mut phases = aggregate::build_phases(&daily_allocations, lessons);
    aggregate::flag_overrun_phases(&mut phases, params.deadline);

    let monthly_milestones = aggregate::build_monthly_milestones(&phases);
    let weekly_targets = aggregate::build_weekly_targets(
        &daily_allocations,
        params.weekday_capacity_mins,
        params.weekend_capacity_mins,
    )?;

    let (tight_deadline_warning, tight_deadline_message) =
        tight_deadline(days_until_deadline, buffer_day_count);

    let new_end_date_message = if params.reason == "content-added" {
        phases.last().map(|p| {
            format!(
                "Your plan has been updated. New estimated completion: {}",
                p.end_date.strftime("%b %d, %Y")
            )
        })
    } else {
        None
    };

    let now = Timestamp::now();
    let plan = StudyPlan {
        generated_at: now,
        last_recalc_at: now,
        last_recalc_date: start,
        recalc_reason: params.reason.clone(),
        deadline: params.deadline,
        weekday_capacity_mins: params.weekday_capacity_mins,
        weekend_capacity_mins: params.weekend_capacity_mins,
        is_feasible: feasibility.is_feasible,
        infeasible_by_days: feasibility.infeasible_by_days,
        buffer_day_count,
        remove_buffer_to_fit_days: feasibility.remove_buffer_to_fit_days,
        push_deadline_days: feasibility.push_deadline_days,
        tight_deadline_warning,
        tight_deadline_message,
        phases,
        monthly_milestones,
        weekly_targets,
        daily_allocations,
        status: PlanStatus::Active,
        schedule_status: ScheduleStatus::OnTrack,
        schedule_message: None,
        is_overdue: false,
        today_allocation: None,
        actual_completion_date: None,
        new_end_date_message,
        recalc_log: Vec::new(),
    };

    info!(
        "plan generated: {} lessons, feasible={}, buffer={}",
        lessons.len(),
        plan.is_feasible,
        buffer_day_count
    );

    Ok(plan)
}

fn tight_deadline(days_until_deadline: i64, buffer_day_count: u32) -> (bool, Option<String>) {
    if days_until_deadline >= TIGHT_DEADLINE_DAYS {
        return (false, None);
    }
    let message = if buffer_day_count == 0 {
        "Tight deadline: no revision days reserved.".to_string()
    } else {
        format!(
            "Tight deadline: only {} revision {} reserved.",
            buffer_day_count,
            pluralize(u64::from(buffer_day_count), "day", "days")
        )
    };
    (true, Some(message))
}

fn pluralize<'a>(count: u64, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

/// Recalculates an existing plan. Transition rules, in priority order:
///
/// 1. no plan: [`PlanError::PlanNotFound`]
/// 2. already recalculated today: returned unchanged
/// 3. curriculum has no lessons: [`PlanError::NotReady`], as on first run
/// 4. everything complete: status `complete`, completion date stamped
/// 5. deadline in the past: overdue, all remaining lessons piled into a
///    synthetic today allocation; historical allocations untouched
/// 6. otherwise: drift measured against the previous plan, then a fresh
///    window built from today over the incomplete lessons, with an audit
///    log entry appended (log capped at [`MAX_RECALC_LOG_ENTRIES`])
pub fn recalculate(
    plan: Option<StudyPlan>,
    curriculum: &Curriculum,
    completion: &CompletionSnapshot,
    reason: &str,
    today: Date,
) -> Result<StudyPlan> {
    let Some(mut plan) = plan else {
        return Err(PlanError::PlanNotFound);
    };

    // Idempotency guard: at most one recalculation per calendar day.
    if plan.last_recalc_date == today {
        info!("recalculation skipped: already ran on {today}");
        return Ok(plan);
    }

    // A curriculum emptied of lessons (mid-ingestion) cannot be
    // rescheduled; signal not-ready rather than emitting an empty plan.
    if curriculum.lesson_count() == 0 {
        return Err(PlanError::NotReady {
            id: curriculum.id.clone(),
        });
    }

    let lessons = sequencer::linearize(curriculum)?;
    let completed_count = lessons
        .iter()
        .filter(|l| completion.is_complete(&l.id))
        .count();

    if completed_count >= lessons.len() {
        info!("all {} lessons complete, closing plan", lessons.len());
        plan.status = PlanStatus::Complete;
        plan.actual_completion_date = Some(today);
        return Ok(plan);
    }

    if plan.deadline < today {
        return Ok(mark_overdue(plan, &lessons, completion, today));
    }

    standard_recalculation(plan, &lessons, completion, completed_count, reason, today)
}

/// Overdue handling: every remaining lesson is piled into one synthetic
/// allocation for today, unbounded and unconditionally heavy. The stored
/// daily allocations are left exactly as they were.
fn mark_overdue(
    mut plan: StudyPlan,
    lessons: &[OrderedLesson],
    completion: &CompletionSnapshot,
    today: Date,
) -> StudyPlan {
    let remaining: Vec<&OrderedLesson> = lessons
        .iter()
        .filter(|l| !completion.is_complete(&l.id))
        .collect();

    info!(
        "plan overdue: {} lessons remaining past deadline {}",
        remaining.len(),
        plan.deadline
    );

    plan.today_allocation = Some(DailyAllocation {
        date: today,
        day_type: DayType::Weekday,
        capacity_mins: plan.weekday_capacity_mins,
        lesson_ids: remaining.iter().map(|l| l.id.clone()).collect(),
        total_alloc_mins: remaining.iter().map(|l| l.duration_mins()).sum(),
        is_heavy_day: true,
    });
    plan.status = PlanStatus::Overdue;
    plan.is_overdue = true;
    plan.last_recalc_at = Timestamp::now();
    plan.last_recalc_date = today;
    plan.recalc_reason = "overdue".to_string();
    plan
}

fn standard_recalculation(
    prev: StudyPlan,
    lessons: &[OrderedLesson],
    completion: &CompletionSnapshot,
    completed_count: usize,
    reason: &str,
    today: Date,
) -> Result<StudyPlan> {
    // Drift: lessons actually completed vs. lessons that were planned to
    // be complete before today under the previous plan.
    let planned_through_today: usize = prev
        .daily_allocations
        .iter()
        .filter(|a| a.date < today)
        .map(|a| a.lesson_ids.len())
        .sum();

    let diff = completed_count as i64 - planned_through_today as i64;
    let (schedule_status, schedule_message) = drift(diff);

    let incomplete: Vec<OrderedLesson> = lessons
        .iter()
        .filter(|l| !completion.is_complete(&l.id))
        .cloned()
        .collect();

    let params = PlanParams {
        deadline: prev.deadline,
        weekday_capacity_mins: prev.weekday_capacity_mins,
        weekend_capacity_mins: prev.weekend_capacity_mins,
        rest_days: Vec::new(),
        reason: reason.to_string(),
    };

    let mut plan = build_plan(&incomplete, &params, today)?;

    // Plan identity persists across recalculations.
    plan.generated_at = prev.generated_at;
    plan.schedule_status = schedule_status;
    plan.schedule_message = schedule_message;

    let entry = RecalcLogEntry {
        at: plan.last_recalc_at,
        reason: reason.to_string(),
        lessons_completed: completed_count as u32,
        prev_end_date: prev.projected_end_date(),
        new_end_date: plan.projected_end_date(),
        delta_days: match (prev.projected_end_date(), plan.projected_end_date()) {
            (Some(prev_end), Some(new_end)) => {
                Some(i64::from((new_end - prev_end).get_days()))
            }
            _ => None,
        },
    };

    let mut log = prev.recalc_log;
    log.push(entry);
    if log.len() > MAX_RECALC_LOG_ENTRIES {
        let excess = log.len() - MAX_RECALC_LOG_ENTRIES;
        log.drain(..excess);
    }
    plan.recalc_log = log;

    Ok(plan)
}

fn drift(diff: i64) -> (ScheduleStatus, Option<String>) {
    if diff > 0 {
        let message = format!(
            "You're {} {} ahead of schedule, keep it up!",
            diff,
            pluralize(diff as u64, "lesson", "lessons")
        );
        (ScheduleStatus::Ahead, Some(message))
    } else if diff < 0 {
        let behind = diff.unsigned_abs();
        let message = format!(
            "You're {} {} behind, here's your catch-up plan",
            behind,
            pluralize(behind, "lesson", "lessons")
        );
        (ScheduleStatus::Behind, Some(message))
    } else {
        (ScheduleStatus::OnTrack, None)
    }
}
