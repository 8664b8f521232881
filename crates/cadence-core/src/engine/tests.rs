//! Tests for the engine module.

use jiff::civil::{date, Date};

use super::controller;
use crate::error::PlanError;
use crate::models::{
    CompletionSnapshot, Curriculum, Lesson, PlanStatus, ScheduleStatus, Section,
};
use crate::params::PlanParams;

/// One section with the given lesson durations (minutes).
fn single_section_curriculum(lesson_mins: &[u32]) -> Curriculum {
    Curriculum {
        id: "course-1".to_string(),
        title: "Test Course".to_string(),
        sections: vec![Section {
            id: "sec-1".to_string(),
            title: "Only Section".to_string(),
            order: 1,
            lessons: lesson_mins
                .iter()
                .enumerate()
                .map(|(i, mins)| Lesson {
                    id: format!("l{i}"),
                    title: format!("Lesson {i}"),
                    duration_secs: mins * 60,
                    order: i as u32,
                })
                .collect(),
        }],
    }
}

fn params(deadline: Date) -> PlanParams {
    PlanParams {
        deadline,
        weekday_capacity_mins: 60,
        weekend_capacity_mins: 60,
        rest_days: vec![],
        reason: "manual".to_string(),
    }
}

// 2026-09-07 is a Monday.
const MONDAY: Date = date(2026, 9, 7);

#[test]
fn test_generate_rejects_empty_curriculum_as_not_ready() {
    let curriculum = Curriculum {
        id: "empty".to_string(),
        title: "Empty".to_string(),
        sections: vec![],
    };

    let err = controller::generate(&curriculum, &params(date(2026, 12, 1)), MONDAY).unwrap_err();
    assert!(matches!(err, PlanError::NotReady { .. }));
}

#[test]
fn test_generate_stamps_parameters_and_window() {
    let curriculum = single_section_curriculum(&[10, 50]);
    let deadline = date(2026, 9, 12);

    let plan = controller::generate(&curriculum, &params(deadline), MONDAY).unwrap();

    assert_eq!(plan.deadline, deadline);
    assert_eq!(plan.weekday_capacity_mins, 60);
    assert_eq!(plan.buffer_day_count, 1); // 5 days out
    assert_eq!(plan.daily_allocations.len(), 5);
    assert_eq!(plan.last_recalc_date, MONDAY);
    assert_eq!(plan.status, PlanStatus::Active);
    assert_eq!(plan.schedule_status, ScheduleStatus::OnTrack);
    assert!(plan.recalc_log.is_empty());
}

#[test]
fn test_tight_deadline_warning_under_ten_days() {
    let curriculum = single_section_curriculum(&[10]);

    let tight = controller::generate(&curriculum, &params(date(2026, 9, 12)), MONDAY).unwrap();
    assert!(tight.tight_deadline_warning);
    let message = tight.tight_deadline_message.as_deref().unwrap();
    assert!(message.contains("1 revision day"));

    let very_tight = controller::generate(&curriculum, &params(date(2026, 9, 9)), MONDAY).unwrap();
    assert!(very_tight.tight_deadline_warning);
    assert!(very_tight
        .tight_deadline_message
        .as_deref()
        .unwrap()
        .contains("no revision days"));

    let relaxed = controller::generate(&curriculum, &params(date(2026, 12, 1)), MONDAY).unwrap();
    assert!(!relaxed.tight_deadline_warning);
    assert!(relaxed.tight_deadline_message.is_none());
}

#[test]
fn test_recalculate_without_plan_is_not_found() {
    let curriculum = single_section_curriculum(&[10]);
    let completion = CompletionSnapshot::new();

    let err = controller::recalculate(None, &curriculum, &completion, "login", MONDAY).unwrap_err();
    assert!(matches!(err, PlanError::PlanNotFound));
}

#[test]
fn test_recalculate_rejects_empty_curriculum_as_not_ready() {
    // A plan exists, but the curriculum has been emptied (re-ingestion in
    // progress): signal not-ready instead of producing an empty plan.
    let curriculum = single_section_curriculum(&[10]);
    let plan = controller::generate(&curriculum, &params(date(2026, 12, 1)), MONDAY).unwrap();

    let emptied = Curriculum {
        id: "course-1".to_string(),
        title: "Test Course".to_string(),
        sections: vec![],
    };
    let completion = CompletionSnapshot::new();

    let err = controller::recalculate(Some(plan), &emptied, &completion, "login", date(2026, 9, 8))
        .unwrap_err();
    assert!(matches!(err, PlanError::NotReady { .. }));
}

#[test]
fn test_recalculate_same_day_is_a_no_op() {
    let curriculum = single_section_curriculum(&[10, 50]);
    let completion = CompletionSnapshot::new();

    let plan = controller::generate(&curriculum, &params(date(2026, 12, 1)), MONDAY).unwrap();
    let before = plan.clone();

    let after =
        controller::recalculate(Some(plan), &curriculum, &completion, "login", MONDAY).unwrap();

    assert_eq!(after.last_recalc_at, before.last_recalc_at);
    assert_eq!(after.recalc_log.len(), before.recalc_log.len());
    assert_eq!(after, before);
}

#[test]
fn test_recalculate_all_complete_closes_plan() {
    let curriculum = single_section_curriculum(&[10, 50]);
    let completion: CompletionSnapshot = ["l0", "l1"].into_iter().collect();

    let plan = controller::generate(&curriculum, &params(date(2026, 12, 1)), MONDAY).unwrap();
    let next_day = date(2026, 9, 8);
    let closed =
        controller::recalculate(Some(plan), &curriculum, &completion, "login", next_day).unwrap();

    assert_eq!(closed.status, PlanStatus::Complete);
    assert_eq!(closed.actual_completion_date, Some(next_day));
}

#[test]
fn test_recalculate_reports_drift_ahead_and_behind() {
    // Six 60-minute lessons, one per 60-minute day.
    let curriculum = single_section_curriculum(&[60, 60, 60, 60, 60, 60]);
    let plan = controller::generate(&curriculum, &params(date(2026, 9, 21)), MONDAY).unwrap();

    // Two days later the plan expected 2 lessons done.
    let two_days_in = date(2026, 9, 9);

    let ahead_completion: CompletionSnapshot = ["l0", "l1", "l2"].into_iter().collect();
    let ahead = controller::recalculate(
        Some(plan.clone()),
        &curriculum,
        &ahead_completion,
        "login",
        two_days_in,
    )
    .unwrap();
    assert_eq!(ahead.schedule_status, ScheduleStatus::Ahead);
    assert!(ahead
        .schedule_message
        .as_deref()
        .unwrap()
        .contains("1 lesson ahead"));

    let behind_completion = CompletionSnapshot::new();
    let behind = controller::recalculate(
        Some(plan.clone()),
        &curriculum,
        &behind_completion,
        "login",
        two_days_in,
    )
    .unwrap();
    assert_eq!(behind.schedule_status, ScheduleStatus::Behind);
    assert!(behind
        .schedule_message
        .as_deref()
        .unwrap()
        .contains("2 lessons behind"));

    let on_track_completion: CompletionSnapshot = ["l0", "l1"].into_iter().collect();
    let on_track = controller::recalculate(
        Some(plan),
        &curriculum,
        &on_track_completion,
        "login",
        two_days_in,
    )
    .unwrap();
    assert_eq!(on_track.schedule_status, ScheduleStatus::OnTrack);
    assert!(on_track.schedule_message.is_none());
}

#[test]
fn test_recalculate_reschedules_only_incomplete_lessons() {
    let curriculum = single_section_curriculum(&[60, 60, 60, 60]);
    let plan = controller::generate(&curriculum, &params(date(2026, 9, 21)), MONDAY).unwrap();
    let completion: CompletionSnapshot = ["l0", "l1"].into_iter().collect();

    let next = controller::recalculate(
        Some(plan.clone()),
        &curriculum,
        &completion,
        "login",
        date(2026, 9, 9),
    )
    .unwrap();

    let scheduled: Vec<&str> = next
        .daily_allocations
        .iter()
        .flat_map(|a| a.lesson_ids.iter().map(String::as_str))
        .collect();
    assert_eq!(scheduled, vec!["l2", "l3"]);
    // Window restarts at today.
    assert_eq!(next.daily_allocations[0].date, date(2026, 9, 9));
    // Identity persists.
    assert_eq!(next.generated_at, plan.generated_at);
    assert_eq!(next.recalc_log.len(), 1);
    assert_eq!(next.recalc_log[0].lessons_completed, 2);
}

#[test]
fn test_recalc_log_entry_records_end_date_delta() {
    let curriculum = single_section_curriculum(&[60, 60, 60, 60]);
    let plan = controller::generate(&curriculum, &params(date(2026, 9, 21)), MONDAY).unwrap();
    let prev_end = plan.projected_end_date().unwrap();

    // Nothing completed: the remaining four lessons start over from
    // Wednesday, pushing the projected end later.
    let completion = CompletionSnapshot::new();
    let next = controller::recalculate(
        Some(plan),
        &curriculum,
        &completion,
        "login",
        date(2026, 9, 9),
    )
    .unwrap();

    let entry = &next.recalc_log[0];
    assert_eq!(entry.prev_end_date, Some(prev_end));
    assert_eq!(entry.new_end_date, next.projected_end_date());
    let delta = entry.delta_days.unwrap();
    assert_eq!(
        delta,
        i64::from((next.projected_end_date().unwrap() - prev_end).get_days())
    );
    assert!(delta > 0);
}

#[test]
fn test_content_added_reason_sets_new_end_date_message() {
    let curriculum = single_section_curriculum(&[60, 60]);
    let plan = controller::generate(&curriculum, &params(date(2026, 12, 1)), MONDAY).unwrap();
    let completion = CompletionSnapshot::new();

    let next = controller::recalculate(
        Some(plan),
        &curriculum,
        &completion,
        "content-added",
        date(2026, 9, 8),
    )
    .unwrap();

    let message = next.new_end_date_message.as_deref().unwrap();
    assert!(message.contains("New estimated completion"));
}

#[test]
fn test_overdue_recalculation_piles_remaining_into_today() {
    let curriculum = single_section_curriculum(&[60; 10]);
    let plan = controller::generate(&curriculum, &params(date(2026, 9, 21)), MONDAY).unwrap();
    let stored_allocations = plan.daily_allocations.clone();

    let completion: CompletionSnapshot = ["l0", "l1", "l2"].into_iter().collect();
    let past_deadline = date(2026, 10, 1);

    let overdue = controller::recalculate(
        Some(plan),
        &curriculum,
        &completion,
        "login",
        past_deadline,
    )
    .unwrap();

    assert!(overdue.is_overdue);
    assert_eq!(overdue.status, PlanStatus::Overdue);
    assert_eq!(overdue.recalc_reason, "overdue");

    let catch_up = overdue.today_allocation.as_ref().unwrap();
    assert_eq!(catch_up.date, past_deadline);
    assert_eq!(catch_up.lesson_ids.len(), 7);
    assert!(catch_up.is_heavy_day);
    assert_eq!(catch_up.total_alloc_mins, 7 * 60);

    // Historical allocations are untouched.
    assert_eq!(overdue.daily_allocations, stored_allocations);
}

#[test]
fn test_overdue_is_strict_deadline_comparison() {
    // Deadline equal to today is not yet overdue.
    let curriculum = single_section_curriculum(&[60]);
    let plan = controller::generate(&curriculum, &params(date(2026, 9, 10)), MONDAY).unwrap();
    let completion = CompletionSnapshot::new();

    let next = controller::recalculate(
        Some(plan),
        &curriculum,
        &completion,
        "login",
        date(2026, 9, 10),
    )
    .unwrap();
    assert!(!next.is_overdue);
}

#[test]
fn test_recalc_log_capped_at_twenty_entries() {
    let curriculum = single_section_curriculum(&[60; 30]);
    let mut plan =
        controller::generate(&curriculum, &params(date(2027, 6, 1)), MONDAY).unwrap();
    let completion = CompletionSnapshot::new();

    for offset in 1..=25 {
        let day = MONDAY
            .checked_add(jiff::Span::new().days(offset))
            .unwrap();
        plan = controller::recalculate(Some(plan), &curriculum, &completion, "login", day)
            .unwrap();
    }

    assert_eq!(plan.recalc_log.len(), controller::MAX_RECALC_LOG_ENTRIES);
    // Oldest entries were evicted: the first surviving entry is from the
    // sixth recalculation.
    assert_eq!(plan.recalc_log.last().unwrap().reason, "login");
}
