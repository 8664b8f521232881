//! Study plan aggregate root and its lifecycle enumerations.

use std::str::FromStr;

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{DailyAllocation, MonthlyMilestone, Phase, WeeklyTarget};

/// Type-safe enumeration of plan lifecycle statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// Plan is live and being followed
    #[default]
    Active,

    /// All lessons are marked done
    Complete,

    /// Deadline passed without completion
    Overdue,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(PlanStatus::Active),
            "complete" => Ok(PlanStatus::Complete),
            "overdue" => Ok(PlanStatus::Overdue),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Active => "active",
            PlanStatus::Complete => "complete",
            PlanStatus::Overdue => "overdue",
        }
    }
}

/// Schedule drift: actual vs. planned completion as of "today".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    /// More lessons completed than planned by today
    Ahead,

    /// Completion matches the plan
    #[default]
    OnTrack,

    /// Fewer lessons completed than planned by today
    Behind,
}

impl FromStr for ScheduleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ahead" => Ok(ScheduleStatus::Ahead),
            "on_track" | "ontrack" => Ok(ScheduleStatus::OnTrack),
            "behind" => Ok(ScheduleStatus::Behind),
            _ => Err(format!("Invalid schedule status: {s}")),
        }
    }
}

impl ScheduleStatus {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Ahead => "ahead",
            ScheduleStatus::OnTrack => "on_track",
            ScheduleStatus::Behind => "behind",
        }
    }
}

/// One audit entry per standard recalculation, capped at the 20 most
/// recent entries on the plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecalcLogEntry {
    /// When the recalculation ran (UTC)
    pub at: Timestamp,

    /// Triggering reason, e.g. `login`, `manual`, `content-added`
    pub reason: String,

    /// Completed-lesson count at that moment
    pub lessons_completed: u32,

    /// Projected end date before the recalculation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_end_date: Option<Date>,

    /// Projected end date after the recalculation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_end_date: Option<Date>,

    /// Signed change in projected end, in days (new minus previous)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_days: Option<i64>,
}

/// The aggregate root returned by every generation or recalculation.
///
/// Created by the first successful generation for a user/curriculum pair
/// and carried forward by value on each subsequent call: `generated_at`
/// never changes after the first run, while everything else is refreshed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyPlan {
    /// Timestamp of the first successful generation (UTC)
    pub generated_at: Timestamp,

    /// Timestamp of the most recent recalculation (UTC)
    pub last_recalc_at: Timestamp,

    /// Calendar date of the most recent recalculation, as seen by the
    /// caller's clock. The same-day idempotency guard compares this.
    pub last_recalc_date: Date,

    /// Reason tag for the most recent recalculation
    pub recalc_reason: String,

    /// Deadline date (exclusive end of the plan window)
    pub deadline: Date,

    /// Weekday capacity in minutes
    pub weekday_capacity_mins: u32,

    /// Weekend capacity in minutes
    pub weekend_capacity_mins: u32,

    /// Whether every lesson could be placed before the deadline
    pub is_feasible: bool,

    /// Shortfall in whole days when infeasible (0 when feasible)
    pub infeasible_by_days: u32,

    /// Number of trailing buffer days reserved by the buffer policy
    pub buffer_day_count: u32,

    /// Remediation hint: buffer days that could be dropped to fit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_buffer_to_fit_days: Option<u32>,

    /// Remediation hint: days the deadline could be pushed to fit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_deadline_days: Option<u32>,

    /// Whether the deadline is close enough to warrant a warning
    pub tight_deadline_warning: bool,

    /// Message describing the tight-deadline condition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tight_deadline_message: Option<String>,

    /// Ordered per-section phases
    pub phases: Vec<Phase>,

    /// Per-calendar-month milestones
    pub monthly_milestones: Vec<MonthlyMilestone>,

    /// Per-ISO-week targets
    pub weekly_targets: Vec<WeeklyTarget>,

    /// One allocation record per day in the plan window
    pub daily_allocations: Vec<DailyAllocation>,

    /// Lifecycle status
    #[serde(default)]
    pub status: PlanStatus,

    /// Schedule drift as of the last recalculation
    #[serde(default)]
    pub schedule_status: ScheduleStatus,

    /// Human-readable drift message (ahead/behind counts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_message: Option<String>,

    /// Whether the deadline has passed without completion
    pub is_overdue: bool,

    /// Synthetic catch-up allocation while overdue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today_allocation: Option<DailyAllocation>,

    /// Date all lessons were found complete, once finished
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_completion_date: Option<Date>,

    /// Message quoting the new projected completion after content changes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_end_date_message: Option<String>,

    /// Bounded audit log of past recalculations (newest last)
    #[serde(default)]
    pub recalc_log: Vec<RecalcLogEntry>,
}

impl StudyPlan {
    /// Projected end date: the end of the final phase, if any.
    pub fn projected_end_date(&self) -> Option<Date> {
        self.phases.last().map(|p| p.end_date)
    }
}
