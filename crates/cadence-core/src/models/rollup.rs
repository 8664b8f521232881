//! Derived rollups: phases, monthly milestones, and weekly targets.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// The contiguous scheduled span covering one section's lessons.
///
/// One phase exists per maximal run of allocated lessons belonging to the
/// same section; consecutive phases never share a section identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Phase {
    /// Identifier of the section this phase covers
    pub section_id: String,

    /// Title of the section
    pub section_title: String,

    /// Ordinal index of the phase within the plan (0-based)
    pub phase_index: u32,

    /// First date on which a lesson from this phase is scheduled
    pub start_date: Date,

    /// Last date on which a lesson from this phase is scheduled
    pub end_date: Date,

    /// Number of lessons in the phase
    pub lesson_count: u32,

    /// Total scheduled minutes in the phase
    pub total_mins: u32,

    /// Milestone label, e.g. `Complete Linear Algebra Basics`
    pub milestone_label: String,

    /// Whether the phase's end date falls after the deadline
    pub cannot_complete_by_deadline: bool,

    /// Warning message when the phase overruns the deadline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_message: Option<String>,
}

/// One milestone per calendar month containing at least one phase end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyMilestone {
    /// Month key in `YYYY-MM` form
    pub month_key: String,

    /// Human-readable month label, e.g. `September 2026`
    pub month_label: String,

    /// Titles of sections whose phase ends in this month
    pub sections_complete: Vec<String>,

    /// Summed lesson count of those phases
    pub lesson_count: u32,

    /// Fixed experience-point target for meeting the milestone
    pub xp_target: u32,
}

/// One target per ISO week (Monday-anchored) touched by any allocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyTarget {
    /// Monday of the ISO week
    pub week_start: Date,

    /// Human-readable week label, e.g. `Week of Sep 07, 2026`
    pub week_label: String,

    /// All lesson identifiers assigned within the week
    #[serde(default)]
    pub lesson_ids: Vec<String>,

    /// Total allocated minutes for the week
    pub total_mins: u32,

    /// Total available capacity minutes for the week
    pub capacity_mins: u32,

    /// Fixed experience-point target for meeting the weekly goal
    pub xp_target: u32,

    /// Whether allocated minutes exceed available capacity
    pub over_capacity_warning: bool,

    /// Message describing the over-capacity condition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub over_capacity_message: Option<String>,
}
