//! Data models for the scheduling engine.
//!
//! This module contains the plain-data domain types the engine consumes
//! and produces: the read-only curriculum and completion snapshots, the
//! per-day allocation records, the derived rollups, and the [`StudyPlan`]
//! aggregate root. Display implementations live in [`crate::display`] to
//! keep data structures separate from presentation.
//!
//! Everything here derives `Serialize`/`Deserialize`; the engine itself
//! never persists anything, but the caller is expected to.

pub mod allocation;
pub mod curriculum;
pub mod plan;
pub mod rollup;


// Re-export all public types at the models level
pub use allocation::{DailyAllocation, DayType};
pub use curriculum::{CompletionSnapshot, Curriculum, Lesson, OrderedLesson, Section};
pub use plan::{PlanStatus, RecalcLogEntry, ScheduleStatus, StudyPlan};
pub use rollup::{MonthlyMilestone, Phase, WeeklyTarget};
