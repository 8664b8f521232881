//! Core library for the Cadence study-plan scheduler.
//!
//! This crate turns an ordered curriculum, a deadline, per-day-type time
//! budgets, and a user's completion state into a day-by-day study plan:
//! daily lesson allocations, per-section phases, monthly milestones,
//! weekly targets, a feasibility verdict, and a recalculation protocol
//! that keeps the plan current as time passes and lessons get done.
//!
//! The engine is pure computation over plain values. It reads two
//! snapshots (curriculum and completion), takes the previous plan by
//! value, and returns a new plan for the caller to persist; there is no
//! storage, no network, and no clock inside beyond the `today` date the
//! caller supplies.
//!
//! # Quick Start
//!
//! ```rust
//! use cadence_core::models::{CompletionSnapshot, Curriculum, Lesson, Section};
//! use cadence_core::params::PlanParams;
//! use jiff::civil::date;
//!
//! # fn example() -> cadence_core::Result<()> {
//! let curriculum = Curriculum {
//!     id: "rust-101".to_string(),
//!     title: "Rust from Scratch".to_string(),
//!     sections: vec![Section {
//!         id: "s1".to_string(),
//!         title: "Basics".to_string(),
//!         order: 1,
//!         lessons: vec![Lesson {
//!             id: "l1".to_string(),
//!             title: "Hello, world".to_string(),
//!             duration_secs: 900,
//!             order: 1,
//!         }],
//!     }],
//! };
//!
//! let params = PlanParams {
//!     deadline: date(2026, 12, 1),
//!     weekday_capacity_mins: 60,
//!     weekend_capacity_mins: 90,
//!     rest_days: vec![],
//!     reason: "manual".to_string(),
//! };
//!
//! // First run.
//! let plan = cadence_core::generate(&curriculum, &params, date(2026, 9, 7))?;
//! assert!(plan.is_feasible);
//!
//! // Later: hand the plan back in to bring it up to date.
//! let completion: CompletionSnapshot = ["l1"].into_iter().collect();
//! let plan = cadence_core::recalculate(
//!     Some(plan),
//!     &curriculum,
//!     &completion,
//!     "login",
//!     date(2026, 9, 8),
//! )?;
//! println!("{plan}");
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use display::{LocalDateTime, TodaySchedule, UpcomingWeeks};
pub use engine::{
    generate, recalculate, today_view, weekly_view, TodayLesson, TodayView, WeekView,
    MAX_RECALC_LOG_ENTRIES,
};
pub use error::{PlanError, Result};
pub use models::{
    CompletionSnapshot, Curriculum, DailyAllocation, DayType, Lesson, MonthlyMilestone,
    OrderedLesson, Phase, PlanStatus, RecalcLogEntry, ScheduleStatus, Section, StudyPlan,
    WeeklyTarget,
};
pub use params::PlanParams;
