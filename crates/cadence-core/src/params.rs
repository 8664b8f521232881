//! Parameter structures for scheduling operations.
//!
//! These are the plain caller-supplied inputs described by the external
//! interface: deadline, per-day-type budgets, explicit rest dates, and a
//! free-text trigger reason. They carry no framework-specific derives
//! beyond serde, so any interface layer (CLI, HTTP handler, job runner)
//! can construct them directly or wrap them with its own derives.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Caller-supplied parameters for plan generation and recalculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanParams {
    /// Deadline date; the plan window is `[start, deadline)`
    pub deadline: Date,

    /// Capacity in minutes for weekdays
    pub weekday_capacity_mins: u32,

    /// Capacity in minutes for weekend days
    pub weekend_capacity_mins: u32,

    /// Explicit zero-capacity rest dates
    #[serde(default)]
    pub rest_days: Vec<Date>,

    /// Free-text trigger reason, e.g. `manual`, `login`, `content-added`
    #[serde(default = "default_reason")]
    pub reason: String,
}

fn default_reason() -> String {
    "manual".to_string()
}

impl PlanParams {
    /// Validate parameter combinations that can never produce a useful
    /// plan. Zero capacity on one day type is fine (the allocator skips
    /// those days); zero on both would make every day a no-op.
    pub fn validate(&self) -> Result<()> {
        if self.weekday_capacity_mins == 0 && self.weekend_capacity_mins == 0 {
            return Err(PlanError::invalid_input("weekday_capacity_mins")
                .with_reason("weekday and weekend capacity cannot both be zero"));
        }
        Ok(())
    }
}
