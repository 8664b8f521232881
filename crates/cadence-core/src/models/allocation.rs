//! Daily allocation model and day classification.

use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Type-safe classification of a calendar day within the plan window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    /// Regular weekday, capacity from the weekday budget
    Weekday,

    /// Saturday or Sunday, capacity from the weekend budget
    Weekend,

    /// Explicit rest day, zero capacity
    Rest,

    /// Trailing revision day reserved by the buffer policy, zero capacity
    Buffer,
}

impl DayType {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Weekday => "weekday",
            DayType::Weekend => "weekend",
            DayType::Rest => "rest",
            DayType::Buffer => "buffer",
        }
    }

    /// Whether lessons may be scheduled on this day type at all.
    pub fn is_study_day(&self) -> bool {
        matches!(self, DayType::Weekday | DayType::Weekend)
    }

    /// Resolve the capacity for this day type from the per-type budgets.
    /// Rest and buffer days are always zero.
    pub fn capacity_mins(&self, weekday_mins: u32, weekend_mins: u32) -> u32 {
        match self {
            DayType::Weekday => weekday_mins,
            DayType::Weekend => weekend_mins,
            DayType::Rest | DayType::Buffer => 0,
        }
    }
}

impl FromStr for DayType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekday" => Ok(DayType::Weekday),
            "weekend" => Ok(DayType::Weekend),
            "rest" => Ok(DayType::Rest),
            "buffer" => Ok(DayType::Buffer),
            _ => Err(format!("Invalid day type: {s}")),
        }
    }
}

/// One calendar day's worth of scheduled work.
///
/// Invariant: rest and buffer days carry zero capacity and an empty lesson
/// list. Across a plan, concatenating `lesson_ids` in date order
/// reproduces the input lesson sequence order with no duplication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyAllocation {
    /// Calendar date of this allocation
    pub date: Date,

    /// Classification of the day
    pub day_type: DayType,

    /// Capacity in minutes resolved for this date
    pub capacity_mins: u32,

    /// Ordered identifiers of the lessons assigned to this day
    #[serde(default)]
    pub lesson_ids: Vec<String>,

    /// Total allocated minutes for this day
    pub total_alloc_mins: u32,

    /// Whether allocated minutes exceed capacity by more than 10%
    pub is_heavy_day: bool,
}

impl DailyAllocation {
    /// An allocation with no lessons assigned.
    pub fn empty(date: Date, day_type: DayType, capacity_mins: u32) -> Self {
        Self {
            date,
            day_type,
            capacity_mins,
            lesson_ids: Vec::new(),
            total_alloc_mins: 0,
            is_heavy_day: false,
        }
    }
}
