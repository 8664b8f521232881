//! Greedy forward-fill allocator.
//!
//! The algorithm is "forward-fill, always-one-per-day": a single forward
//! pointer into the lesson sequence, one pass over the days, no
//! backtracking and no lookahead. A closed day is never reopened, so one
//! very long lesson can starve an otherwise light day and push everything
//! after it later. That is the contract, not a defect; a more balanced
//! bin-packer would change observable scheduling behavior.

use log::debug;

use super::calendar::StudyDay;
use crate::models::{DailyAllocation, OrderedLesson};

/// Heavy-day tolerance: a day is heavy when allocated minutes exceed
/// capacity by more than this percentage.
pub const HEAVY_DAY_TOLERANCE_PCT: u64 = 10;

/// Whether a day's load exceeds its capacity by more than the tolerance.
/// Integer comparison, so 110% exactly is not heavy.
pub fn is_heavy(total_alloc_mins: u32, capacity_mins: u32) -> bool {
    u64::from(total_alloc_mins) * 100 > u64::from(capacity_mins) * (100 + HEAVY_DAY_TOLERANCE_PCT)
}

/// Assigns the ordered lesson sequence onto the enumerated days,
/// producing one allocation record per day.
///
/// Each capacity-positive day takes at least one lesson if any remain,
/// even when that lesson alone exceeds the day's capacity, then keeps
/// taking lessons while the running total stays within capacity. Rest and
/// buffer days always come out empty.
pub fn allocate(
    lessons: &[OrderedLesson],
    days: &[StudyDay],
    weekday_capacity_mins: u32,
    weekend_capacity_mins: u32,
) -> Vec<DailyAllocation> {
    let mut allocations = Vec::with_capacity(days.len());
    let mut next = 0usize;

    for day in days {
        let capacity_mins = day
            .day_type
            .capacity_mins(weekday_capacity_mins, weekend_capacity_mins);

        let mut alloc = DailyAllocation::empty(day.date, day.day_type, capacity_mins);

        if capacity_mins > 0 && next < lessons.len() {
            let mut used_mins = 0u32;

            while next < lessons.len() {
                let lesson_mins = lessons[next].duration_mins();

                // First lesson of the day is unconditional; after that a
                // lesson only fits if it keeps the total within capacity.
                if used_mins > 0 && used_mins + lesson_mins > capacity_mins {
                    break;
                }

                alloc.lesson_ids.push(lessons[next].id.clone());
                used_mins += lesson_mins;
                next += 1;
            }

            alloc.total_alloc_mins = used_mins;
            alloc.is_heavy_day = is_heavy(used_mins, capacity_mins);

            debug!(
                "allocated {} lessons ({} min / {} min cap) on {}",
                alloc.lesson_ids.len(),
                used_mins,
                capacity_mins,
                day.date
            );
        }

        allocations.push(alloc);
    }

    allocations
}
