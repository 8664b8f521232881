//! The scheduling engine: deterministic plan generation and
//! recalculation.
//!
//! # Architecture Overview
//!
//! The engine is a pipeline of pure functions orchestrated by the
//! recalculation controller:
//!
//! ```text
//! ┌────────────┐   ┌─────────┐   ┌──────────┐   ┌───────────┐   ┌───────────┐
//! │ Sequencer  │──▶│ Buffer  │──▶│ Calendar │──▶│ Allocator │──▶│ Aggregator│
//! │ (ordering) │   │ (policy)│   │ (days)   │   │ (greedy)  │   │ (rollups) │
//! └────────────┘   └─────────┘   └──────────┘   └───────────┘   └───────────┘
//!        ▲                                                            │
//!        └──────────────── controller (generate / recalculate) ◀──────┘
//! ```
//!
//! ## Submodules
//!
//! - [`sequencer`]: linearizes sections/lessons into one ordered sequence
//! - [`buffer`]: days-until-deadline to trailing buffer-day count
//! - [`calendar`]: enumerates and classifies the days of the plan window
//! - [`allocator`]: greedy forward-fill of lessons onto days
//! - [`aggregate`]: phases, monthly milestones, weekly targets,
//!   feasibility
//! - [`controller`]: the stateful entry points and recalculation state
//!   machine
//! - [`views`]: read-model projections (today view, weekly view)
//!
//! ## Design Principles
//!
//! 1. **Value passing**: the previous plan goes in, the new plan comes
//!    out; no storage anywhere in the engine
//! 2. **Explicit clock**: every decision depends on a caller-supplied
//!    `today`, keeping behavior deterministic under test
//! 3. **Infeasibility is data**: an unschedulable curriculum still yields
//!    a complete plan with hints, never an error

pub mod aggregate;
pub mod allocator;
pub mod buffer;
pub mod calendar;
pub mod controller;
pub mod sequencer;
pub mod views;

#[cfg(test)]
mod tests;

pub use controller::{generate, recalculate, MAX_RECALC_LOG_ENTRIES};
pub use views::{today_view, weekly_view, TodayLesson, TodayView, WeekView};
