use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::civil::Date;

/// Main command-line interface for the Cadence study-plan scheduler
///
/// Cadence turns a curriculum snapshot, a deadline, and per-day-type time
/// budgets into a day-by-day study plan with phases, monthly milestones,
/// and weekly targets, and keeps that plan current as lessons are
/// completed. All state lives in plain JSON files supplied and kept by
/// you; the scheduler itself stores nothing.
#[derive(Parser)]
#[command(version, about, name = "cadence")]
pub struct Args {
    /// Override today's date (defaults to the system clock). Useful for
    /// reproducible runs and scripting.
    #[arg(long, global = true)]
    pub today: Option<Date>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Cadence CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a study plan for a curriculum
    #[command(alias = "gen")]
    Generate {
        /// Path to the curriculum snapshot (JSON)
        #[arg(long)]
        curriculum: PathBuf,

        /// Deadline date, e.g. 2026-12-01
        #[arg(long)]
        deadline: Date,

        /// Capacity in minutes for weekdays
        #[arg(long, default_value_t = 60)]
        weekday_mins: u32,

        /// Capacity in minutes for weekend days
        #[arg(long, default_value_t = 90)]
        weekend_mins: u32,

        /// Explicit rest date (repeatable)
        #[arg(long = "rest-day")]
        rest_days: Vec<Date>,

        /// Where to write the plan JSON
        #[arg(long)]
        out: PathBuf,
    },
    /// Bring an existing plan up to date
    Recalc {
        /// Path to the stored plan (JSON)
        #[arg(long)]
        plan: PathBuf,

        /// Path to the curriculum snapshot (JSON)
        #[arg(long)]
        curriculum: PathBuf,

        /// Path to the completion snapshot (JSON array of lesson ids)
        #[arg(long)]
        completion: Option<PathBuf>,

        /// Trigger reason recorded in the plan and its audit log
        #[arg(long, default_value = "manual")]
        reason: String,

        /// Where to write the updated plan (defaults to --plan)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Show today's scheduled lessons
    Today {
        /// Path to the stored plan (JSON)
        #[arg(long)]
        plan: PathBuf,

        /// Path to the curriculum snapshot (JSON)
        #[arg(long)]
        curriculum: PathBuf,

        /// Path to the completion snapshot (JSON array of lesson ids)
        #[arg(long)]
        completion: Option<PathBuf>,
    },
    /// Show the upcoming weekly targets
    Week {
        /// Path to the stored plan (JSON)
        #[arg(long)]
        plan: PathBuf,

        /// Path to the completion snapshot (JSON array of lesson ids)
        #[arg(long)]
        completion: Option<PathBuf>,
    },
}
