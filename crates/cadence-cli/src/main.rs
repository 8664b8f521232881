//! Cadence CLI Application
//!
//! Command-line interface for the Cadence study-plan scheduler. State is
//! kept in plain JSON files named on the command line; each invocation
//! reads the snapshots, runs the engine, and writes the result back.

mod args;
mod cli;

use anyhow::Result;
use args::{Args, Commands};
use cadence_core::params::PlanParams;
use clap::Parser;
use cli::Cli;
use jiff::{tz::TimeZone, Timestamp};
use log::info;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args { today, command } = Args::parse();
    let today = match today {
        Some(date) => date,
        None => Timestamp::now().to_zoned(TimeZone::system()).date(),
    };

    info!("Cadence started, today is {today}");

    let cli = Cli::new(today);
    match command {
        Generate {
            curriculum,
            deadline,
            weekday_mins,
            weekend_mins,
            rest_days,
            out,
        } => {
            let params = PlanParams {
                deadline,
                weekday_capacity_mins: weekday_mins,
                weekend_capacity_mins: weekend_mins,
                rest_days,
                reason: "manual".to_string(),
            };
            cli.generate(&curriculum, &params, &out)
        }
        Recalc {
            plan,
            curriculum,
            completion,
            reason,
            out,
        } => cli.recalc(
            &plan,
            &curriculum,
            completion.as_deref(),
            &reason,
            out.as_deref(),
        ),
        Today {
            plan,
            curriculum,
            completion,
        } => cli.today(&plan, &curriculum, completion.as_deref()),
        Week { plan, completion } => cli.week(&plan, completion.as_deref()),
    }
}
