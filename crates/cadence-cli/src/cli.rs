//! Command handlers bridging parsed arguments and the scheduling engine.
//!
//! Each handler follows the same shape: load the JSON snapshots named on
//! the command line, call into `cadence-core`, and either write the
//! resulting plan back to disk or render a read-model view to stdout.
//! All file IO lives here; the core engine never touches the filesystem.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cadence_core::models::{CompletionSnapshot, Curriculum, StudyPlan};
use cadence_core::params::PlanParams;
use cadence_core::{today_view, weekly_view, TodaySchedule, UpcomingWeeks};
use jiff::civil::Date;
use log::info;

/// Command handler carrying the resolved "today" date.
///
/// Every scheduling decision is keyed off this date, so resolving it once
/// (from `--today` or the system clock) keeps a single invocation
/// internally consistent even across a midnight boundary.
pub struct Cli {
    today: Date,
}

impl Cli {
    pub fn new(today: Date) -> Self {
        Self { today }
    }

    /// Generate a fresh plan and write it to `out`.
    pub fn generate(
        &self,
        curriculum_path: &Path,
        params: &PlanParams,
        out: &Path,
    ) -> Result<()> {
        let curriculum = load_curriculum(curriculum_path)?;

        let plan = cadence_core::generate(&curriculum, params, self.today)
            .context("Failed to generate plan")?;

        info!(
            "Generated plan for '{}': {} lessons, feasible: {}",
            curriculum.title,
            curriculum.lesson_count(),
            plan.is_feasible
        );

        save_plan(&plan, out)?;
        println!("{plan}");
        Ok(())
    }

    /// Bring a stored plan up to date and write it back.
    pub fn recalc(
        &self,
        plan_path: &Path,
        curriculum_path: &Path,
        completion_path: Option<&Path>,
        reason: &str,
        out: Option<&Path>,
    ) -> Result<()> {
        let prev = load_plan(plan_path)?;
        let curriculum = load_curriculum(curriculum_path)?;
        let completion = load_completion(completion_path)?;

        let plan = cadence_core::recalculate(Some(prev), &curriculum, &completion, reason, self.today)
            .context("Failed to recalculate plan")?;

        info!(
            "Recalculated plan (reason: {reason}), status: {}",
            plan.status
        );

        save_plan(&plan, out.unwrap_or(plan_path))?;
        println!("{plan}");
        Ok(())
    }

    /// Render today's scheduled lessons.
    pub fn today(
        &self,
        plan_path: &Path,
        curriculum_path: &Path,
        completion_path: Option<&Path>,
    ) -> Result<()> {
        let plan = load_plan(plan_path)?;
        let curriculum = load_curriculum(curriculum_path)?;
        let completion = load_completion(completion_path)?;

        match today_view(&plan, &curriculum, &completion, self.today) {
            Some(view) => print!("{}", TodaySchedule(&view)),
            None => println!("Nothing scheduled for {}.", self.today),
        }
        Ok(())
    }

    /// Render the upcoming weekly targets.
    pub fn week(&self, plan_path: &Path, completion_path: Option<&Path>) -> Result<()> {
        let plan = load_plan(plan_path)?;
        let completion = load_completion(completion_path)?;

        let weeks = weekly_view(&plan, &completion, self.today)
            .context("Failed to build weekly view")?;
        print!("{}", UpcomingWeeks(&weeks));
        Ok(())
    }
}

fn load_curriculum(path: &Path) -> Result<Curriculum> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read curriculum file {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse curriculum file {}", path.display()))
}

fn load_plan(path: &Path) -> Result<StudyPlan> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse plan file {}", path.display()))
}

/// Completion is optional on the command line; absent means nothing done.
fn load_completion(path: Option<&Path>) -> Result<CompletionSnapshot> {
    let Some(path) = path else {
        return Ok(CompletionSnapshot::new());
    };
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read completion file {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse completion file {}", path.display()))
}

fn save_plan(plan: &StudyPlan, path: &Path) -> Result<()> {
    let data = serde_json::to_string_pretty(plan).context("Failed to serialize plan")?;
    fs::write(path, data)
        .with_context(|| format!("Failed to write plan file {}", path.display()))
}
