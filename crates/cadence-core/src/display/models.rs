//! Display implementations for domain models.
//!
//! All Display trait implementations for the plan types live here,
//! separated from the model definitions to keep data structures and
//! presentation apart. Output is markdown-formatted for terminal display.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    DailyAllocation, DayType, MonthlyMilestone, Phase, PlanStatus, ScheduleStatus, StudyPlan,
    WeeklyTarget,
};

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DailyAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lesson_ids.is_empty() {
            writeln!(f, "- {} ({})", self.date, self.day_type)
        } else {
            writeln!(
                f,
                "- {} ({}): {} lessons, {} / {} min{}",
                self.date,
                self.day_type,
                self.lesson_ids.len(),
                self.total_alloc_mins,
                self.capacity_mins,
                if self.is_heavy_day { " [heavy]" } else { "" }
            )
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### Phase {}: {} ({} - {})",
            self.phase_index + 1,
            self.section_title,
            self.start_date,
            self.end_date
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- {} lessons, {} min total",
            self.lesson_count, self.total_mins
        )?;
        writeln!(f, "- Milestone: {}", self.milestone_label)?;
        if let Some(warning) = &self.warning_message {
            writeln!(f, "- Warning: {warning}")?;
        }
        Ok(())
    }
}

impl fmt::Display for MonthlyMilestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {}: finish {} ({} lessons, {} XP)",
            self.month_label,
            self.sections_complete.join(", "),
            self.lesson_count,
            self.xp_target
        )
    }
}

impl fmt::Display for WeeklyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {}: {} lessons, {} / {} min ({} XP)",
            self.week_label,
            self.lesson_ids.len(),
            self.total_mins,
            self.capacity_mins,
            self.xp_target
        )?;
        if let Some(warning) = &self.over_capacity_message {
            writeln!(f, "  - Warning: {warning}")?;
        }
        Ok(())
    }
}

impl fmt::Display for StudyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Study Plan")?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f, "- Deadline: {}", self.deadline)?;
        writeln!(
            f,
            "- Capacity: {} min weekdays, {} min weekends",
            self.weekday_capacity_mins, self.weekend_capacity_mins
        )?;
        writeln!(f, "- Buffer days: {}", self.buffer_day_count)?;
        writeln!(f, "- Generated: {}", LocalDateTime(&self.generated_at))?;
        writeln!(
            f,
            "- Last recalculated: {} ({})",
            LocalDateTime(&self.last_recalc_at),
            self.recalc_reason
        )?;
        writeln!(f, "- Schedule: {}", self.schedule_status)?;
        if let Some(message) = &self.schedule_message {
            writeln!(f, "  - {message}")?;
        }

        if self.is_feasible {
            writeln!(f, "- Feasible: yes")?;
        } else {
            writeln!(
                f,
                "- Feasible: no, short by {} days",
                self.infeasible_by_days
            )?;
            if let Some(days) = self.remove_buffer_to_fit_days {
                writeln!(f, "  - Option: drop {days} buffer days")?;
            }
            if let Some(days) = self.push_deadline_days {
                writeln!(f, "  - Option: push the deadline by {days} days")?;
            }
        }
        if let Some(message) = &self.tight_deadline_message {
            writeln!(f, "- {message}")?;
        }
        if let Some(message) = &self.new_end_date_message {
            writeln!(f, "- {message}")?;
        }
        if let Some(date) = self.actual_completion_date {
            writeln!(f, "- Completed: {date}")?;
        }

        if !self.phases.is_empty() {
            writeln!(f, "\n## Phases")?;
            writeln!(f)?;
            for phase in &self.phases {
                write!(f, "{phase}")?;
            }
        }

        if !self.monthly_milestones.is_empty() {
            writeln!(f, "\n## Monthly Milestones")?;
            writeln!(f)?;
            for milestone in &self.monthly_milestones {
                write!(f, "{milestone}")?;
            }
        }

        if !self.weekly_targets.is_empty() {
            writeln!(f, "\n## Weekly Targets")?;
            writeln!(f)?;
            for week in &self.weekly_targets {
                write!(f, "{week}")?;
            }
        }

        Ok(())
    }
}
