//! Shared builders for the plan integration tests.

use cadence_core::models::{Curriculum, Lesson, Section};
use cadence_core::params::PlanParams;
use jiff::civil::Date;

/// Builds a curriculum from `(section_title, &[lesson_minutes])` pairs.
/// Lesson ids are `s{section}-l{lesson}` by position.
pub fn curriculum(sections: &[(&str, &[u32])]) -> Curriculum {
    Curriculum {
        id: "course-1".to_string(),
        title: "Integration Test Course".to_string(),
        sections: sections
            .iter()
            .enumerate()
            .map(|(si, (title, lesson_mins))| Section {
                id: format!("sec-{si}"),
                title: title.to_string(),
                order: si as u32,
                lessons: lesson_mins
                    .iter()
                    .enumerate()
                    .map(|(li, mins)| Lesson {
                        id: format!("s{si}-l{li}"),
                        title: format!("{title} lesson {li}"),
                        duration_secs: mins * 60,
                        order: li as u32,
                    })
                    .collect(),
            })
            .collect(),
    }
}

pub fn params(deadline: Date, weekday_mins: u32, weekend_mins: u32) -> PlanParams {
    PlanParams {
        deadline,
        weekday_capacity_mins: weekday_mins,
        weekend_capacity_mins: weekend_mins,
        rest_days: vec![],
        reason: "manual".to_string(),
    }
}

/// Every lesson id in the curriculum, in sequence order.
pub fn all_lesson_ids(curriculum: &Curriculum) -> Vec<String> {
    curriculum
        .sections
        .iter()
        .flat_map(|s| s.lessons.iter().map(|l| l.id.clone()))
        .collect()
}
