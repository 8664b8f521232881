//! Lecture sequencer: linearizes a curriculum into one ordered sequence.

use std::collections::HashSet;

use crate::error::{PlanError, Result};
use crate::models::{Curriculum, OrderedLesson};

/// Flattens the curriculum into a single ordered lesson sequence: sections
/// sorted by their declared order, lessons sorted by theirs within each
/// section, concatenated.
///
/// A defensive check rejects any sequence in which a section resumes
/// after a different section has started. With well-formed order fields
/// this is unreachable, but duplicate or missing order values upstream
/// could produce it, and silently scheduling an interleaved sequence
/// would corrupt every downstream rollup.
pub fn linearize(curriculum: &Curriculum) -> Result<Vec<OrderedLesson>> {
    let mut sections: Vec<_> = curriculum.sections.iter().collect();
    sections.sort_by_key(|s| s.order);

    let mut lessons = Vec::with_capacity(curriculum.lesson_count());
    for (section_index, section) in sections.iter().enumerate() {
        let mut section_lessons: Vec<_> = section.lessons.iter().collect();
        section_lessons.sort_by_key(|l| l.order);

        for lesson in section_lessons {
            lessons.push(OrderedLesson {
                id: lesson.id.clone(),
                title: lesson.title.clone(),
                duration_secs: lesson.duration_secs,
                section_index,
                section_id: section.id.clone(),
                section_title: section.title.clone(),
            });
        }
    }

    verify_no_interleaving(&lessons)?;

    Ok(lessons)
}

fn verify_no_interleaving(lessons: &[OrderedLesson]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut current: Option<&str> = None;
    let mut last_index = 0usize;

    for lesson in lessons {
        if lesson.section_index < last_index {
            return Err(PlanError::structural(
                "cross-section interleaving detected in lesson sequence",
            ));
        }
        last_index = lesson.section_index;

        if current != Some(lesson.section_id.as_str()) {
            if seen.contains(lesson.section_id.as_str()) {
                return Err(PlanError::structural(format!(
                    "section {} resumes after another section started",
                    lesson.section_id
                )));
            }
            seen.insert(lesson.section_id.as_str());
            current = Some(lesson.section_id.as_str());
        }
    }

    Ok(())
}
