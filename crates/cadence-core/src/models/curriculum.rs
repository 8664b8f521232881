//! Curriculum snapshot types supplied by the course-management collaborator.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Read-only curriculum snapshot: ordered sections of timed lessons.
///
/// Immutable for the duration of one planning run. The engine never
/// mutates it; it only linearizes and measures it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Curriculum {
    /// Unique identifier for the curriculum
    pub id: String,

    /// Title of the curriculum
    pub title: String,

    /// Sections in declared (possibly unsorted) order
    pub sections: Vec<Section>,
}

impl Curriculum {
    /// Total number of lessons across all sections.
    pub fn lesson_count(&self) -> usize {
        self.sections.iter().map(|s| s.lessons.len()).sum()
    }
}

/// An ordered group of lessons (a course module).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    /// Unique identifier for the section
    pub id: String,

    /// Title of the section
    pub title: String,

    /// Declared position of the section within the curriculum
    pub order: u32,

    /// Lessons in declared (possibly unsorted) order
    pub lessons: Vec<Lesson>,
}

/// Atomic timed unit of the curriculum (a video lecture in the source
/// domain).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lesson {
    /// Unique identifier for the lesson
    pub id: String,

    /// Title of the lesson
    pub title: String,

    /// Duration in seconds
    pub duration_secs: u32,

    /// Declared position of the lesson within its section
    pub order: u32,
}

impl Lesson {
    /// Lesson length in whole minutes, rounded up.
    pub fn duration_mins(&self) -> u32 {
        self.duration_secs.div_ceil(60)
    }
}

/// A lesson enriched with its originating section, as produced by the
/// sequencer. The `section_index` is the section's position in the sorted
/// section order, used by the interleaving guard and phase builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderedLesson {
    /// Unique identifier for the lesson
    pub id: String,

    /// Title of the lesson
    pub title: String,

    /// Duration in seconds
    pub duration_secs: u32,

    /// Index of the owning section in sorted order (0-based)
    pub section_index: usize,

    /// Identifier of the owning section
    pub section_id: String,

    /// Title of the owning section
    pub section_title: String,
}

impl OrderedLesson {
    /// Lesson length in whole minutes, rounded up.
    pub fn duration_mins(&self) -> u32 {
        self.duration_secs.div_ceil(60)
    }
}

/// Set of lesson identifiers the user has completed, supplied by the
/// progress-tracking collaborator. Serializes as a plain array of ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CompletionSnapshot {
    completed: HashSet<String>,
}

impl CompletionSnapshot {
    /// Create an empty snapshot (nothing completed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the given lesson has been completed.
    pub fn is_complete(&self, lesson_id: &str) -> bool {
        self.completed.contains(lesson_id)
    }

    /// Number of completed lessons.
    pub fn len(&self) -> usize {
        self.completed.len()
    }

    /// Whether no lessons have been completed.
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Mark a lesson as completed.
    pub fn mark_complete(&mut self, lesson_id: impl Into<String>) {
        self.completed.insert(lesson_id.into());
    }
}

impl<S: Into<String>> FromIterator<S> for CompletionSnapshot {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            completed: iter.into_iter().map(Into::into).collect(),
        }
    }
}
