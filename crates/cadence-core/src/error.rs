//! Error types for the scheduling engine.

use thiserror::Error;

/// Comprehensive error type for all scheduling operations.
///
/// Infeasibility is deliberately *not* represented here: an infeasible
/// schedule is still a fully formed [`crate::models::StudyPlan`] with
/// `is_feasible == false` and remediation hints attached. Errors are
/// reserved for missing collaborator state and malformed input.
#[derive(Error, Debug)]
pub enum PlanError {
    /// No study plan exists yet for this user/curriculum pair
    #[error("No study plan exists for this enrollment")]
    PlanNotFound,
    /// Curriculum snapshot absent for the given ID
    #[error("Curriculum with ID {id} not found")]
    CurriculumNotFound { id: String },
    /// Per-user completion state absent
    #[error("Progress state not found for this enrollment")]
    ProgressNotFound,
    /// Curriculum exists but carries no lessons yet (still ingesting)
    #[error("Curriculum with ID {id} has no lessons yet")]
    NotReady { id: String },
    /// Ordering invariant violated by upstream curriculum data
    #[error("Structural invariant violated: {message}")]
    StructuralInvariant { message: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Calendar arithmetic errors (out-of-range dates)
    #[error("Date arithmetic error: {message}")]
    Date {
        message: String,
        #[source]
        source: jiff::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlanError {
        PlanError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlanError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a structural invariant error with a message.
    pub fn structural(message: impl Into<String>) -> Self {
        Self::StructuralInvariant {
            message: message.into(),
        }
    }
}

/// Specialized extension trait for calendar arithmetic Results.
pub trait DateResultExt<T> {
    /// Map jiff errors with a message.
    fn date_context(self, message: &str) -> Result<T>;
}

impl<T> DateResultExt<T> for std::result::Result<T, jiff::Error> {
    fn date_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlanError::Date {
            message: message.to_string(),
            source: e,
        })
    }
}

/// Result type alias for scheduling operations
pub type Result<T> = std::result::Result<T, PlanError>;
