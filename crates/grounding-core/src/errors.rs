//! Error types for the grounding console core.

/// Top-level error enum for the console core.
#[derive(Debug, thiserror::Error)]
pub enum GroundingError {
    #[error("Incomplete form: missing {}", missing.join(", "))]
    IncompleteForm { missing: Vec<&'static str> },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GroundingResult<T> = Result<T, GroundingError>;
