//! Derived display values for the index table.

use crate::models::IngestionStatus;

/// Scores at or above this render as the high band.
pub const SCORE_HIGH_THRESHOLD: u8 = 90;
/// Scores at or above this (but below high) render as the medium band.
pub const SCORE_MEDIUM_THRESHOLD: u8 = 70;

/// Color band of the score dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreBand::High => "high",
            ScoreBand::Medium => "medium",
            ScoreBand::Low => "low",
        }
    }
}

/// Band a 0-100 score by the fixed thresholds.
pub fn score_band(score: u8) -> ScoreBand {
    if score >= SCORE_HIGH_THRESHOLD {
        ScoreBand::High
    } else if score >= SCORE_MEDIUM_THRESHOLD {
        ScoreBand::Medium
    } else {
        ScoreBand::Low
    }
}

/// CSS-safe token for a status badge: lowercase, spaces to hyphens.
pub fn status_token(status: IngestionStatus) -> String {
    status.as_str().to_lowercase().replace(' ', "-")
}
