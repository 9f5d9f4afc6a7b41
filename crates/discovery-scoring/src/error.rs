//! Error types for the scoring engine
//!
//! All variants are logic errors in the caller's data. Nothing here is
//! transient, so nothing is retried.

use crate::rice::{ScoreField, ScoringInput};
use discovery_model::HypothesisId;

/// Scoring engine errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    /// A RICE input is outside its documented range
    #[error("invalid score inputs: {field} = {value}, expected {expected}")]
    InvalidScoreInputs {
        /// Offending field
        field: ScoreField,
        /// Value supplied
        value: i64,
        /// Accepted range
        expected: &'static str,
    },

    /// The score does not fit the output integer
    #[error("rice score overflow for {input:?}")]
    ScoreOverflow {
        /// Inputs that produced the overflow
        input: ScoringInput,
    },

    /// A hypothesis carries a status outside the closed set
    #[error("invalid hypothesis status '{status}' on hypothesis {hypothesis}")]
    InvalidHypothesisStatus {
        /// Offending hypothesis
        hypothesis: HypothesisId,
        /// Raw status label
        status: String,
    },

    /// Sort key name not recognized
    #[error("unknown sort key: '{0}' (expected rice, impact, effort or title)")]
    UnknownSortKey(String),
}

impl ScoringError {
    /// Check if the error came from RICE inputs
    #[inline]
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidScoreInputs { .. } | Self::ScoreOverflow { .. })
    }

    /// Create invalid input error
    #[inline]
    pub(crate) fn invalid_input(field: ScoreField, value: i64, expected: &'static str) -> Self {
        Self::InvalidScoreInputs {
            field,
            value,
            expected,
        }
    }
}
