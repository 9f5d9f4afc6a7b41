//! Error types for discovery records

/// Errors raised while interpreting records from the external store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Hypothesis status label outside the closed set
    #[error("invalid hypothesis status: '{0}'")]
    InvalidHypothesisStatus(String),

    /// Idea status label outside the closed set
    #[error("invalid idea status: '{0}'")]
    InvalidIdeaStatus(String),

    /// Experiment type label outside the closed set
    #[error("invalid experiment type: '{0}'")]
    InvalidExperimentType(String),
}

impl ModelError {
    /// The offending label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::InvalidHypothesisStatus(s)
            | Self::InvalidIdeaStatus(s)
            | Self::InvalidExperimentType(s) => s,
        }
    }
}
