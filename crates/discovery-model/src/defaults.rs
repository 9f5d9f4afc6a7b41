//! Boundary defaults for absent score fields

use serde::{Deserialize, Serialize};

/// Values substituted for score fields the store left unset
///
/// Applied only when a field is `None`. A stored zero is a real value and
/// is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreDefaults {
    /// Users reached per period
    pub reach: i64,
    /// Impact, 1-5
    pub impact: i64,
    /// Confidence percentage
    pub confidence: i64,
    /// Effort, 1-5
    pub effort: i64,
}

impl ScoreDefaults {
    /// Create default values
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With reach
    #[inline]
    #[must_use]
    pub fn with_reach(mut self, reach: i64) -> Self {
        self.reach = reach;
        self
    }

    /// With impact
    #[inline]
    #[must_use]
    pub fn with_impact(mut self, impact: i64) -> Self {
        self.impact = impact;
        self
    }

    /// With confidence
    #[inline]
    #[must_use]
    pub fn with_confidence(mut self, confidence: i64) -> Self {
        self.confidence = confidence;
        self
    }

    /// With effort
    #[inline]
    #[must_use]
    pub fn with_effort(mut self, effort: i64) -> Self {
        self.effort = effort;
        self
    }
}

impl Default for ScoreDefaults {
    fn default() -> Self {
        Self {
            reach: 1000,
            impact: 3,
            confidence: 80,
            effort: 3,
        }
    }
}
