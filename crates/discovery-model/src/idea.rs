//! Idea records

use crate::ids::IdeaId;
use crate::status::IdeaStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Idea as supplied by the external store
///
/// Score fields are kept exactly as stored: `None` means the field was
/// never set. Defaults are applied at the boundary (see
/// [`ScoreDefaults`](crate::ScoreDefaults)), never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaRecord {
    /// Store identifier
    pub id: IdeaId,
    /// Short title
    #[serde(default)]
    pub title: String,
    /// Workflow status
    #[serde(default)]
    pub status: IdeaStatus,
    /// Users reached per period
    #[serde(default)]
    pub reach_estimate: Option<i64>,
    /// Impact, 1-5
    #[serde(default)]
    pub impact_score: Option<i64>,
    /// Effort, 1-5
    #[serde(default)]
    pub effort_score: Option<i64>,
    /// Confidence percentage, 0-100
    #[serde(default)]
    pub confidence_score: Option<i64>,
    /// Stored RICE score, derived from the four inputs
    #[serde(default)]
    pub rice_score: Option<i64>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl IdeaRecord {
    /// Create an unscored idea
    #[must_use]
    pub fn new(id: IdeaId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            status: IdeaStatus::New,
            reach_estimate: None,
            impact_score: None,
            effort_score: None,
            confidence_score: None,
            rice_score: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: IdeaStatus) -> Self {
        self.status = status;
        self
    }

    /// With all four RICE inputs
    #[inline]
    #[must_use]
    pub fn with_rice_inputs(mut self, reach: i64, impact: i64, confidence: i64, effort: i64) -> Self {
        self.reach_estimate = Some(reach);
        self.impact_score = Some(impact);
        self.confidence_score = Some(confidence);
        self.effort_score = Some(effort);
        self
    }

    /// With impact and effort only
    #[inline]
    #[must_use]
    pub fn with_impact_effort(mut self, impact: i64, effort: i64) -> Self {
        self.impact_score = Some(impact);
        self.effort_score = Some(effort);
        self
    }

    /// With a stored RICE score
    #[inline]
    #[must_use]
    pub fn with_rice_score(mut self, score: i64) -> Self {
        self.rice_score = Some(score);
        self
    }

    /// Whether all four RICE inputs are present
    #[inline]
    #[must_use]
    pub fn has_rice_inputs(&self) -> bool {
        self.reach_estimate.is_some()
            && self.impact_score.is_some()
            && self.confidence_score.is_some()
            && self.effort_score.is_some()
    }
}
