//! Closed permission set
//!
//! Permissions travel as `module:action` wire names. Anything outside the
//! list below is rejected rather than silently ignored.

use crate::error::AccessError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A single grantable action
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Permission {
    /// Manage team members and roles
    TeamManage,
    /// See the team
    TeamView,
    /// See ideas
    IdeasView,
    /// Create ideas
    IdeasCreate,
    /// Edit ideas
    IdeasEdit,
    /// Delete ideas
    IdeasDelete,
    /// See insights
    InsightsView,
    /// Add insights
    InsightsAdd,
    /// Edit insights
    InsightsEdit,
    /// Delete insights
    InsightsDelete,
    /// See generated insight summaries
    InsightsViewAiSummaries,
    /// See hypotheses and experiments
    ValidationView,
    /// Define hypotheses
    ValidationDefineHypotheses,
    /// Record experiment results
    ValidationRecordResults,
    /// Change hypothesis status
    ValidationUpdateStatus,
    /// See the prioritization views
    PrioritizationView,
    /// Assign RICE and matrix scores
    PrioritizationAssignScores,
    /// See generated scores
    PrioritizationViewAiScores,
    /// Move ideas into planning
    PrioritizationMarkPlanning,
    /// Configure the assistant
    AiConfig,
}

impl Permission {
    /// Every permission, grouped by module
    pub const ALL: [Self; 20] = [
        Self::TeamManage,
        Self::TeamView,
        Self::IdeasView,
        Self::IdeasCreate,
        Self::IdeasEdit,
        Self::IdeasDelete,
        Self::InsightsView,
        Self::InsightsAdd,
        Self::InsightsEdit,
        Self::InsightsDelete,
        Self::InsightsViewAiSummaries,
        Self::ValidationView,
        Self::ValidationDefineHypotheses,
        Self::ValidationRecordResults,
        Self::ValidationUpdateStatus,
        Self::PrioritizationView,
        Self::PrioritizationAssignScores,
        Self::PrioritizationViewAiScores,
        Self::PrioritizationMarkPlanning,
        Self::AiConfig,
    ];

    /// Wire name, `module:action`
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TeamManage => "team:manage",
            Self::TeamView => "team:view",
            Self::IdeasView => "ideas:view",
            Self::IdeasCreate => "ideas:create",
            Self::IdeasEdit => "ideas:edit",
            Self::IdeasDelete => "ideas:delete",
            Self::InsightsView => "insights:view",
            Self::InsightsAdd => "insights:add",
            Self::InsightsEdit => "insights:edit",
            Self::InsightsDelete => "insights:delete",
            Self::InsightsViewAiSummaries => "insights:view_ai_summaries",
            Self::ValidationView => "validation:view",
            Self::ValidationDefineHypotheses => "validation:define_hypotheses",
            Self::ValidationRecordResults => "validation:record_results",
            Self::ValidationUpdateStatus => "validation:update_status",
            Self::PrioritizationView => "prioritization:view",
            Self::PrioritizationAssignScores => "prioritization:assign_scores",
            Self::PrioritizationViewAiScores => "prioritization:view_ai_scores",
            Self::PrioritizationMarkPlanning => "prioritization:mark_planning",
            Self::AiConfig => "ai:config",
        }
    }

    /// Module prefix of the wire name
    #[must_use]
    pub fn module(&self) -> &'static str {
        self.as_str().split(':').next().unwrap_or_default()
    }

    /// True for read-only `:view` permissions
    #[inline]
    #[must_use]
    pub fn is_view(&self) -> bool {
        self.as_str().ends_with(":view")
    }
}

impl FromStr for Permission {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|permission| permission.as_str() == s)
            .ok_or_else(|| AccessError::UnknownPermission(s.to_string()))
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
