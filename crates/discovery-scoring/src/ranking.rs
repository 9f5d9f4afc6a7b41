//! Idea ranking for the prioritization list

use crate::error::ScoringError;
use discovery_model::{IdeaRecord, IdeaStatus};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Field ideas are sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Stored RICE score
    #[default]
    #[serde(rename = "rice")]
    RiceScore,
    /// Impact score
    #[serde(rename = "impact")]
    ImpactScore,
    /// Effort score
    #[serde(rename = "effort")]
    EffortScore,
    /// Title, string order
    Title,
}

impl FromStr for SortKey {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rice" => Ok(Self::RiceScore),
            "impact" => Ok(Self::ImpactScore),
            "effort" => Ok(Self::EffortScore),
            "title" => Ok(Self::Title),
            other => Err(ScoringError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Smallest first
    Ascending,
    /// Largest first
    #[default]
    Descending,
}

/// Filter and sort options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RankOptions {
    /// Sort key
    pub key: SortKey,
    /// Sort direction
    pub order: SortOrder,
    /// Keep only ideas with this status
    pub status: Option<IdeaStatus>,
}

impl RankOptions {
    /// Create default options (RICE score, descending, unfiltered)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With sort key
    #[inline]
    #[must_use]
    pub fn by(mut self, key: SortKey) -> Self {
        self.key = key;
        self
    }

    /// With sort direction
    #[inline]
    #[must_use]
    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// With status filter
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: IdeaStatus) -> Self {
        self.status = Some(status);
        self
    }
}

fn compare(a: &IdeaRecord, b: &IdeaRecord, key: SortKey) -> Ordering {
    // Unset scores rank as 0.
    let number = |idea: &IdeaRecord| match key {
        SortKey::RiceScore => idea.rice_score.unwrap_or(0),
        SortKey::ImpactScore => idea.impact_score.unwrap_or(0),
        SortKey::EffortScore => idea.effort_score.unwrap_or(0),
        SortKey::Title => 0,
    };

    match key {
        SortKey::Title => a.title.cmp(&b.title),
        _ => number(a).cmp(&number(b)),
    }
}

/// Filter and sort ideas
///
/// The sort is stable, so equal keys keep input order in either direction.
#[must_use]
pub fn rank_ideas<'a>(ideas: &'a [IdeaRecord], options: &RankOptions) -> Vec<&'a IdeaRecord> {
    let mut ranked: Vec<&IdeaRecord> = ideas
        .iter()
        .filter(|idea| options.status.map_or(true, |status| idea.status == status))
        .collect();

    ranked.sort_by(|a, b| {
        let ordering = compare(a, b, options.key);
        match options.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });

    tracing::trace!(kept = ranked.len(), total = ideas.len(), ?options, "ranked ideas");
    ranked
}
