//! Dashboard counters

use crate::rounding::percent;
use discovery_model::{HypothesisRecord, IdeaRecord, IdeaStatus};
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickStats {
    /// All ideas
    pub total_ideas: usize,
    /// Ideas with status Validated
    pub validated_ideas: usize,
    /// Ideas with status In Discovery
    pub in_discovery: usize,
    /// Share of ideas validated, 0-100
    pub idea_validation_rate: u8,
    /// Mean days from creation to last update over resolved hypotheses
    pub avg_days_to_resolve: Option<f64>,
}

impl QuickStats {
    /// Compute stats over a snapshot
    ///
    /// Hypotheses missing either timestamp, or updated before they were
    /// created, are left out of the average.
    #[must_use]
    pub fn compute(ideas: &[IdeaRecord], hypotheses: &[HypothesisRecord]) -> Self {
        let count = |status: IdeaStatus| ideas.iter().filter(|idea| idea.status == status).count();
        let validated_ideas = count(IdeaStatus::Validated);

        let durations: Vec<f64> = hypotheses
            .iter()
            .filter(|h| h.status.is_resolved())
            .filter_map(|h| Some(h.updated_at? - h.created_at?))
            .filter(|elapsed| *elapsed >= chrono::Duration::zero())
            .map(|elapsed| elapsed.num_seconds() as f64 / SECONDS_PER_DAY)
            .collect();

        let avg_days_to_resolve = if durations.is_empty() {
            None
        } else {
            Some(durations.iter().sum::<f64>() / durations.len() as f64)
        };

        Self {
            total_ideas: ideas.len(),
            validated_ideas,
            in_discovery: count(IdeaStatus::InDiscovery),
            idea_validation_rate: percent(validated_ideas, ideas.len()),
            avg_days_to_resolve,
        }
    }
}
