//! Validation progress
//!
//! Summarizes hypothesis outcomes per idea and overall. Both rollups go
//! through [`StatusCounts::rates`], so the per-idea and overall numbers
//! always use the same rounding and the same zero handling.

use crate::error::ScoringError;
use crate::rounding::percent;
use discovery_model::{
    HypothesisRecord, HypothesisRow, HypothesisStatus, IdeaId, IdeaRecord,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Hypothesis counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    /// All hypotheses
    pub total: usize,
    /// Validated
    pub validated: usize,
    /// Invalidated
    pub invalidated: usize,
    /// Partially validated ("In Progress" when displayed)
    pub partially_validated: usize,
    /// Unvalidated
    pub unvalidated: usize,
}

impl StatusCounts {
    /// Create empty counts
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one hypothesis
    #[inline]
    pub fn record(&mut self, status: HypothesisStatus) {
        self.total += 1;
        match status {
            HypothesisStatus::Validated => self.validated += 1,
            HypothesisStatus::Invalidated => self.invalidated += 1,
            HypothesisStatus::PartiallyValidated => self.partially_validated += 1,
            HypothesisStatus::Unvalidated => self.unvalidated += 1,
        }
    }

    /// Count for one status
    #[inline]
    #[must_use]
    pub fn count(&self, status: HypothesisStatus) -> usize {
        match status {
            HypothesisStatus::Validated => self.validated,
            HypothesisStatus::Invalidated => self.invalidated,
            HypothesisStatus::PartiallyValidated => self.partially_validated,
            HypothesisStatus::Unvalidated => self.unvalidated,
        }
    }

    /// Hypotheses with a conclusive outcome
    #[inline]
    #[must_use]
    pub fn resolved(&self) -> usize {
        self.validated + self.invalidated
    }

    /// Validation and success rates
    #[must_use]
    pub fn rates(&self) -> ValidationRates {
        ValidationRates {
            validation_rate: percent(self.resolved(), self.total),
            success_rate: percent(self.validated, self.total),
        }
    }
}

impl FromIterator<HypothesisStatus> for StatusCounts {
    fn from_iter<I: IntoIterator<Item = HypothesisStatus>>(iter: I) -> Self {
        let mut counts = Self::new();
        for status in iter {
            counts.record(status);
        }
        counts
    }
}

impl<'a> FromIterator<&'a HypothesisRecord> for StatusCounts {
    fn from_iter<I: IntoIterator<Item = &'a HypothesisRecord>>(iter: I) -> Self {
        iter.into_iter().map(|h| h.status).collect()
    }
}

/// Percentages for a group of hypotheses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRates {
    /// Share of hypotheses validated or invalidated, 0-100
    pub validation_rate: u8,
    /// Share of hypotheses validated, 0-100
    pub success_rate: u8,
}

/// Readiness label for an idea's validation progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationBand {
    /// No hypotheses recorded
    NoHypotheses,
    /// Validation rate >= 80
    WellValidated,
    /// Validation rate >= 60
    PartiallyValidated,
    /// Validation rate >= 40
    InProgress,
    /// Validation rate < 40
    NeedsValidation,
}

impl ValidationBand {
    /// Band for counts
    #[must_use]
    pub fn for_counts(counts: &StatusCounts) -> Self {
        if counts.total == 0 {
            return Self::NoHypotheses;
        }
        match counts.rates().validation_rate {
            80.. => Self::WellValidated,
            60..=79 => Self::PartiallyValidated,
            40..=59 => Self::InProgress,
            _ => Self::NeedsValidation,
        }
    }

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoHypotheses => "No Hypotheses",
            Self::WellValidated => "Well Validated",
            Self::PartiallyValidated => "Partially Validated",
            Self::InProgress => "In Progress",
            Self::NeedsValidation => "Needs Validation",
        }
    }
}

impl std::fmt::Display for ValidationBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Progress for one idea
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaProgress {
    /// Idea identifier
    pub idea_id: IdeaId,
    /// Idea title, empty when no idea record was supplied
    pub title: String,
    /// Counts by status
    pub counts: StatusCounts,
    /// Rates derived from `counts`
    pub rates: ValidationRates,
    /// Readiness band
    pub band: ValidationBand,
}

impl IdeaProgress {
    fn new(idea_id: IdeaId, title: String, counts: StatusCounts) -> Self {
        Self {
            idea_id,
            title,
            counts,
            rates: counts.rates(),
            band: ValidationBand::for_counts(&counts),
        }
    }
}

/// Progress over every hypothesis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallProgress {
    /// Counts by status
    pub counts: StatusCounts,
    /// Rates derived from `counts`
    pub rates: ValidationRates,
}

impl OverallProgress {
    fn new(counts: StatusCounts) -> Self {
        Self {
            counts,
            rates: counts.rates(),
        }
    }
}

/// Per-idea and overall progress
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Per-idea rollups, highest validation rate first
    pub per_idea: Vec<IdeaProgress>,
    /// Rollup over the whole hypothesis collection
    pub overall: OverallProgress,
}

impl ValidationReport {
    /// Rollup for one idea
    #[must_use]
    pub fn idea(&self, id: IdeaId) -> Option<&IdeaProgress> {
        self.per_idea.iter().find(|progress| progress.idea_id == id)
    }
}

/// Validation progress aggregator
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationAggregator;

impl ValidationAggregator {
    /// Create new aggregator instance
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Counts and rates for one group of hypotheses
    #[must_use]
    pub fn summarize(&self, hypotheses: &[HypothesisRecord]) -> OverallProgress {
        OverallProgress::new(hypotheses.iter().collect())
    }

    /// Rollups for every supplied idea plus the overall rollup
    ///
    /// Ideas without hypotheses get zero rates. Hypotheses without an idea,
    /// or pointing at an idea not in `ideas`, count toward the overall
    /// rollup only.
    #[must_use]
    pub fn aggregate(&self, ideas: &[IdeaRecord], hypotheses: &[HypothesisRecord]) -> ValidationReport {
        Self::report_for_ideas(ideas, hypotheses.iter().map(|h| (h.idea_id, h.status)))
    }

    /// Rollups grouped by the ideas the hypotheses reference
    ///
    /// Groups appear in order of first reference; hypotheses without an
    /// idea count toward the overall rollup only.
    #[must_use]
    pub fn aggregate_by_idea(&self, hypotheses: &[HypothesisRecord]) -> ValidationReport {
        let mut groups: IndexMap<IdeaId, StatusCounts> = IndexMap::new();
        let mut overall = StatusCounts::new();

        for hypothesis in hypotheses {
            overall.record(hypothesis.status);
            if let Some(idea_id) = hypothesis.idea_id {
                groups.entry(idea_id).or_default().record(hypothesis.status);
            }
        }

        let per_idea = groups
            .into_iter()
            .map(|(idea_id, counts)| IdeaProgress::new(idea_id, String::new(), counts))
            .collect();

        Self::finish(per_idea, overall)
    }

    /// Rollups from raw store rows
    ///
    /// Every status is parsed before anything is counted.
    ///
    /// # Errors
    /// [`ScoringError::InvalidHypothesisStatus`] for the first row whose
    /// status is not one of the four known labels
    pub fn aggregate_rows(
        &self,
        ideas: &[IdeaRecord],
        rows: &[HypothesisRow],
    ) -> Result<ValidationReport, ScoringError> {
        let parsed = rows
            .iter()
            .map(|row| {
                row.status
                    .parse::<HypothesisStatus>()
                    .map(|status| (row.idea_id, status))
                    .map_err(|_| ScoringError::InvalidHypothesisStatus {
                        hypothesis: row.id,
                        status: row.status.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::report_for_ideas(ideas, parsed))
    }

    fn report_for_ideas(
        ideas: &[IdeaRecord],
        statuses: impl IntoIterator<Item = (Option<IdeaId>, HypothesisStatus)>,
    ) -> ValidationReport {
        let mut by_idea: HashMap<IdeaId, StatusCounts> = HashMap::with_capacity(ideas.len());
        let mut overall = StatusCounts::new();

        for (idea_id, status) in statuses {
            overall.record(status);
            if let Some(idea_id) = idea_id {
                by_idea.entry(idea_id).or_default().record(status);
            }
        }

        let per_idea = ideas
            .iter()
            .map(|idea| {
                let counts = by_idea.get(&idea.id).copied().unwrap_or_default();
                IdeaProgress::new(idea.id, idea.title.clone(), counts)
            })
            .collect();

        Self::finish(per_idea, overall)
    }

    fn finish(mut per_idea: Vec<IdeaProgress>, overall: StatusCounts) -> ValidationReport {
        // Stable: ties keep input order.
        per_idea.sort_by(|a, b| b.rates.validation_rate.cmp(&a.rates.validation_rate));

        let report = ValidationReport {
            per_idea,
            overall: OverallProgress::new(overall),
        };

        tracing::debug!(
            ideas = report.per_idea.len(),
            hypotheses = report.overall.counts.total,
            validation_rate = report.overall.rates.validation_rate,
            "aggregated validation progress"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discovery_model::HypothesisId;

    fn hypothesis(id: u64, idea: u64, status: HypothesisStatus) -> HypothesisRecord {
        HypothesisRecord::new(HypothesisId(id), Some(IdeaId(idea)), status)
    }

    #[test]
    fn reference_case() {
        let hypotheses = vec![
            hypothesis(1, 1, HypothesisStatus::Validated),
            hypothesis(2, 1, HypothesisStatus::Validated),
            hypothesis(3, 1, HypothesisStatus::Invalidated),
            hypothesis(4, 1, HypothesisStatus::Unvalidated),
        ];

        let summary = ValidationAggregator::new().summarize(&hypotheses);
        assert_eq!(summary.rates.validation_rate, 75);
        assert_eq!(summary.rates.success_rate, 50);
        assert_eq!(summary.counts.unvalidated, 1);
    }

    #[test]
    fn all_unvalidated_is_zero() {
        let hypotheses = vec![
            hypothesis(1, 1, HypothesisStatus::Unvalidated),
            hypothesis(2, 1, HypothesisStatus::Unvalidated),
        ];
        let rates = ValidationAggregator::new().summarize(&hypotheses).rates;
        assert_eq!(rates, ValidationRates::default());
    }

    #[test]
    fn partially_validated_is_not_resolved() {
        let counts: StatusCounts = [
            HypothesisStatus::PartiallyValidated,
            HypothesisStatus::Validated,
        ]
        .into_iter()
        .collect();

        assert_eq!(counts.partially_validated, 1);
        assert_eq!(counts.rates().validation_rate, 50);
        assert_eq!(counts.count(HypothesisStatus::PartiallyValidated), 1);
    }

    #[test]
    fn idea_without_hypotheses_has_zero_rates() {
        let ideas = vec![IdeaRecord::new(IdeaId(9), "Lonely")];
        let report = ValidationAggregator::new().aggregate(&ideas, &[]);

        let progress = report.idea(IdeaId(9)).unwrap();
        assert_eq!(progress.counts.total, 0);
        assert_eq!(progress.rates, ValidationRates::default());
        assert_eq!(progress.band, ValidationBand::NoHypotheses);
        assert_eq!(report.overall.rates, ValidationRates::default());
    }

    #[test]
    fn per_idea_sorted_by_validation_rate_desc() {
        let ideas = vec![
            IdeaRecord::new(IdeaId(1), "low"),
            IdeaRecord::new(IdeaId(2), "high"),
            IdeaRecord::new(IdeaId(3), "none"),
        ];
        let hypotheses = vec![
            hypothesis(1, 1, HypothesisStatus::Unvalidated),
            hypothesis(2, 2, HypothesisStatus::Invalidated),
        ];

        let report = ValidationAggregator::new().aggregate(&ideas, &hypotheses);
        let order: Vec<_> = report.per_idea.iter().map(|p| p.idea_id).collect();
        assert_eq!(order, vec![IdeaId(2), IdeaId(1), IdeaId(3)]);
    }

    #[test]
    fn orphans_count_toward_overall_only() {
        let ideas = vec![IdeaRecord::new(IdeaId(1), "a")];
        let hypotheses = vec![
            hypothesis(1, 1, HypothesisStatus::Validated),
            hypothesis(2, 42, HypothesisStatus::Validated),
            HypothesisRecord::new(HypothesisId(3), None, HypothesisStatus::Unvalidated),
        ];

        let report = ValidationAggregator::new().aggregate(&ideas, &hypotheses);
        assert_eq!(report.per_idea.len(), 1);
        assert_eq!(report.per_idea[0].counts.total, 1);
        assert_eq!(report.overall.counts.total, 3);
        assert_eq!(report.overall.rates.validation_rate, 67);
    }

    #[test]
    fn aggregate_by_idea_groups_in_first_reference_order() {
        let hypotheses = vec![
            hypothesis(1, 5, HypothesisStatus::Unvalidated),
            hypothesis(2, 3, HypothesisStatus::Unvalidated),
            hypothesis(3, 5, HypothesisStatus::Unvalidated),
        ];

        let report = ValidationAggregator::new().aggregate_by_idea(&hypotheses);
        let order: Vec<_> = report.per_idea.iter().map(|p| p.idea_id).collect();
        assert_eq!(order, vec![IdeaId(5), IdeaId(3)]);
        assert_eq!(report.per_idea[0].counts.total, 2);
    }

    #[test]
    fn aggregate_rows_fails_fast_on_unknown_status() {
        let rows = vec![
            HypothesisRow::new(HypothesisId(1), Some(IdeaId(1)), "Validated"),
            HypothesisRow::new(HypothesisId(2), Some(IdeaId(1)), "Kind of"),
        ];

        let err = ValidationAggregator::new().aggregate_rows(&[], &rows).unwrap_err();
        assert_eq!(
            err,
            ScoringError::InvalidHypothesisStatus {
                hypothesis: HypothesisId(2),
                status: "Kind of".to_string(),
            }
        );
    }

    #[test]
    fn aggregate_rows_matches_typed_aggregate() {
        let ideas = vec![IdeaRecord::new(IdeaId(1), "a")];
        let rows = vec![
            HypothesisRow::new(HypothesisId(1), Some(IdeaId(1)), "Validated"),
            HypothesisRow::new(HypothesisId(2), Some(IdeaId(1)), "Partially Validated"),
        ];
        let typed = HypothesisRow::parse_all(&rows).unwrap();

        let aggregator = ValidationAggregator::new();
        assert_eq!(
            aggregator.aggregate_rows(&ideas, &rows).unwrap(),
            aggregator.aggregate(&ideas, &typed)
        );
    }

    #[test]
    fn validation_bands() {
        let band = |resolved: usize, total: usize| {
            let counts = StatusCounts {
                total,
                validated: resolved,
                unvalidated: total - resolved,
                ..StatusCounts::default()
            };
            ValidationBand::for_counts(&counts)
        };

        assert_eq!(band(4, 5), ValidationBand::WellValidated);
        assert_eq!(band(3, 5), ValidationBand::PartiallyValidated);
        assert_eq!(band(2, 5), ValidationBand::InProgress);
        assert_eq!(band(1, 5), ValidationBand::NeedsValidation);
        assert_eq!(band(0, 0), ValidationBand::NoHypotheses);
    }
}
