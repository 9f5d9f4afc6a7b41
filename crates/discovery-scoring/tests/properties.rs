//! Property tests for the scoring engine.
//!
//! Each block pins one guarantee callers rely on: determinism, the
//! zero-score rules, disjoint and exhaustive quadrants, and agreement
//! between the per-idea and overall validation rollups.

use discovery_model::{HypothesisRecord, IdeaId};
use discovery_scoring::{
    percent, QuadrantClassifier, RiceScorer, ScoredIdea, ScoringError, ScoringInput, StatusCounts,
    ValidationAggregator,
};
use discovery_test_utils::{any_hypotheses, any_optional_score};
use proptest::prelude::*;

fn valid_input() -> impl Strategy<Value = ScoringInput> {
    (0i64..=1_000_000, 0i64..=5, 0i64..=100, 0i64..=5)
        .prop_map(|(reach, impact, confidence, effort)| ScoringInput::new(reach, impact, confidence, effort))
}

proptest! {
    #[test]
    fn prop_score_is_deterministic(input in valid_input()) {
        let scorer = RiceScorer::new();
        prop_assert_eq!(scorer.score(&input).unwrap(), scorer.score(&input).unwrap());
    }

    #[test]
    fn prop_zero_effort_scores_zero(reach in 0i64..=1_000_000, impact in 0i64..=5, confidence in 0i64..=100) {
        let score = RiceScorer::new().score(&ScoringInput::new(reach, impact, confidence, 0)).unwrap();
        prop_assert_eq!(score, 0);
    }

    #[test]
    fn prop_zero_reach_or_confidence_scores_zero(input in valid_input()) {
        let scorer = RiceScorer::new();
        let no_reach = ScoringInput { reach: 0, ..input };
        let no_confidence = ScoringInput { confidence: 0, ..input };

        prop_assert_eq!(scorer.score(&no_reach).unwrap(), 0);
        prop_assert_eq!(scorer.score(&no_confidence).unwrap(), 0);
    }

    #[test]
    fn prop_score_matches_float_formula_away_from_ties(input in valid_input()) {
        prop_assume!(input.effort > 0);
        let exact = (input.reach * input.impact * input.confidence) as f64 / (input.effort * 100) as f64;
        prop_assume!((exact.fract() - 0.5).abs() > 1e-9);

        let score = RiceScorer::new().score(&input).unwrap();
        prop_assert_eq!(score, exact.round() as u64);
    }

    #[test]
    fn prop_negative_reach_rejected(reach in i64::MIN..0, input in valid_input()) {
        let result = RiceScorer::new().score(&ScoringInput { reach, ..input });
        let is_invalid = matches!(result, Err(ScoringError::InvalidScoreInputs { .. }));
        prop_assert!(is_invalid);
    }

    #[test]
    fn prop_quadrants_exhaustive_and_disjoint(
        scores in prop::collection::vec((any_optional_score(), any_optional_score()), 0..64)
    ) {
        let ideas: Vec<ScoredIdea> = scores
            .iter()
            .enumerate()
            .map(|(i, (impact, effort))| ScoredIdea::new(IdeaId(i as u64), *impact, *effort))
            .collect();
        let scoreable = ideas
            .iter()
            .filter(|idea| QuadrantClassifier::scores_of(*idea).is_some())
            .count();

        let matrix = QuadrantClassifier::new().classify(&ideas);
        prop_assert_eq!(matrix.classified_count(), scoreable);
        prop_assert_eq!(matrix.classified_count() + matrix.excluded, ideas.len());

        let mut seen: Vec<IdeaId> = matrix
            .buckets()
            .iter()
            .flat_map(|bucket| bucket.items().iter().map(|idea| idea.id))
            .collect();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), scoreable);
    }

    #[test]
    fn prop_aggregation_is_idempotent(hypotheses in any_hypotheses(5, 40)) {
        let aggregator = ValidationAggregator::new();
        prop_assert_eq!(
            aggregator.aggregate_by_idea(&hypotheses),
            aggregator.aggregate_by_idea(&hypotheses)
        );
    }

    #[test]
    fn prop_overall_matches_flattened_groups(hypotheses in any_hypotheses(5, 40)) {
        let aggregator = ValidationAggregator::new();
        let report = aggregator.aggregate_by_idea(&hypotheses);

        // Re-flatten: grouped hypotheses plus the orphans.
        let orphans: Vec<&HypothesisRecord> = hypotheses.iter().filter(|h| h.idea_id.is_none()).collect();
        let mut flattened = StatusCounts::new();
        for progress in &report.per_idea {
            flattened.validated += progress.counts.validated;
            flattened.invalidated += progress.counts.invalidated;
            flattened.partially_validated += progress.counts.partially_validated;
            flattened.unvalidated += progress.counts.unvalidated;
            flattened.total += progress.counts.total;
        }
        for orphan in orphans {
            flattened.record(orphan.status);
        }

        prop_assert_eq!(flattened, report.overall.counts);
        prop_assert_eq!(flattened.rates(), aggregator.summarize(&hypotheses).rates);
    }

    #[test]
    fn prop_per_idea_sorted_desc(hypotheses in any_hypotheses(8, 60)) {
        let report = ValidationAggregator::new().aggregate_by_idea(&hypotheses);
        let rates: Vec<u8> = report.per_idea.iter().map(|p| p.rates.validation_rate).collect();
        prop_assert!(rates.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn prop_success_never_exceeds_validation(part in 0usize..500, extra in 0usize..500) {
        let counts = StatusCounts {
            total: part + extra,
            validated: part,
            ..StatusCounts::default()
        };
        let rates = counts.rates();
        prop_assert!(rates.success_rate <= rates.validation_rate);
        prop_assert!(percent(part, part + extra) <= 100);
    }
}
