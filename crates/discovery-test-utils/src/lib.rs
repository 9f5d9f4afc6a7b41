//! Testing utilities for the discovery workspace
//!
//! Shared fixtures, record builders and proptest strategies.

#![allow(missing_docs)]

use discovery_model::{
    HypothesisId, HypothesisRecord, HypothesisRow, HypothesisStatus, IdeaId, IdeaRecord, IdeaStatus,
    Snapshot,
};
use proptest::prelude::*;

pub fn idea(id: u64, title: &str) -> IdeaRecord {
    IdeaRecord::new(IdeaId(id), title)
}

pub fn scored_idea(id: u64, reach: i64, impact: i64, confidence: i64, effort: i64) -> IdeaRecord {
    idea(id, &format!("idea-{id}")).with_rice_inputs(reach, impact, confidence, effort)
}

pub fn hypothesis(id: u64, idea_id: u64, status: HypothesisStatus) -> HypothesisRecord {
    HypothesisRecord::new(HypothesisId(id), Some(IdeaId(idea_id)), status)
}

pub fn row(id: u64, idea_id: u64, status: &str) -> HypothesisRow {
    HypothesisRow::new(HypothesisId(id), Some(IdeaId(idea_id)), status)
}

/// Four hypotheses on one idea: 2 validated, 1 invalidated, 1 unvalidated.
pub fn reference_hypotheses(idea_id: u64) -> Vec<HypothesisRecord> {
    vec![
        hypothesis(1, idea_id, HypothesisStatus::Validated),
        hypothesis(2, idea_id, HypothesisStatus::Validated),
        hypothesis(3, idea_id, HypothesisStatus::Invalidated),
        hypothesis(4, idea_id, HypothesisStatus::Unvalidated),
    ]
}

/// One idea per quadrant plus one unscored idea.
pub fn matrix_ideas() -> Vec<IdeaRecord> {
    vec![
        idea(1, "Quick win").with_impact_effort(5, 1),
        idea(2, "Major project").with_impact_effort(5, 4),
        idea(3, "Fill-in").with_impact_effort(2, 2),
        idea(4, "Money pit").with_impact_effort(1, 5),
        idea(5, "Unscored"),
    ]
}

pub fn demo_snapshot() -> Snapshot {
    let ideas = vec![
        scored_idea(1, 1000, 3, 80, 2).with_status(IdeaStatus::Validated).with_rice_score(1200),
        scored_idea(2, 500, 4, 50, 3).with_status(IdeaStatus::InDiscovery).with_rice_score(300),
        idea(3, "idea-3"),
    ];
    let hypotheses = vec![
        row(1, 1, "Validated"),
        row(2, 1, "Validated"),
        row(3, 1, "Invalidated"),
        row(4, 1, "Unvalidated"),
        row(5, 2, "Partially Validated"),
    ];
    Snapshot::new(ideas, hypotheses)
}

pub fn any_status() -> impl Strategy<Value = HypothesisStatus> {
    prop_oneof![
        Just(HypothesisStatus::Unvalidated),
        Just(HypothesisStatus::PartiallyValidated),
        Just(HypothesisStatus::Validated),
        Just(HypothesisStatus::Invalidated),
    ]
}

/// Hypotheses spread over ideas `1..=idea_count`, some orphaned.
pub fn any_hypotheses(idea_count: u64, max_len: usize) -> impl Strategy<Value = Vec<HypothesisRecord>> {
    prop::collection::vec((prop::option::weighted(0.9, 1..=idea_count), any_status()), 0..max_len)
        .prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (idea_id, status))| {
                    HypothesisRecord::new(HypothesisId(i as u64), idea_id.map(IdeaId), status)
                })
                .collect()
        })
}

pub fn any_optional_score() -> impl Strategy<Value = Option<i64>> {
    prop::option::of(-1i64..=7)
}
