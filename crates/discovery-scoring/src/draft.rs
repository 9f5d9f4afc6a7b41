//! Score drafts
//!
//! A draft holds edited RICE inputs for one idea. The canonical record is
//! never touched: committing produces a [`ScoreUpdate`] for the store to
//! persist, and discarding is just dropping the draft.

use crate::error::ScoringError;
use crate::rice::{RiceScorer, ScoreField, ScoringInput};
use discovery_model::{IdeaId, IdeaRecord, ScoreDefaults};
use serde::{Deserialize, Serialize};

/// Uncommitted RICE inputs for one idea
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreDraft {
    idea_id: IdeaId,
    input: ScoringInput,
}

impl ScoreDraft {
    /// Start a draft from the idea's stored inputs
    ///
    /// Absent fields start from `defaults`.
    #[must_use]
    pub fn from_idea(idea: &IdeaRecord, defaults: &ScoreDefaults) -> Self {
        Self {
            idea_id: idea.id,
            input: ScoringInput::with_defaults(idea, defaults),
        }
    }

    /// Idea the draft belongs to
    #[inline]
    #[must_use]
    pub fn idea_id(&self) -> IdeaId {
        self.idea_id
    }

    /// Current draft inputs
    #[inline]
    #[must_use]
    pub fn input(&self) -> &ScoringInput {
        &self.input
    }

    /// Set one field
    #[inline]
    pub fn set(&mut self, field: ScoreField, value: i64) -> &mut Self {
        match field {
            ScoreField::Reach => self.input.reach = value,
            ScoreField::Impact => self.input.impact = value,
            ScoreField::Confidence => self.input.confidence = value,
            ScoreField::Effort => self.input.effort = value,
        }
        self
    }

    /// Set reach
    #[inline]
    pub fn set_reach(&mut self, reach: i64) -> &mut Self {
        self.set(ScoreField::Reach, reach)
    }

    /// Set impact
    #[inline]
    pub fn set_impact(&mut self, impact: i64) -> &mut Self {
        self.set(ScoreField::Impact, impact)
    }

    /// Set confidence
    #[inline]
    pub fn set_confidence(&mut self, confidence: i64) -> &mut Self {
        self.set(ScoreField::Confidence, confidence)
    }

    /// Set effort
    #[inline]
    pub fn set_effort(&mut self, effort: i64) -> &mut Self {
        self.set(ScoreField::Effort, effort)
    }

    /// Fields whose draft value differs from what the idea stores
    ///
    /// A field the idea leaves unset always counts as changed.
    #[must_use]
    pub fn changed_fields(&self, idea: &IdeaRecord) -> Vec<ScoreField> {
        let stored = [
            idea.reach_estimate,
            idea.impact_score,
            idea.confidence_score,
            idea.effort_score,
        ];

        ScoreField::ALL
            .into_iter()
            .zip(stored)
            .filter(|(field, stored)| *stored != Some(self.input.get(*field)))
            .map(|(field, _)| field)
            .collect()
    }

    /// Score the draft would produce
    ///
    /// # Errors
    /// As [`RiceScorer::score`]
    pub fn preview(&self) -> Result<u64, ScoringError> {
        RiceScorer::new().score(&self.input)
    }

    /// Validate and turn the draft into an update
    ///
    /// # Errors
    /// - As [`RiceScorer::score`]
    /// - [`ScoringError::ScoreOverflow`] if the score does not fit the
    ///   store's integer column
    pub fn commit(self) -> Result<ScoreUpdate, ScoringError> {
        let score = self.preview()?;
        let rice_score =
            i64::try_from(score).map_err(|_| ScoringError::ScoreOverflow { input: self.input })?;

        tracing::debug!(idea = %self.idea_id, rice_score, "committed score draft");
        Ok(ScoreUpdate {
            idea_id: self.idea_id,
            reach_estimate: self.input.reach,
            impact_score: self.input.impact,
            confidence_score: self.input.confidence,
            effort_score: self.input.effort,
            rice_score,
        })
    }
}

/// Validated score values ready to persist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreUpdate {
    /// Idea to update
    pub idea_id: IdeaId,
    /// Reach
    pub reach_estimate: i64,
    /// Impact
    pub impact_score: i64,
    /// Confidence
    pub confidence_score: i64,
    /// Effort
    pub effort_score: i64,
    /// Recomputed RICE score
    pub rice_score: i64,
}

impl ScoreUpdate {
    /// New record with the update merged in
    ///
    /// Returns `None` if the update belongs to another idea.
    #[must_use]
    pub fn apply_to(&self, idea: &IdeaRecord) -> Option<IdeaRecord> {
        if idea.id != self.idea_id {
            return None;
        }

        let mut updated = idea.clone();
        updated.reach_estimate = Some(self.reach_estimate);
        updated.impact_score = Some(self.impact_score);
        updated.confidence_score = Some(self.confidence_score);
        updated.effort_score = Some(self.effort_score);
        updated.rice_score = Some(self.rice_score);
        Some(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_starts_from_defaults_for_absent_fields() {
        let mut idea = IdeaRecord::new(IdeaId(1), "Sharing");
        idea.impact_score = Some(5);

        let draft = ScoreDraft::from_idea(&idea, &ScoreDefaults::default());
        assert_eq!(*draft.input(), ScoringInput::new(1000, 5, 80, 3));
    }

    #[test]
    fn stored_zero_is_not_replaced_by_default() {
        let mut idea = IdeaRecord::new(IdeaId(1), "Sharing");
        idea.confidence_score = Some(0);

        let draft = ScoreDraft::from_idea(&idea, &ScoreDefaults::default());
        assert_eq!(draft.input().confidence, 0);
        assert_eq!(draft.preview().unwrap(), 0);
    }

    #[test]
    fn edits_do_not_touch_the_record() {
        let idea = IdeaRecord::new(IdeaId(1), "Sharing").with_rice_inputs(1000, 3, 80, 2);
        let before = idea.clone();

        let mut draft = ScoreDraft::from_idea(&idea, &ScoreDefaults::default());
        draft.set_reach(2000).set_effort(4);

        assert_eq!(idea, before);
        assert_eq!(draft.changed_fields(&idea), vec![ScoreField::Reach, ScoreField::Effort]);
    }

    #[test]
    fn commit_recomputes_score() {
        let idea = IdeaRecord::new(IdeaId(7), "Sharing")
            .with_rice_inputs(1000, 3, 80, 2)
            .with_rice_score(1);

        let mut draft = ScoreDraft::from_idea(&idea, &ScoreDefaults::default());
        draft.set_confidence(50);
        let update = draft.commit().unwrap();

        assert_eq!(update.rice_score, 750);
        let merged = update.apply_to(&idea).unwrap();
        assert_eq!(merged.rice_score, Some(750));
        assert_eq!(merged.confidence_score, Some(50));
        assert_eq!(merged.title, "Sharing");
        assert_eq!(idea.rice_score, Some(1));
    }

    #[test]
    fn commit_rejects_invalid_draft() {
        let idea = IdeaRecord::new(IdeaId(1), "x");
        let mut draft = ScoreDraft::from_idea(&idea, &ScoreDefaults::default());
        draft.set_impact(9);

        assert!(matches!(
            draft.commit(),
            Err(ScoringError::InvalidScoreInputs { field: ScoreField::Impact, .. })
        ));
    }

    #[test]
    fn update_ignores_other_ideas() {
        let idea = IdeaRecord::new(IdeaId(1), "x");
        let update = ScoreDraft::from_idea(&idea, &ScoreDefaults::default())
            .commit()
            .unwrap();

        assert!(update.apply_to(&IdeaRecord::new(IdeaId(2), "y")).is_none());
    }
}
