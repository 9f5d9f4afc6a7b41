//! RICE scoring
//!
//! `score = round(reach * impact * confidence / (effort * 100))`, with
//! effort 0 treated as unscoreable (score 0). Inputs are validated here
//! even though the store validates too: this is the only place the formula
//! is evaluated.

use crate::error::ScoringError;
use crate::rounding::round_half_up;
use discovery_model::{IdeaRecord, ScoreDefaults};
use serde::{Deserialize, Serialize};

/// One of the four RICE inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreField {
    /// Users reached per period
    Reach,
    /// Impact, 0-5
    Impact,
    /// Confidence percentage
    Confidence,
    /// Effort, 0-5
    Effort,
}

impl ScoreField {
    /// All fields in formula order
    pub const ALL: [Self; 4] = [Self::Reach, Self::Impact, Self::Confidence, Self::Effort];

    /// Field name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reach => "reach",
            Self::Impact => "impact",
            Self::Confidence => "confidence",
            Self::Effort => "effort",
        }
    }
}

impl std::fmt::Display for ScoreField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The four RICE inputs for one idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoringInput {
    /// Users reached per period, >= 0
    pub reach: i64,
    /// Impact, 0-5
    pub impact: i64,
    /// Confidence percentage, 0-100
    pub confidence: i64,
    /// Effort, 0-5 (0 is unscoreable)
    pub effort: i64,
}

impl ScoringInput {
    /// Largest accepted impact
    pub const MAX_IMPACT: i64 = 5;
    /// Largest accepted effort
    pub const MAX_EFFORT: i64 = 5;
    /// Largest accepted confidence
    pub const MAX_CONFIDENCE: i64 = 100;

    /// Create input
    #[inline]
    #[must_use]
    pub fn new(reach: i64, impact: i64, confidence: i64, effort: i64) -> Self {
        Self {
            reach,
            impact,
            confidence,
            effort,
        }
    }

    /// Inputs stored on the idea, if all four are present
    #[must_use]
    pub fn from_record(idea: &IdeaRecord) -> Option<Self> {
        Some(Self::new(
            idea.reach_estimate?,
            idea.impact_score?,
            idea.confidence_score?,
            idea.effort_score?,
        ))
    }

    /// Inputs stored on the idea, with defaults for absent fields
    #[must_use]
    pub fn with_defaults(idea: &IdeaRecord, defaults: &ScoreDefaults) -> Self {
        Self::new(
            idea.reach_estimate.unwrap_or(defaults.reach),
            idea.impact_score.unwrap_or(defaults.impact),
            idea.confidence_score.unwrap_or(defaults.confidence),
            idea.effort_score.unwrap_or(defaults.effort),
        )
    }

    /// Value of one field
    #[inline]
    #[must_use]
    pub fn get(&self, field: ScoreField) -> i64 {
        match field {
            ScoreField::Reach => self.reach,
            ScoreField::Impact => self.impact,
            ScoreField::Confidence => self.confidence,
            ScoreField::Effort => self.effort,
        }
    }

    /// Check every field against its range
    ///
    /// # Errors
    /// [`ScoringError::InvalidScoreInputs`] naming the first bad field
    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.reach < 0 {
            return Err(ScoringError::invalid_input(ScoreField::Reach, self.reach, ">= 0"));
        }
        if !(0..=Self::MAX_IMPACT).contains(&self.impact) {
            return Err(ScoringError::invalid_input(ScoreField::Impact, self.impact, "0..=5"));
        }
        if !(0..=Self::MAX_CONFIDENCE).contains(&self.confidence) {
            return Err(ScoringError::invalid_input(
                ScoreField::Confidence,
                self.confidence,
                "0..=100",
            ));
        }
        if !(0..=Self::MAX_EFFORT).contains(&self.effort) {
            return Err(ScoringError::invalid_input(ScoreField::Effort, self.effort, "0..=5"));
        }
        Ok(())
    }
}

/// RICE score calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct RiceScorer;

impl RiceScorer {
    /// Create new scorer instance
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compute the RICE score
    ///
    /// # Returns
    /// - `Ok(0)` when effort is 0, or when reach, impact or confidence is 0
    /// - `Ok(score)` rounded half-up otherwise
    ///
    /// # Errors
    /// - [`ScoringError::InvalidScoreInputs`] for out-of-range inputs
    /// - [`ScoringError::ScoreOverflow`] if the score exceeds `u64`
    pub fn score(&self, input: &ScoringInput) -> Result<u64, ScoringError> {
        input.validate()?;

        if input.effort == 0 {
            tracing::trace!(?input, "effort is zero, idea is unscoreable");
            return Ok(0);
        }

        // Non-negative after validation.
        let numerator = u128::from(input.reach.unsigned_abs())
            * u128::from(input.impact.unsigned_abs())
            * u128::from(input.confidence.unsigned_abs());
        let denominator = u128::from(input.effort.unsigned_abs()) * 100;

        let score = u64::try_from(round_half_up(numerator, denominator))
            .map_err(|_| ScoringError::ScoreOverflow { input: *input })?;

        tracing::trace!(?input, score, "computed rice score");
        Ok(score)
    }

    /// Score an idea, filling absent inputs from `defaults`
    ///
    /// # Errors
    /// As [`RiceScorer::score`]
    pub fn score_idea(&self, idea: &IdeaRecord, defaults: &ScoreDefaults) -> Result<u64, ScoringError> {
        self.score(&ScoringInput::with_defaults(idea, defaults))
    }

    /// Recompute the stored score of an idea
    ///
    /// # Returns
    /// - `Ok(Some(score))` when all inputs are present and the stored score
    ///   differs from (or is missing next to) the recomputed one
    /// - `Ok(None)` when the stored score is current or inputs are incomplete
    ///
    /// # Errors
    /// As [`RiceScorer::score`], plus [`ScoringError::ScoreOverflow`] when
    /// the recomputed score does not fit the stored `i64` column
    pub fn reconcile(&self, idea: &IdeaRecord) -> Result<Option<u64>, ScoringError> {
        let Some(input) = ScoringInput::from_record(idea) else {
            return Ok(None);
        };

        let score = self.score(&input)?;
        let storable = i64::try_from(score).map_err(|_| ScoringError::ScoreOverflow { input })?;
        if idea.rice_score == Some(storable) {
            return Ok(None);
        }

        tracing::warn!(
            idea = %idea.id,
            stored = ?idea.rice_score,
            recomputed = score,
            "stored rice score is stale"
        );
        Ok(Some(score))
    }
}

/// Coarse priority label for a RICE score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriorityBand {
    /// Score >= 100
    VeryHigh,
    /// Score >= 50
    High,
    /// Score >= 25
    Medium,
    /// Score >= 10
    Low,
    /// Score < 10
    VeryLow,
}

impl PriorityBand {
    /// Band for a score
    #[must_use]
    pub fn for_score(score: u64) -> Self {
        match score {
            100.. => Self::VeryHigh,
            50..=99 => Self::High,
            25..=49 => Self::Medium,
            10..=24 => Self::Low,
            _ => Self::VeryLow,
        }
    }

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High Priority",
            Self::High => "High Priority",
            Self::Medium => "Medium Priority",
            Self::Low => "Low Priority",
            Self::VeryLow => "Very Low Priority",
        }
    }
}

impl std::fmt::Display for PriorityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Label for an impact score; unknown values read as "Medium"
#[must_use]
pub fn impact_label(impact: i64) -> &'static str {
    match impact {
        1 => "Minimal",
        2 => "Low",
        4 => "High",
        5 => "Massive",
        _ => "Medium",
    }
}

/// Size and duration label for an effort score; unknown values read as "Medium"
#[must_use]
pub fn effort_label(effort: i64) -> &'static str {
    match effort {
        1 => "Minimal (< 1 week)",
        2 => "Low (1-2 weeks)",
        3 => "Medium (1 month)",
        4 => "High (1 quarter)",
        5 => "Massive (> 1 quarter)",
        _ => "Medium",
    }
}

/// Bare duration for an effort score; unknown values read as "1 month"
#[must_use]
pub fn effort_duration(effort: i64) -> &'static str {
    match effort {
        1 => "< 1 week",
        2 => "1-2 weeks",
        4 => "1 quarter",
        5 => "> 1 quarter",
        _ => "1 month",
    }
}
