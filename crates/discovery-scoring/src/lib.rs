//! Discovery Scoring Engine
//!
//! Pure prioritization and validation arithmetic over store snapshots.
//!
//! # Core Concepts
//!
//! - [`RiceScorer`]: Reach × Impact × Confidence ÷ Effort, rounded half-up
//! - [`QuadrantClassifier`]: Impact/effort 2×2 matrix (Quick Wins first)
//! - [`ValidationAggregator`]: Per-idea and overall hypothesis progress
//! - [`ScoreDraft`]: Edit scores without touching the canonical record
//! - [`rank_ideas`]: Filter and sort ideas for display
//! - [`QuickStats`]: Dashboard counters
//!
//! Every function takes borrowed input and returns fresh values; nothing
//! here holds state between calls, so all of it is safe to share across
//! threads without synchronization.
//!
//! # Example
//!
//! ```rust
//! use discovery_scoring::{RiceScorer, ScoringInput, PriorityBand};
//!
//! let scorer = RiceScorer::new();
//! let score = scorer.score(&ScoringInput::new(1000, 3, 80, 2)).unwrap();
//! assert_eq!(score, 1200);
//! assert_eq!(PriorityBand::for_score(score), PriorityBand::VeryHigh);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod draft;
mod error;
mod quadrant;
mod ranking;
mod rice;
mod rounding;
mod stats;
mod validation;

// Re-exports
pub use draft::{ScoreDraft, ScoreUpdate};
pub use error::ScoringError;
pub use quadrant::{
    Bucket, PriorityMatrix, Quadrant, QuadrantClassifier, Scoreable, ScoredIdea,
    HIGH_IMPACT_THRESHOLD, LOW_EFFORT_THRESHOLD,
};
pub use ranking::{rank_ideas, RankOptions, SortKey, SortOrder};
pub use rice::{effort_duration, effort_label, impact_label, PriorityBand, RiceScorer, ScoreField, ScoringInput};
pub use rounding::percent;
pub use stats::QuickStats;
pub use validation::{
    IdeaProgress, OverallProgress, StatusCounts, ValidationAggregator, ValidationBand,
    ValidationRates, ValidationReport,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for scoring operations
    pub use crate::{
        PriorityMatrix, Quadrant, QuadrantClassifier, RiceScorer, ScoreDraft, ScoringError,
        ScoringInput, ValidationAggregator, ValidationReport,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
