//! Snapshot of store records
//!
//! The unit of input handed to the engine per call. Hypotheses stay in raw
//! row form so that status parsing, and its failure, happens in the
//! aggregator rather than silently during load.

use crate::error::ModelError;
use crate::hypothesis::{HypothesisRecord, HypothesisRow};
use crate::idea::IdeaRecord;
use serde::{Deserialize, Serialize};

/// Ideas and hypotheses fetched together
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Ideas
    #[serde(default)]
    pub ideas: Vec<IdeaRecord>,
    /// Raw hypothesis rows
    #[serde(default)]
    pub hypotheses: Vec<HypothesisRow>,
}

impl Snapshot {
    /// Create a snapshot
    #[must_use]
    pub fn new(ideas: Vec<IdeaRecord>, hypotheses: Vec<HypothesisRow>) -> Self {
        Self { ideas, hypotheses }
    }

    /// Parse from JSON
    ///
    /// # Errors
    /// Returns error if JSON is malformed or an idea carries an unknown status
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Typed hypotheses
    ///
    /// # Errors
    /// The first row with an unknown status or experiment label
    pub fn typed_hypotheses(&self) -> Result<Vec<HypothesisRecord>, ModelError> {
        HypothesisRow::parse_all(&self.hypotheses)
    }

    /// Whether the snapshot holds no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty() && self.hypotheses.is_empty()
    }
}
