//! Hypothesis records
//!
//! [`HypothesisRow`] mirrors the store verbatim; [`HypothesisRecord`] is the
//! typed form the scoring engine consumes.

use crate::error::ModelError;
use crate::ids::{HypothesisId, IdeaId};
use crate::status::{ExperimentType, HypothesisStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Typed hypothesis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HypothesisRecord {
    /// Store identifier
    pub id: HypothesisId,
    /// Owning idea, nullable in the store
    #[serde(default)]
    pub idea_id: Option<IdeaId>,
    /// Testable statement
    #[serde(default)]
    pub statement: String,
    /// Validation status
    #[serde(default)]
    pub status: HypothesisStatus,
    /// Experiment used to test the statement
    #[serde(default)]
    pub experiment_type: Option<ExperimentType>,
    /// Recorded results
    #[serde(default)]
    pub results: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl HypothesisRecord {
    /// Create a hypothesis with the given status
    #[must_use]
    pub fn new(id: HypothesisId, idea_id: Option<IdeaId>, status: HypothesisStatus) -> Self {
        Self {
            id,
            idea_id,
            statement: String::new(),
            status,
            experiment_type: None,
            results: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// With statement
    #[inline]
    #[must_use]
    pub fn with_statement(mut self, statement: impl Into<String>) -> Self {
        self.statement = statement.into();
        self
    }

    /// With creation and update timestamps
    #[inline]
    #[must_use]
    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self.updated_at = Some(updated_at);
        self
    }
}

/// Hypothesis exactly as the store returns it
///
/// `status` and `experiment_type` are free text here; [`HypothesisRow::parse`]
/// is the only way to obtain a [`HypothesisRecord`] from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HypothesisRow {
    /// Store identifier
    pub id: HypothesisId,
    /// Owning idea
    #[serde(default)]
    pub idea_id: Option<IdeaId>,
    /// Testable statement
    #[serde(default)]
    pub statement: String,
    /// Raw status label
    #[serde(default = "default_status_label")]
    pub status: String,
    /// Raw experiment label
    #[serde(default)]
    pub experiment_type: Option<String>,
    /// Recorded results
    #[serde(default)]
    pub results: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_status_label() -> String {
    HypothesisStatus::default().label().to_string()
}

impl HypothesisRow {
    /// Create a row with a raw status label
    #[must_use]
    pub fn new(id: HypothesisId, idea_id: Option<IdeaId>, status: impl Into<String>) -> Self {
        Self {
            id,
            idea_id,
            statement: String::new(),
            status: status.into(),
            experiment_type: None,
            results: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Parse into a typed record
    ///
    /// # Errors
    /// - [`ModelError::InvalidHypothesisStatus`] for an unknown status label
    /// - [`ModelError::InvalidExperimentType`] for an unknown experiment label
    pub fn parse(&self) -> Result<HypothesisRecord, ModelError> {
        let status = self.status.parse()?;
        let experiment_type = self
            .experiment_type
            .as_deref()
            .filter(|label| !label.trim().is_empty())
            .map(str::parse)
            .transpose()?;

        Ok(HypothesisRecord {
            id: self.id,
            idea_id: self.idea_id,
            statement: self.statement.clone(),
            status,
            experiment_type,
            results: self.results.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }

    /// Parse a batch, stopping at the first bad row
    ///
    /// # Errors
    /// The first row that fails [`HypothesisRow::parse`]
    pub fn parse_all(rows: &[HypothesisRow]) -> Result<Vec<HypothesisRecord>, ModelError> {
        rows.iter().map(HypothesisRow::parse).collect()
    }
}

impl From<&HypothesisRecord> for HypothesisRow {
    fn from(record: &HypothesisRecord) -> Self {
        Self {
            id: record.id,
            idea_id: record.idea_id,
            statement: record.statement.clone(),
            status: record.status.label().to_string(),
            experiment_type: record.experiment_type.map(|kind| kind.label().to_string()),
            results: record.results.clone(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_parses_into_record() {
        let mut row = HypothesisRow::new(HypothesisId(1), Some(IdeaId(2)), "Validated");
        row.experiment_type = Some("Survey".to_string());

        let record = row.parse().unwrap();
        assert_eq!(record.status, HypothesisStatus::Validated);
        assert_eq!(record.experiment_type, Some(ExperimentType::Survey));
        assert_eq!(record.idea_id, Some(IdeaId(2)));
    }

    #[test]
    fn row_with_unknown_status_fails() {
        let row = HypothesisRow::new(HypothesisId(1), None, "Probably");
        assert_eq!(
            row.parse().unwrap_err(),
            ModelError::InvalidHypothesisStatus("Probably".to_string())
        );
    }

    #[test]
    fn blank_experiment_type_is_absent() {
        let mut row = HypothesisRow::new(HypothesisId(1), None, "Unvalidated");
        row.experiment_type = Some("  ".to_string());
        assert_eq!(row.parse().unwrap().experiment_type, None);
    }

    #[test]
    fn parse_all_stops_at_first_bad_row() {
        let rows = vec![
            HypothesisRow::new(HypothesisId(1), None, "Validated"),
            HypothesisRow::new(HypothesisId(2), None, "Nope"),
            HypothesisRow::new(HypothesisId(3), None, "Also nope"),
        ];
        let err = HypothesisRow::parse_all(&rows).unwrap_err();
        assert_eq!(err.label(), "Nope");
    }

    #[test]
    fn missing_status_defaults_to_unvalidated() {
        let row: HypothesisRow = serde_json::from_str(r#"{ "id": 9, "ideaId": 1 }"#).unwrap();
        assert_eq!(row.parse().unwrap().status, HypothesisStatus::Unvalidated);
    }
}
