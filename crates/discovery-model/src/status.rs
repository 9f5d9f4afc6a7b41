//! Closed status enumerations
//!
//! The store persists statuses as free text. Every label is parsed into a
//! closed enum at the boundary so an unknown value surfaces as an error
//! instead of being counted under some default bucket.

use crate::error::ModelError;
use std::str::FromStr;

/// Serialize as the canonical label, deserialize through `FromStr`.
macro_rules! label_serde {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = String::deserialize(deserializer)?;
                label.parse().map_err(serde::de::Error::custom)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

/// Validation status of a hypothesis
///
/// Created as `Unvalidated`; any other status is reached only through an
/// explicit user action in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HypothesisStatus {
    /// No evidence gathered yet
    #[default]
    Unvalidated,
    /// Some evidence, not conclusive
    PartiallyValidated,
    /// Evidence supports the statement
    Validated,
    /// Evidence refutes the statement
    Invalidated,
}

impl HypothesisStatus {
    /// All statuses in lifecycle order
    pub const ALL: [Self; 4] = [
        Self::Unvalidated,
        Self::PartiallyValidated,
        Self::Validated,
        Self::Invalidated,
    ];

    /// Canonical label as stored
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unvalidated => "Unvalidated",
            Self::PartiallyValidated => "Partially Validated",
            Self::Validated => "Validated",
            Self::Invalidated => "Invalidated",
        }
    }

    /// Presentation label
    ///
    /// `PartiallyValidated` is shown as "In Progress"; the alias is never
    /// accepted back as a stored status.
    #[inline]
    #[must_use]
    pub fn display_alias(&self) -> &'static str {
        match self {
            Self::PartiallyValidated => "In Progress",
            other => other.label(),
        }
    }

    /// Whether the hypothesis reached a conclusive outcome
    #[inline]
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Validated | Self::Invalidated)
    }
}

impl FromStr for HypothesisStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Unvalidated" => Ok(Self::Unvalidated),
            "Partially Validated" | "PartiallyValidated" => Ok(Self::PartiallyValidated),
            "Validated" => Ok(Self::Validated),
            "Invalidated" => Ok(Self::Invalidated),
            _ => Err(ModelError::InvalidHypothesisStatus(s.to_string())),
        }
    }
}

label_serde!(HypothesisStatus);

/// Workflow status of an idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IdeaStatus {
    /// Freshly captured
    #[default]
    New,
    /// Under active research
    InDiscovery,
    /// Confirmed worth pursuing
    Validated,
    /// Dropped
    Rejected,
    /// Scored and ranked
    Prioritized,
    /// Handed to planning
    InPlanning,
}

impl IdeaStatus {
    /// All statuses in workflow order
    pub const ALL: [Self; 6] = [
        Self::New,
        Self::InDiscovery,
        Self::Validated,
        Self::Rejected,
        Self::Prioritized,
        Self::InPlanning,
    ];

    /// Canonical label as stored
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InDiscovery => "In Discovery",
            Self::Validated => "Validated",
            Self::Rejected => "Rejected",
            Self::Prioritized => "Prioritized",
            Self::InPlanning => "In Planning",
        }
    }
}

impl FromStr for IdeaStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| ModelError::InvalidIdeaStatus(s.to_string()))
    }
}

label_serde!(IdeaStatus);

/// Kind of experiment used to test a hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperimentType {
    /// One-on-one interview
    UserInterview,
    /// Questionnaire
    Survey,
    /// Clickable or paper prototype
    PrototypeTest,
    /// Split test
    AbTest,
    /// Analysis of existing data
    DataAnalysis,
}

impl ExperimentType {
    /// All experiment types
    pub const ALL: [Self; 5] = [
        Self::UserInterview,
        Self::Survey,
        Self::PrototypeTest,
        Self::AbTest,
        Self::DataAnalysis,
    ];

    /// Canonical label as stored
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::UserInterview => "User Interview",
            Self::Survey => "Survey",
            Self::PrototypeTest => "Prototype Test",
            Self::AbTest => "A/B Test",
            Self::DataAnalysis => "Data Analysis",
        }
    }
}

impl FromStr for ExperimentType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| ModelError::InvalidExperimentType(s.to_string()))
    }
}

label_serde!(ExperimentType);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hypothesis_status_parses_canonical_labels() {
        for status in HypothesisStatus::ALL {
            assert_eq!(status.label().parse::<HypothesisStatus>().unwrap(), status);
        }
    }

    #[test]
    fn hypothesis_status_accepts_compact_partial_label() {
        assert_eq!(
            "PartiallyValidated".parse::<HypothesisStatus>().unwrap(),
            HypothesisStatus::PartiallyValidated
        );
    }

    #[test]
    fn in_progress_is_display_only() {
        assert_eq!(HypothesisStatus::PartiallyValidated.display_alias(), "In Progress");
        assert_eq!(HypothesisStatus::Validated.display_alias(), "Validated");
        assert!(matches!(
            "In Progress".parse::<HypothesisStatus>(),
            Err(ModelError::InvalidHypothesisStatus(_))
        ));
    }

    #[test]
    fn hypothesis_status_rejects_unknown() {
        let err = "validated!".parse::<HypothesisStatus>().unwrap_err();
        assert_eq!(err, ModelError::InvalidHypothesisStatus("validated!".to_string()));
    }

    #[test]
    fn padded_labels_rejected() {
        assert_eq!(
            " Validated ".parse::<HypothesisStatus>(),
            Err(ModelError::InvalidHypothesisStatus(" Validated ".to_string()))
        );
        assert!("In Discovery\n".parse::<IdeaStatus>().is_err());
        assert!(" Survey".parse::<ExperimentType>().is_err());
    }

    #[test]
    fn resolved_statuses() {
        assert!(HypothesisStatus::Validated.is_resolved());
        assert!(HypothesisStatus::Invalidated.is_resolved());
        assert!(!HypothesisStatus::PartiallyValidated.is_resolved());
        assert!(!HypothesisStatus::Unvalidated.is_resolved());
    }

    #[test]
    fn idea_status_round_trips_through_labels() {
        for status in IdeaStatus::ALL {
            assert_eq!(status.to_string().parse::<IdeaStatus>().unwrap(), status);
        }
        assert!("Shipped".parse::<IdeaStatus>().is_err());
    }

    #[test]
    fn status_serde_uses_labels() {
        let json = serde_json::to_string(&HypothesisStatus::PartiallyValidated).unwrap();
        assert_eq!(json, "\"Partially Validated\"");

        let err = serde_json::from_str::<HypothesisStatus>("\"Unknown\"").unwrap_err();
        assert!(err.to_string().contains("invalid hypothesis status"));
    }

    #[test]
    fn experiment_type_labels() {
        assert_eq!("A/B Test".parse::<ExperimentType>().unwrap(), ExperimentType::AbTest);
        assert!(matches!(
            "Focus Group".parse::<ExperimentType>(),
            Err(ModelError::InvalidExperimentType(_))
        ));
    }
}
