//! Discovery Model
//!
//! Read-only record types supplied by the external idea store.
//!
//! # Core Concepts
//!
//! - [`IdeaRecord`]: An idea with its optional RICE inputs and stored score
//! - [`HypothesisRecord`]: A typed hypothesis attached to an idea
//! - [`HypothesisRow`]: The raw store shape, with a free-form status label
//! - [`HypothesisStatus`] / [`IdeaStatus`]: Closed status enumerations
//! - [`ScoreDefaults`]: Boundary defaults for absent score fields
//! - [`Snapshot`]: A JSON-loadable bundle of ideas and hypotheses
//!
//! # Example
//!
//! ```rust
//! use discovery_model::{HypothesisRow, HypothesisStatus, IdeaId, HypothesisId};
//!
//! let row = HypothesisRow::new(HypothesisId(1), Some(IdeaId(7)), "Partially Validated");
//! let record = row.parse().unwrap();
//! assert_eq!(record.status, HypothesisStatus::PartiallyValidated);
//! assert_eq!(record.status.display_alias(), "In Progress");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod defaults;
mod error;
mod hypothesis;
mod idea;
mod ids;
mod snapshot;
mod status;

// Re-exports
pub use defaults::ScoreDefaults;
pub use error::ModelError;
pub use hypothesis::{HypothesisRecord, HypothesisRow};
pub use idea::IdeaRecord;
pub use ids::{HypothesisId, IdeaId};
pub use snapshot::Snapshot;
pub use status::{ExperimentType, HypothesisStatus, IdeaStatus};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with discovery records
    pub use crate::{
        HypothesisId, HypothesisRecord, HypothesisRow, HypothesisStatus, IdeaId, IdeaRecord,
        IdeaStatus, ModelError, ScoreDefaults, Snapshot,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
