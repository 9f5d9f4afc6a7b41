//! System and custom roles

use crate::error::AccessError;
use crate::permission::Permission;
use crate::set::PermissionSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Anything that grants a set of permissions
pub trait Role {
    /// Display name
    fn name(&self) -> &str;

    /// Permissions the role grants
    fn permissions(&self) -> PermissionSet;
}

const PRODUCT_MANAGER: &[Permission] = &[
    Permission::TeamView,
    Permission::IdeasView,
    Permission::IdeasCreate,
    Permission::IdeasEdit,
    Permission::InsightsView,
    Permission::InsightsAdd,
    Permission::InsightsEdit,
    Permission::InsightsViewAiSummaries,
    Permission::ValidationView,
    Permission::ValidationDefineHypotheses,
    Permission::ValidationRecordResults,
    Permission::ValidationUpdateStatus,
    Permission::PrioritizationView,
    Permission::PrioritizationAssignScores,
    Permission::PrioritizationViewAiScores,
    Permission::PrioritizationMarkPlanning,
];

const CONTRIBUTOR: &[Permission] = &[
    Permission::TeamView,
    Permission::IdeasView,
    Permission::IdeasCreate,
    Permission::IdeasEdit,
    Permission::InsightsView,
    Permission::InsightsAdd,
    Permission::InsightsEdit,
    Permission::InsightsViewAiSummaries,
    Permission::ValidationView,
    Permission::ValidationRecordResults,
    Permission::PrioritizationView,
    Permission::PrioritizationViewAiScores,
];

const VIEWER: &[Permission] = &[
    Permission::TeamView,
    Permission::IdeasView,
    Permission::InsightsView,
    Permission::ValidationView,
    Permission::PrioritizationView,
];

/// Predefined roles shipped with every team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemRole {
    /// Every permission
    Administrator,
    /// Ideas, validation and prioritization, without team or assistant admin
    ProductManager,
    /// Contributes ideas and validation data
    Contributor,
    /// Read-only
    Viewer,
}

impl SystemRole {
    /// All system roles, most privileged first
    pub const ALL: [Self; 4] = [
        Self::Administrator,
        Self::ProductManager,
        Self::Contributor,
        Self::Viewer,
    ];

    /// Display name
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::ProductManager => "Product Manager",
            Self::Contributor => "Contributor",
            Self::Viewer => "Viewer",
        }
    }

    /// One-line description
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Administrator => "Full system access with all permissions",
            Self::ProductManager => "Can manage ideas, validation, and prioritization",
            Self::Contributor => "Can contribute ideas and validation data",
            Self::Viewer => "Read-only access to all modules",
        }
    }

    /// Fixed permission list
    #[must_use]
    pub fn grants(&self) -> &'static [Permission] {
        match self {
            Self::Administrator => &Permission::ALL,
            Self::ProductManager => PRODUCT_MANAGER,
            Self::Contributor => CONTRIBUTOR,
            Self::Viewer => VIEWER,
        }
    }
}

impl Role for SystemRole {
    fn name(&self) -> &str {
        SystemRole::name(self)
    }

    fn permissions(&self) -> PermissionSet {
        self.grants().iter().copied().collect()
    }
}

impl FromStr for SystemRole {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| AccessError::UnknownRole(s.to_string()))
    }
}

impl fmt::Display for SystemRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A team-defined role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRole {
    /// Display name
    pub name: String,
    /// Granted permissions
    pub permissions: PermissionSet,
}

impl CustomRole {
    /// Create a role with no permissions
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            permissions: PermissionSet::new(),
        }
    }

    /// With an additional permission
    #[must_use]
    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permissions.insert(permission);
        self
    }

    /// Build from stored wire names
    ///
    /// # Errors
    /// [`AccessError::UnknownPermission`] for the first unrecognized name
    pub fn from_names<I, S>(name: impl Into<String>, names: I) -> Result<Self, AccessError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            name: name.into(),
            permissions: PermissionSet::from_names(names)?,
        })
    }
}

impl Role for CustomRole {
    fn name(&self) -> &str {
        &self.name
    }

    fn permissions(&self) -> PermissionSet {
        self.permissions.clone()
    }
}
