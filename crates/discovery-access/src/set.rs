//! Ordered permission sets

use crate::error::AccessError;
use crate::permission::Permission;
use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An ordered, duplicate-free set of permissions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
    /// Create an empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse wire names
    ///
    /// # Errors
    /// [`AccessError::UnknownPermission`] for the first unrecognized name
    pub fn from_names<I, S>(names: I) -> Result<Self, AccessError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().map(|name| name.as_ref().parse()).collect()
    }

    /// Add a permission, returning whether it was new
    pub fn insert(&mut self, permission: Permission) -> bool {
        self.0.insert(permission)
    }

    /// Whether the set grants `permission`
    #[inline]
    #[must_use]
    pub fn has(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    /// Whether the set grants at least one of `required`
    ///
    /// An empty `required` list is never satisfied.
    #[must_use]
    pub fn has_any(&self, required: &[Permission]) -> bool {
        required.iter().any(|permission| self.has(*permission))
    }

    /// Whether the set grants every one of `required`
    ///
    /// An empty `required` list is always satisfied.
    #[must_use]
    pub fn has_all(&self, required: &[Permission]) -> bool {
        required.iter().all(|permission| self.has(*permission))
    }

    /// Number of permissions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing is granted
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Permissions in declaration order
    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Permission> for PermissionSet {
    fn extend<I: IntoIterator<Item = Permission>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

/// Union of the permissions of every membership's role
///
/// Membership order does not matter and duplicates collapse.
pub fn effective_permissions<'a, R, I>(memberships: I) -> PermissionSet
where
    R: Role + ?Sized + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut effective = PermissionSet::new();
    let mut roles = 0usize;
    for role in memberships {
        effective.extend(role.permissions().iter());
        roles += 1;
    }
    tracing::trace!(roles, granted = effective.len(), "resolved effective permissions");
    effective
}
