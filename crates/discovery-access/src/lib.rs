//! Discovery Access
//!
//! Role-based permissions for the discovery tracker.
//!
//! # Core Concepts
//!
//! - [`Permission`]: One `module:action` grant from a closed list
//! - [`SystemRole`]: The four predefined roles and their fixed grants
//! - [`CustomRole`]: A team-defined role with an arbitrary permission list
//! - [`PermissionSet`]: Ordered set with `has` / `has_any` / `has_all`
//! - [`effective_permissions`]: Union over a member's roles
//!
//! # Example
//!
//! ```rust
//! use discovery_access::{effective_permissions, CustomRole, Permission, Role, SystemRole};
//!
//! let researcher = CustomRole::new("Researcher").with_permission(Permission::ValidationDefineHypotheses);
//! let roles: Vec<&dyn Role> = vec![&SystemRole::Viewer, &researcher];
//!
//! let granted = effective_permissions(roles);
//! assert!(granted.has_all(&[Permission::IdeasView, Permission::ValidationDefineHypotheses]));
//! assert!(!granted.has(Permission::IdeasDelete));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod permission;
mod role;
mod set;

// Re-exports
pub use error::AccessError;
pub use permission::Permission;
pub use role::{CustomRole, Role, SystemRole};
pub use set::{effective_permissions, PermissionSet};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for permission checks
    pub use crate::{
        effective_permissions, AccessError, CustomRole, Permission, PermissionSet, Role, SystemRole,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Permission>();
        assert_send_sync::<PermissionSet>();
        assert_send_sync::<SystemRole>();
        assert_send_sync::<CustomRole>();
    }

    #[test]
    fn membership_union() {
        let scorer = CustomRole::new("Scorer").with_permission(Permission::PrioritizationAssignScores);
        let granted = effective_permissions([&SystemRole::Contributor as &dyn Role, &scorer]);

        assert!(granted.has(Permission::PrioritizationAssignScores));
        assert!(granted.has(Permission::ValidationRecordResults));
        assert!(!granted.has(Permission::TeamManage));
    }
}
