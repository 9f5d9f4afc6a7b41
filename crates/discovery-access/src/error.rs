//! Error types for access control

/// Errors raised while reading permission data
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// Wire name outside the closed permission set
    #[error("unknown permission: '{0}'")]
    UnknownPermission(String),

    /// Role name that is not a system role
    #[error("unknown system role: '{0}'")]
    UnknownRole(String),
}
