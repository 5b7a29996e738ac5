//! Error types for roster domain validation.

use thiserror::Error;

/// Errors returned while constructing roster domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterDomainError {
    /// The member display name is empty after trimming.
    #[error("member name must not be empty")]
    EmptyMemberName,

    /// The email address is empty after trimming.
    #[error("email address must not be empty")]
    EmptyEmailAddress,

    /// The email address is not a plausible delivery address.
    #[error("invalid email address: {0}")]
    InvalidEmailAddress(String),
}
