//! Validated, normalised delivery address.

use super::RosterDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalised email address used for allow-list checks and delivery.
///
/// Addresses are trimmed and lowercased at construction so that two
/// spellings of the same mailbox compare equal; the original sign-in
/// flow matches the presented address case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated, lowercased email address.
    ///
    /// # Errors
    ///
    /// Returns [`RosterDomainError::EmptyEmailAddress`] when the value
    /// is empty after trimming, or
    /// [`RosterDomainError::InvalidEmailAddress`] when it contains
    /// whitespace or lacks a single `@` with non-empty local and domain
    /// parts.
    pub fn new(value: impl Into<String>) -> Result<Self, RosterDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(RosterDomainError::EmptyEmailAddress);
        }

        if normalized.chars().any(char::is_whitespace) {
            return Err(RosterDomainError::InvalidEmailAddress(raw));
        }

        let mut parts = normalized.split('@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        let has_more_parts = parts.next().is_some();

        if local.is_empty() || domain.is_empty() || has_more_parts {
            return Err(RosterDomainError::InvalidEmailAddress(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
