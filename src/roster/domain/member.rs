//! Roster member identity types.

use super::{EmailAddress, RosterDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated member display name.
///
/// Display names are human-facing labels (any script) used as the
/// assignee key in task records and as the directory lookup key. Only
/// surrounding whitespace is stripped; interior spacing and case are
/// preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberName(String);

impl MemberName {
    /// Creates a validated member name.
    ///
    /// # Errors
    ///
    /// Returns [`RosterDomainError::EmptyMemberName`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, RosterDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(RosterDomainError::EmptyMemberName);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the member name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MemberName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A known identity: display name paired with its delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    name: MemberName,
    email: EmailAddress,
}

impl Member {
    /// Creates a member from validated parts.
    #[must_use]
    pub const fn new(name: MemberName, email: EmailAddress) -> Self {
        Self { name, email }
    }

    /// Creates a member from raw display name and address strings.
    ///
    /// # Errors
    ///
    /// Returns [`RosterDomainError`] when either part fails validation.
    pub fn from_parts(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, RosterDomainError> {
        Ok(Self::new(MemberName::new(name)?, EmailAddress::new(email)?))
    }

    /// Returns the member display name.
    #[must_use]
    pub const fn name(&self) -> &MemberName {
        &self.name
    }

    /// Returns the member delivery address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
