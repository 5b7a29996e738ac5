//! Fixed in-memory member directory.

use serde::Deserialize;
use thiserror::Error;

use crate::roster::domain::{Member, MemberName, RosterDomainError};
use crate::roster::ports::MemberDirectory;

/// Fixed, insertion-ordered identity-to-address mapping.
///
/// The roster is small and changes only by redeployment, so the
/// directory holds members in a plain vector and scans on lookup.
/// Insertion order is preserved because the calling UI renders the
/// assignee selector in roster order.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    members: Vec<Member>,
    supervisor: Option<MemberName>,
}

/// Errors returned while loading a directory configuration document.
#[derive(Debug, Error)]
pub enum DirectoryConfigError {
    /// The document is not valid JSON or misses required fields.
    #[error("malformed directory document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A member entry failed domain validation.
    #[error(transparent)]
    Domain(#[from] RosterDomainError),

    /// The configured supervisor is not a roster member.
    #[error("supervisor '{0}' is not a roster member")]
    UnknownSupervisor(String),
}

/// Raw shape of the directory configuration document.
#[derive(Debug, Deserialize)]
struct DirectoryDocument {
    members: Vec<MemberEntry>,
    supervisor: Option<String>,
}

/// Raw member entry prior to domain validation.
#[derive(Debug, Deserialize)]
struct MemberEntry {
    name: String,
    email: String,
}

impl StaticDirectory {
    /// Creates a directory from validated members.
    #[must_use]
    pub fn new(members: impl IntoIterator<Item = Member>) -> Self {
        Self {
            members: members.into_iter().collect(),
            supervisor: None,
        }
    }

    /// Designates the supervisor who receives escalation notices.
    ///
    /// The name is resolved against the roster at lookup time; a name
    /// that never joins the roster yields no supervisor.
    #[must_use]
    pub fn with_supervisor(mut self, name: MemberName) -> Self {
        self.supervisor = Some(name);
        self
    }

    /// Loads a directory from a JSON configuration document.
    ///
    /// The document lists member entries and an optional supervisor
    /// name:
    ///
    /// ```json
    /// {
    ///   "members": [
    ///     { "name": "Adel Alharby", "email": "adel@example.com" }
    ///   ],
    ///   "supervisor": "Adel Alharby"
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryConfigError::Malformed`] when the JSON does
    /// not parse, [`DirectoryConfigError::Domain`] when an entry fails
    /// validation, or [`DirectoryConfigError::UnknownSupervisor`] when
    /// the supervisor name matches no member entry.
    pub fn from_json_str(document: &str) -> Result<Self, DirectoryConfigError> {
        let parsed: DirectoryDocument = serde_json::from_str(document)?;

        let members = parsed
            .members
            .into_iter()
            .map(|entry| Member::from_parts(entry.name, entry.email))
            .collect::<Result<Vec<_>, _>>()?;

        let supervisor = parsed
            .supervisor
            .map(|raw| {
                let name = MemberName::new(raw.clone())?;
                if members.iter().any(|member| *member.name() == name) {
                    Ok(name)
                } else {
                    Err(DirectoryConfigError::UnknownSupervisor(raw))
                }
            })
            .transpose()?;

        Ok(Self {
            members,
            supervisor,
        })
    }
}

impl MemberDirectory for StaticDirectory {
    fn lookup(&self, name: &MemberName) -> Option<Member> {
        self.members
            .iter()
            .find(|member| member.name() == name)
            .cloned()
    }

    fn find_by_email(&self, email: &str) -> Option<Member> {
        let needle = email.trim().to_ascii_lowercase();
        self.members
            .iter()
            .find(|member| member.email().as_str() == needle)
            .cloned()
    }

    fn supervisor(&self) -> Option<Member> {
        self.supervisor.as_ref().and_then(|name| self.lookup(name))
    }

    fn members(&self) -> Vec<Member> {
        self.members.clone()
    }
}
