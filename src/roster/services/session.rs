//! Service layer for allow-list sign-in.

use crate::roster::domain::{EmailAddress, RosterDomainError, Session};
use crate::roster::ports::MemberDirectory;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for sign-in operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionServiceError {
    /// Domain validation of the presented address failed.
    #[error(transparent)]
    Domain(#[from] RosterDomainError),

    /// The presented address is not on the allow-list.
    #[error("email address '{0}' is not registered")]
    UnknownEmail(EmailAddress),
}

/// Result type for sign-in service operations.
pub type SessionServiceResult<T> = Result<T, SessionServiceError>;

/// Allow-list sign-in service.
#[derive(Clone)]
pub struct SessionService<D, C>
where
    D: MemberDirectory,
    C: Clock + Send + Sync,
{
    directory: Arc<D>,
    clock: Arc<C>,
}

impl<D, C> SessionService<D, C>
where
    D: MemberDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new sign-in service.
    #[must_use]
    pub const fn new(directory: Arc<D>, clock: Arc<C>) -> Self {
        Self { directory, clock }
    }

    /// Authenticates a presented email address against the allow-list.
    ///
    /// The address is normalised (trimmed, lowercased) before the
    /// roster lookup, so sign-in is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`SessionServiceError::Domain`] when the presented value
    /// is not a plausible address, or
    /// [`SessionServiceError::UnknownEmail`] when no roster member has
    /// that address.
    pub fn authenticate(&self, email: &str) -> SessionServiceResult<Session> {
        let address = EmailAddress::new(email)?;
        let member = self
            .directory
            .find_by_email(address.as_str())
            .ok_or_else(|| SessionServiceError::UnknownEmail(address))?;
        Ok(Session::new(member, &*self.clock))
    }
}
