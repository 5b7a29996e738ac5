//! Directory port over the fixed set of known identities.

use crate::roster::domain::{Member, MemberName};

/// Membership lookup over the fixed identity-to-address mapping.
///
/// The directory is a small, fixed allow-list, so the contract is
/// synchronous and lookups are infallible: a miss is `None`, never an
/// error. Callers that require a hit (the registrar resolving an
/// assignee) turn the miss into their own lookup error.
pub trait MemberDirectory: Send + Sync {
    /// Resolves a member by display name.
    fn lookup(&self, name: &MemberName) -> Option<Member>;

    /// Resolves a member by delivery address, case-insensitively.
    ///
    /// This is the sign-in allow-list check: the presented address is
    /// matched against the roster regardless of case.
    fn find_by_email(&self, email: &str) -> Option<Member>;

    /// Returns the designated supervisor, when one is configured.
    ///
    /// The supervisor receives escalation notices for new tasks and
    /// board edits.
    fn supervisor(&self) -> Option<Member>;

    /// Returns every known member in roster order.
    fn members(&self) -> Vec<Member>;
}
