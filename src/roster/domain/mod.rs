//! Domain model for the known-identity roster.
//!
//! Roster values are validated at construction; a [`Member`] always
//! carries a non-empty display name and a normalised delivery address.
//! Infrastructure concerns are kept outside the domain boundary.

mod email;
mod error;
mod member;
mod session;

pub use email::EmailAddress;
pub use error::RosterDomainError;
pub use member::{Member, MemberName};
pub use session::{Session, SessionId};
