//! Known-identity roster and login sessions.
//!
//! The roster is the fixed set of people who may sign in, be assigned
//! tasks, and receive notices. It maps member display names to delivery
//! addresses and designates one member as the supervisor who receives
//! escalation alerts. Authentication is an allow-list lookup that mints
//! a request-scoped [`domain::Session`] carrying the authenticated
//! member. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
