//! Outbound notices for task events.
//!
//! Every mutation of the task board fans out fire-and-forget notices:
//! the assignee hears about a new task, and the supervisor hears about
//! new tasks and board edits. Composition (subject/body templating)
//! lives here; delivery transport is an external collaborator behind
//! the [`ports::Notifier`] contract and its failure never aborts the
//! operation that triggered it. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Composition services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
