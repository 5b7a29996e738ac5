//! Task records, registration, and status reconciliation.
//!
//! This module owns the task board's row table: registering a new task
//! record with derived date fields, and reconciling the bulk status
//! edits the tracking grid submits. Registration computes the due date
//! by calendar-day addition from the injected clock and appends one
//! immutable row; reconciliation walks an edited snapshot and derives
//! the completion stamp from each row's status. The module follows
//! hexagonal architecture:
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
