//! Mawid: task-board tracking core.
//!
//! This crate provides the core of a small task-tracking board: a
//! fixed roster of people sign in by email, register tasks with
//! derived due dates, and edit a status column whose completion
//! stamps are reconciled in bulk. Persistence, notice delivery, and
//! the clock are external collaborators behind ports.
//!
//! # Architecture
//!
//! Mawid follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (flat file, in-memory)
//!
//! # Modules
//!
//! - [`roster`]: Known identities, allow-list sign-in, and sessions
//! - [`task`]: Task records, registration, and status reconciliation
//! - [`notify`]: Notice composition and fire-and-forget delivery

pub mod notify;
pub mod roster;
pub mod task;
