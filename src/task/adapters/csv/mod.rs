//! Flat-file CSV adapter for the task row table.
//!
//! The table lives in a single CSV file inside a capability-scoped
//! directory handle; the adapter can only touch the directory it was
//! handed. Row models and their domain conversions live in
//! [`models`], the repository implementation in [`repository`].

mod models;
mod repository;

pub use repository::CsvTaskStore;
