//! Adapter implementations of roster ports.

pub mod memory;

pub use memory::{DirectoryConfigError, StaticDirectory};
