//! Adapter implementations of notice delivery.

pub mod memory;

pub use memory::RecordingNotifier;
