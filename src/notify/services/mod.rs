//! Composition services for outbound notices.

mod composer;

pub use composer::{ComposeError, ComposeResult, NoticeComposer};
