//! Delivery port for outbound notices.

use crate::notify::domain::Notice;
use crate::roster::domain::EmailAddress;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for notice delivery.
pub type NotifierResult<T> = Result<T, NotifierError>;

/// Fire-and-forget notice delivery contract.
///
/// Callers treat delivery failure as a soft failure: it is logged and
/// the triggering operation still succeeds. Implementations must not
/// block on retries.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers a notice to a single recipient.
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError::Delivery`] when the transport rejects
    /// or fails to send the notice.
    async fn notify(&self, recipient: &EmailAddress, notice: &Notice) -> NotifierResult<()>;
}

/// Errors returned by notifier implementations.
#[derive(Debug, Clone, Error)]
pub enum NotifierError {
    /// The transport failed to deliver the notice.
    #[error("notice delivery failed: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotifierError {
    /// Wraps a transport-level delivery error.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}
