//! In-memory notice capture.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::notify::domain::Notice;
use crate::notify::ports::{Notifier, NotifierError, NotifierResult};
use crate::roster::domain::EmailAddress;

/// Thread-safe notifier that records every notice instead of sending.
///
/// Used by service tests to assert on fan-out, and by deployments that
/// surface notices in-process rather than over a transport.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<RwLock<Vec<(EmailAddress, Notice)>>>,
}

impl RecordingNotifier {
    /// Creates an empty recording notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every delivered notice in send order.
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError::Delivery`] when the capture lock is
    /// poisoned.
    pub fn sent(&self) -> NotifierResult<Vec<(EmailAddress, Notice)>> {
        let sent = self
            .sent
            .read()
            .map_err(|err| NotifierError::delivery(std::io::Error::other(err.to_string())))?;
        Ok(sent.clone())
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, recipient: &EmailAddress, notice: &Notice) -> NotifierResult<()> {
        let mut sent = self
            .sent
            .write()
            .map_err(|err| NotifierError::delivery(std::io::Error::other(err.to_string())))?;
        sent.push((recipient.clone(), notice.clone()));
        Ok(())
    }
}
