//! Composed notice content.

use serde::{Deserialize, Serialize};

/// Subject and body of a single outbound notice.
///
/// The recipient is deliberately not part of the notice: address
/// resolution belongs to the roster directory, and the same notice
/// content may fan out to several recipients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    subject: String,
    body: String,
}

impl Notice {
    /// Creates a notice from composed parts.
    #[must_use]
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Returns the notice subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the notice body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
