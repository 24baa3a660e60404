use crate::SendError;
use chrono::{DateTime, Utc};

/// Outcome of one logical send, successful or not.
///
/// Dispatch entry points resolve with one of these instead of propagating
/// errors, so a failed email can never take down the calling request
/// handler.
#[derive(Debug, Clone)]
pub struct EmailResult {
    /// Recipient the send was addressed to, when one was known.
    pub recipient: Option<String>,
    /// Failure class, `None` on success.
    pub error: Option<SendError>,
    /// Attempts consumed, counting the first try.
    pub attempts: u32,
    /// When the outcome was recorded.
    pub timestamp: DateTime<Utc>,
}

impl EmailResult {
    pub fn success(recipient: impl Into<String>) -> Self {
        Self {
            recipient: Some(recipient.into()),
            error: None,
            attempts: 1,
            timestamp: Utc::now(),
        }
    }

    pub fn failure(recipient: Option<String>, error: SendError) -> Self {
        Self {
            recipient,
            error: Some(error),
            attempts: 1,
            timestamp: Utc::now(),
        }
    }

    /// Stamps the number of attempts a retry loop actually consumed.
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
