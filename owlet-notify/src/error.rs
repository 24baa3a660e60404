use owlet_mailer::MailerError;
use thiserror::Error;

/// Failure classes for a notification send.
///
/// The class is assigned where the failure is detected; callers branch on
/// the variant (or [`SendError::is_retryable`]), never on message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// A required payload field was empty.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// The recipient address failed the shape check.
    #[error("Invalid email format")]
    InvalidRecipient,

    /// Rendering or assembling the message failed. Deterministic, so a
    /// retry would fail the same way.
    #[error("Email message error: {0}")]
    Message(String),

    /// The transport did not answer within the configured timeout.
    #[error("Email timeout")]
    Timeout,

    /// The transport reported a delivery failure.
    #[error("Email transport error: {0}")]
    Transport(String),
}

impl SendError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SendError::MissingField(_) | SendError::InvalidRecipient
        )
    }

    /// Only transient failures are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SendError::Timeout | SendError::Transport(_))
    }
}

impl From<MailerError> for SendError {
    fn from(err: MailerError) -> Self {
        match &err {
            // Message assembly failures are deterministic.
            MailerError::Address(_)
            | MailerError::Builder(_)
            | MailerError::Template(_)
            | MailerError::Message(_) => SendError::Message(err.to_string()),
            _ => SendError::Transport(err.to_string()),
        }
    }
}
