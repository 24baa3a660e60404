use crate::{Email, MailerError};
use async_trait::async_trait;

/// Delivery seam for outbound email.
///
/// A transport is built once (see [`MailerConfig::build_transport`]) and
/// injected wherever mail is sent, so tests can substitute their own
/// implementation.
///
/// [`MailerConfig::build_transport`]: crate::MailerConfig::build_transport
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_email(&self, email: Email) -> Result<(), MailerError>;
}
