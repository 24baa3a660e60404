use crate::validation::validate_recipient;
use crate::{DispatchConfig, EmailResult, SendError};
use owlet_mailer::{Email, Mailer};

/// Safe sender around the injected transport.
///
/// Every call resolves with an [`EmailResult`]: recipient validation,
/// transport failures and timeouts are all folded in, so the send path
/// never surfaces an `Err` to a request handler. One call makes at most
/// one transport attempt; retry loops live above this layer.
pub struct Dispatcher {
    transport: Box<dyn Mailer>,
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(transport: Box<dyn Mailer>, config: DispatchConfig) -> Self {
        Self { transport, config }
    }

    /// Replaces the dispatcher's own config, keeping the transport.
    pub fn with_config(mut self, config: DispatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Sends one email under the dispatcher's own config.
    pub async fn send(&self, email: Email) -> EmailResult {
        self.send_with_config(email, &self.config).await
    }

    /// Sends one email under a per-call config override.
    ///
    /// The recipient is shape-checked first; an invalid address never
    /// reaches the transport. The transport call races the configured
    /// timeout, and a lapse counts as a retryable failure.
    pub async fn send_with_config(&self, email: Email, config: &DispatchConfig) -> EmailResult {
        let recipient = email.to.clone();

        if let Err(e) = validate_recipient(&recipient) {
            tracing::warn!(recipient = %recipient, error = %e, "rejected email before send");
            let known = (!recipient.is_empty()).then_some(recipient);
            return EmailResult::failure(known, e);
        }

        match tokio::time::timeout(config.timeout, self.transport.send_email(email)).await {
            Ok(Ok(())) => {
                tracing::debug!(recipient = %recipient, "email accepted by transport");
                EmailResult::success(recipient)
            }
            Ok(Err(e)) => {
                tracing::warn!(recipient = %recipient, error = %e, "transport rejected email");
                EmailResult::failure(Some(recipient), e.into())
            }
            Err(_) => {
                tracing::warn!(
                    recipient = %recipient,
                    timeout_ms = config.timeout.as_millis() as u64,
                    "email send timed out"
                );
                EmailResult::failure(Some(recipient), SendError::Timeout)
            }
        }
    }
}
