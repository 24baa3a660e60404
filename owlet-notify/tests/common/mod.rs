//! Shared fixtures for the integration tests.

// Each test file compiles as its own crate, so helpers unused by one file
// would warn without this.
#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use owlet_notify::{
    DispatchConfig, Email, Mailer, MailerConfig, MailerError, NotificationService,
};

/// Transport stub that records every email it accepts.
pub struct RecordingMailer {
    pub sent: Arc<Mutex<Vec<Email>>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_email(&self, email: Email) -> Result<(), MailerError> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/// Transport stub that fails the first `failures` calls, then accepts.
pub struct FlakyMailer {
    pub calls: Arc<AtomicU32>,
    pub failures: u32,
}

#[async_trait]
impl Mailer for FlakyMailer {
    async fn send_email(&self, _email: Email) -> Result<(), MailerError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call <= self.failures {
            Err(MailerError::Io(std::io::Error::other("connection reset")))
        } else {
            Ok(())
        }
    }
}

/// Transport stub that rejects every call with a transport-class error.
pub struct FailingMailer {
    pub calls: Arc<AtomicU32>,
}

#[async_trait]
impl Mailer for FailingMailer {
    async fn send_email(&self, _email: Email) -> Result<(), MailerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(MailerError::Io(std::io::Error::other("connection refused")))
    }
}

/// Transport stub that sleeps before accepting.
pub struct SlowMailer {
    pub delay: Duration,
}

#[async_trait]
impl Mailer for SlowMailer {
    async fn send_email(&self, _email: Email) -> Result<(), MailerError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

pub fn test_config() -> MailerConfig {
    MailerConfig {
        from_address: "noreply@owlet.test".to_string(),
        from_name: Some("Owlet".to_string()),
        reply_to: Some("support@owlet.test".to_string()),
        contact_inbox: "inbox@owlet.test".to_string(),
        app_name: "Owlet".to_string(),
        app_url: "https://owlet.test".to_string(),
        ..MailerConfig::default()
    }
}

/// Service backed by a recording transport, plus the record it writes to.
pub fn recording_service() -> (NotificationService, Arc<Mutex<Vec<Email>>>) {
    let sent = Arc::new(Mutex::new(Vec::new()));
    let service = NotificationService::new(
        test_config(),
        Box::new(RecordingMailer { sent: sent.clone() }),
    );
    (service, sent)
}

/// Dispatch settings with millisecond delays so retry tests stay fast.
pub fn fast_dispatch(max_retries: u32) -> DispatchConfig {
    DispatchConfig::new()
        .with_max_retries(max_retries)
        .with_base_delay(Duration::from_millis(10))
        .with_max_delay(Duration::from_millis(50))
}
