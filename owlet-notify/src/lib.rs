//! # Owlet Notify
//!
//! Notification dispatch for the Owlet learning platform. Owlet Notify turns
//! domain events, such as a student signup waiting on a parent's approval,
//! into rendered transactional emails and delivers them through an injected
//! transport. The send path never returns `Err`: every outcome, success or
//! failure, folds into an [`EmailResult`] a request handler can log and move
//! on from.
//!
//! What a send gets on the way out:
//! - Payload and recipient validation before the transport is touched
//! - A hard timeout around every transport call
//! - Optional retries with exponential backoff and jitter
//! - Rate-limited bulk dispatch with per-batch progress reporting
//!
//! ## Example
//!
//! ```rust,no_run
//! use owlet_notify::{NotificationService, StudentVerification};
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = NotificationService::from_env().unwrap();
//!
//!     let result = service
//!         .send_student_verification(StudentVerification {
//!             parent_email: "parent@example.com".to_string(),
//!             student_name: "Avery".to_string(),
//!             verification_code: "483921".to_string(),
//!         })
//!         .await;
//!
//!     if !result.is_success() {
//!         eprintln!("send failed after {} attempts", result.attempts);
//!     }
//! }
//! ```

pub mod bulk;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod notification;
pub mod outcome;
pub mod retry;
pub mod service;
pub mod validation;

pub use bulk::{BulkOptions, BulkProgress, INTER_BATCH_DELAY};
pub use config::DispatchConfig;
pub use dispatcher::Dispatcher;
pub use error::SendError;
pub use notification::{
    AccountVerification, ContactForm, Notification, PasswordReset, PasswordUpdated,
    StudentVerification, TeacherInvitation,
};
pub use outcome::EmailResult;
pub use retry::send_with_retry;
pub use service::NotificationService;
pub use validation::validate_recipient;

pub use owlet_mailer::{
    Email, EmailBuilder, FileTransport, Mailer, MailerConfig, MailerError, SmtpTransport,
    TransportConfig,
};

pub mod prelude {
    pub use crate::{
        AccountVerification, BulkOptions, BulkProgress, ContactForm, DispatchConfig, Dispatcher,
        Email, EmailResult, Mailer, MailerConfig, MailerError, Notification, NotificationService,
        PasswordReset, PasswordUpdated, SendError, StudentVerification, TeacherInvitation,
    };
}
