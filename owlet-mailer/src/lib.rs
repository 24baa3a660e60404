pub mod config;
pub mod email;
pub mod email_types;
pub mod error;
pub mod mailer;
pub mod templates;
pub mod transports;

pub use config::{MailerConfig, TransportConfig};
pub use email::{Email, EmailBuilder};
pub use email_types::{
    AccountVerificationEmail, ContactFormEmail, PasswordResetEmail, PasswordUpdatedEmail,
    StudentVerificationEmail, TeacherInvitationEmail,
};
pub use error::MailerError;
pub use mailer::Mailer;
pub use templates::{TemplateContext, html_to_text};
pub use transports::{FileTransport, SmtpTransport};

pub mod prelude {
    pub use crate::{
        AccountVerificationEmail, ContactFormEmail, Email, EmailBuilder, FileTransport, Mailer,
        MailerConfig, MailerError, PasswordResetEmail, PasswordUpdatedEmail, SmtpTransport,
        StudentVerificationEmail, TeacherInvitationEmail, TemplateContext,
    };
}
