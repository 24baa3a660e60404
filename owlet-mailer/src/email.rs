use crate::MailerError;
use serde::{Deserialize, Serialize};

/// A fully constructed message, ready to hand to a [`Mailer`](crate::Mailer).
///
/// The platform addresses every message to exactly one recipient; anything
/// that fans out to many people produces one `Email` per recipient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Email {
    pub to: String,
    pub from: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html_body: String,
    pub text_body: Option<String>,
}

impl Email {
    pub fn builder() -> EmailBuilder {
        EmailBuilder::default()
    }

    pub fn validate(&self) -> Result<(), MailerError> {
        if self.to.is_empty() {
            return Err(MailerError::Builder("Recipient is required".to_string()));
        }

        if self.from.is_empty() {
            return Err(MailerError::Builder("From address is required".to_string()));
        }

        if self.subject.is_empty() {
            return Err(MailerError::Builder("Subject is required".to_string()));
        }

        if self.html_body.is_empty() {
            return Err(MailerError::Builder("HTML body is required".to_string()));
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct EmailBuilder {
    to: Option<String>,
    from: Option<String>,
    reply_to: Option<String>,
    subject: Option<String>,
    html_body: Option<String>,
    text_body: Option<String>,
}

impl EmailBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to<S: Into<String>>(mut self, email: S) -> Self {
        self.to = Some(email.into());
        self
    }

    pub fn from<S: Into<String>>(mut self, email: S) -> Self {
        self.from = Some(email.into());
        self
    }

    pub fn reply_to<S: Into<String>>(mut self, email: S) -> Self {
        self.reply_to = Some(email.into());
        self
    }

    pub fn subject<S: Into<String>>(mut self, subject: S) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn html_body<S: Into<String>>(mut self, html: S) -> Self {
        self.html_body = Some(html.into());
        self
    }

    pub fn text_body<S: Into<String>>(mut self, text: S) -> Self {
        self.text_body = Some(text.into());
        self
    }

    pub fn build(self) -> Result<Email, MailerError> {
        let email = Email {
            to: self
                .to
                .ok_or_else(|| MailerError::Builder("Recipient is required".to_string()))?,
            from: self
                .from
                .ok_or_else(|| MailerError::Builder("From address is required".to_string()))?,
            reply_to: self.reply_to,
            subject: self
                .subject
                .ok_or_else(|| MailerError::Builder("Subject is required".to_string()))?,
            html_body: self
                .html_body
                .ok_or_else(|| MailerError::Builder("HTML body is required".to_string()))?,
            text_body: self.text_body,
        };

        email.validate()?;
        Ok(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_builder() {
        let email = Email::builder()
            .from("sender@example.com")
            .to("recipient@example.com")
            .subject("Test Subject")
            .html_body("<p>Test content</p>")
            .text_body("Test content")
            .build()
            .unwrap();

        assert_eq!(email.from, "sender@example.com");
        assert_eq!(email.to, "recipient@example.com");
        assert_eq!(email.subject, "Test Subject");
        assert_eq!(email.html_body, "<p>Test content</p>");
        assert_eq!(email.text_body, Some("Test content".to_string()));
        assert_eq!(email.reply_to, None);
    }

    #[test]
    fn test_email_builder_reply_to() {
        let email = Email::builder()
            .from("sender@example.com")
            .to("recipient@example.com")
            .reply_to("support@example.com")
            .subject("Test Subject")
            .html_body("<p>Test content</p>")
            .build()
            .unwrap();

        assert_eq!(email.reply_to, Some("support@example.com".to_string()));
    }

    #[test]
    fn test_email_requires_recipient() {
        let result = Email::builder()
            .from("sender@example.com")
            .subject("Test")
            .html_body("<p>Test</p>")
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_email_requires_html_body() {
        let result = Email::builder()
            .from("sender@example.com")
            .to("recipient@example.com")
            .subject("Test")
            .build();

        assert!(result.is_err());
    }
}
