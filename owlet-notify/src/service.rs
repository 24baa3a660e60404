use owlet_mailer::email_types::{
    AccountVerificationEmail, ContactFormEmail, PasswordResetEmail, PasswordUpdatedEmail,
    StudentVerificationEmail, TeacherInvitationEmail,
};
use owlet_mailer::templates::TemplateContext;
use owlet_mailer::{Email, Mailer, MailerConfig, MailerError};

use crate::notification::{
    AccountVerification, ContactForm, Notification, PasswordReset, PasswordUpdated,
    StudentVerification, TeacherInvitation,
};
use crate::retry::send_with_retry;
use crate::{DispatchConfig, Dispatcher, EmailResult};

fn known_recipient(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Turns domain notifications into rendered emails and hands them to the
/// [`Dispatcher`].
///
/// The service owns the platform's sender identity: from, reply-to and the
/// contact inbox all come from [`MailerConfig`], never from the notification
/// payload. Dispatch never returns `Err`; every path folds into an
/// [`EmailResult`].
pub struct NotificationService {
    config: MailerConfig,
    dispatcher: Dispatcher,
}

impl NotificationService {
    pub fn new(config: MailerConfig, transport: Box<dyn Mailer>) -> Self {
        Self {
            config,
            dispatcher: Dispatcher::new(transport, DispatchConfig::default()),
        }
    }

    pub fn with_dispatch_config(mut self, dispatch: DispatchConfig) -> Self {
        self.dispatcher = self.dispatcher.with_config(dispatch);
        self
    }

    /// Builds a service from environment variables, including the transport.
    pub fn from_env() -> Result<Self, MailerError> {
        let config = MailerConfig::from_env()?;
        let transport = config.build_transport()?;
        Ok(Self::new(config, transport))
    }

    pub fn config(&self) -> &MailerConfig {
        &self.config
    }

    pub fn dispatch_config(&self) -> &DispatchConfig {
        self.dispatcher.config()
    }

    fn context(&self) -> TemplateContext {
        TemplateContext {
            app_name: self.config.app_name.clone(),
            app_url: self.config.app_url.clone(),
        }
    }

    /// Envelope recipient for a notification. Contact form submissions go to
    /// the configured inbox, not to the submitter.
    fn recipient_of<'a>(&'a self, notification: &'a Notification) -> &'a str {
        match notification {
            Notification::StudentVerification(p) => &p.parent_email,
            Notification::AccountVerification(p) => &p.email,
            Notification::TeacherInvitation(p) => &p.email,
            Notification::PasswordReset(p) => &p.email,
            Notification::PasswordUpdated(p) => &p.email,
            Notification::ContactForm(_) => &self.config.contact_inbox,
        }
    }

    fn build_email(&self, notification: &Notification) -> Result<Email, MailerError> {
        let from = self.config.get_from_address();
        let reply_to = self.config.reply_to.as_deref();
        let context = self.context();

        match notification {
            Notification::StudentVerification(p) => StudentVerificationEmail::build(
                &from,
                reply_to,
                &p.parent_email,
                &p.student_name,
                &p.verification_code,
                &context,
            ),
            Notification::AccountVerification(p) => AccountVerificationEmail::build(
                &from, reply_to, &p.email, &p.full_name, &p.token, &context,
            ),
            Notification::TeacherInvitation(p) => TeacherInvitationEmail::build(
                &from,
                reply_to,
                &p.email,
                &p.full_name,
                &p.organization,
                &p.token,
                &context,
            ),
            Notification::PasswordReset(p) => PasswordResetEmail::build(
                &from, reply_to, &p.email, &p.full_name, &p.token, &context,
            ),
            Notification::PasswordUpdated(p) => {
                PasswordUpdatedEmail::build(&from, reply_to, &p.email, &p.full_name, &context)
            }
            Notification::ContactForm(p) => ContactFormEmail::build(
                &from,
                reply_to,
                &self.config.contact_inbox,
                &p.name,
                &p.email,
                &p.subject,
                &p.message,
                &context,
            ),
        }
    }

    /// Sends one notification under the service's dispatch settings.
    pub async fn dispatch(&self, notification: &Notification) -> EmailResult {
        self.dispatch_with_config(notification, self.dispatcher.config())
            .await
    }

    /// Sends one notification under a per-call config override.
    ///
    /// Payload validation and template rendering happen before the transport
    /// is touched; either failing produces a result with zero transport
    /// attempts behind it.
    pub async fn dispatch_with_config(
        &self,
        notification: &Notification,
        config: &DispatchConfig,
    ) -> EmailResult {
        if let Err(e) = notification.validate() {
            tracing::warn!(
                kind = notification.kind(),
                error = %e,
                "rejected notification before send"
            );
            return EmailResult::failure(known_recipient(self.recipient_of(notification)), e);
        }

        let email = match self.build_email(notification) {
            Ok(email) => email,
            Err(e) => {
                tracing::error!(
                    kind = notification.kind(),
                    error = %e,
                    "failed to build notification email"
                );
                return EmailResult::failure(
                    known_recipient(self.recipient_of(notification)),
                    e.into(),
                );
            }
        };

        tracing::info!(
            kind = notification.kind(),
            recipient = %email.to,
            "dispatching notification"
        );
        self.dispatcher.send_with_config(email, config).await
    }

    /// Sends one notification, retrying transport-class failures per
    /// `config`. Validation failures never consume the retry budget.
    pub async fn dispatch_with_retry(
        &self,
        notification: &Notification,
        config: &DispatchConfig,
    ) -> EmailResult {
        send_with_retry(config, || self.dispatch_with_config(notification, config)).await
    }

    pub async fn send_student_verification(&self, payload: StudentVerification) -> EmailResult {
        self.dispatch(&Notification::StudentVerification(payload))
            .await
    }

    pub async fn send_account_verification(&self, payload: AccountVerification) -> EmailResult {
        self.dispatch(&Notification::AccountVerification(payload))
            .await
    }

    pub async fn send_teacher_invitation(&self, payload: TeacherInvitation) -> EmailResult {
        self.dispatch(&Notification::TeacherInvitation(payload))
            .await
    }

    pub async fn send_password_reset(&self, payload: PasswordReset) -> EmailResult {
        self.dispatch(&Notification::PasswordReset(payload)).await
    }

    pub async fn send_password_updated(&self, payload: PasswordUpdated) -> EmailResult {
        self.dispatch(&Notification::PasswordUpdated(payload)).await
    }

    pub async fn send_contact_form(&self, payload: ContactForm) -> EmailResult {
        self.dispatch(&Notification::ContactForm(payload)).await
    }
}
