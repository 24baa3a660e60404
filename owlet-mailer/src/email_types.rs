use crate::templates::{
    AccountVerificationTemplate, ContactFormTemplate, PasswordResetTemplate,
    PasswordUpdatedTemplate, StudentVerificationTemplate, TeacherInvitationTemplate,
    TemplateContext, html_to_text,
};
use crate::{Email, MailerError};
use askama::Template;

fn assemble(
    from: &str,
    reply_to: Option<&str>,
    to: &str,
    subject: String,
    html: String,
) -> Result<Email, MailerError> {
    let text = html_to_text(&html);

    let mut builder = Email::builder()
        .from(from)
        .to(to)
        .subject(subject)
        .html_body(html)
        .text_body(text);

    if let Some(reply_to) = reply_to {
        builder = builder.reply_to(reply_to);
    }

    builder.build()
}

/// Parent-facing approval email carrying a child's verification code.
pub struct StudentVerificationEmail;

impl StudentVerificationEmail {
    pub fn build(
        from: &str,
        reply_to: Option<&str>,
        to: &str,
        student_name: &str,
        verification_code: &str,
        context: &TemplateContext,
    ) -> Result<Email, MailerError> {
        let html = StudentVerificationTemplate {
            app_name: context.app_name.clone(),
            student_name: student_name.to_string(),
            verification_code: verification_code.to_string(),
        }
        .render()?;

        assemble(
            from,
            reply_to,
            to,
            format!("Verify {student_name}'s Account"),
            html,
        )
    }
}

pub struct AccountVerificationEmail;

impl AccountVerificationEmail {
    pub fn build(
        from: &str,
        reply_to: Option<&str>,
        to: &str,
        full_name: &str,
        token: &str,
        context: &TemplateContext,
    ) -> Result<Email, MailerError> {
        let verify_link = format!("{}/verify-email?token={}", context.app_url, token);

        let html = AccountVerificationTemplate {
            app_name: context.app_name.clone(),
            full_name: full_name.to_string(),
            verify_link,
        }
        .render()?;

        assemble(from, reply_to, to, "Verify Your Account".to_string(), html)
    }
}

pub struct TeacherInvitationEmail;

impl TeacherInvitationEmail {
    pub fn build(
        from: &str,
        reply_to: Option<&str>,
        to: &str,
        full_name: &str,
        organization: &str,
        token: &str,
        context: &TemplateContext,
    ) -> Result<Email, MailerError> {
        let invite_link = format!(
            "{}/teacher/accept-invitation?token={}",
            context.app_url, token
        );

        let html = TeacherInvitationTemplate {
            app_name: context.app_name.clone(),
            full_name: full_name.to_string(),
            organization: organization.to_string(),
            invite_link,
        }
        .render()?;

        assemble(
            from,
            reply_to,
            to,
            format!("Join {organization} - Teacher Invitation"),
            html,
        )
    }
}

pub struct PasswordResetEmail;

impl PasswordResetEmail {
    pub fn build(
        from: &str,
        reply_to: Option<&str>,
        to: &str,
        full_name: &str,
        token: &str,
        context: &TemplateContext,
    ) -> Result<Email, MailerError> {
        let reset_link = format!("{}/reset-password?token={}", context.app_url, token);

        let html = PasswordResetTemplate {
            app_name: context.app_name.clone(),
            full_name: full_name.to_string(),
            reset_link,
        }
        .render()?;

        assemble(from, reply_to, to, "Reset Your Password".to_string(), html)
    }
}

pub struct PasswordUpdatedEmail;

impl PasswordUpdatedEmail {
    pub fn build(
        from: &str,
        reply_to: Option<&str>,
        to: &str,
        full_name: &str,
        context: &TemplateContext,
    ) -> Result<Email, MailerError> {
        let html = PasswordUpdatedTemplate {
            app_name: context.app_name.clone(),
            full_name: full_name.to_string(),
        }
        .render()?;

        assemble(
            from,
            reply_to,
            to,
            "Password Updated Successfully".to_string(),
            html,
        )
    }
}

/// Staff-facing copy of a contact form submission.
///
/// Goes to the platform's contact inbox; the submitter's address appears in
/// the body so staff can follow up from their own client.
pub struct ContactFormEmail;

impl ContactFormEmail {
    #[allow(clippy::too_many_arguments)]
    pub fn build(
        from: &str,
        reply_to: Option<&str>,
        to: &str,
        sender_name: &str,
        sender_email: &str,
        subject: &str,
        message: &str,
        context: &TemplateContext,
    ) -> Result<Email, MailerError> {
        let html = ContactFormTemplate {
            app_name: context.app_name.clone(),
            sender_name: sender_name.to_string(),
            sender_email: sender_email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
        .render()?;

        assemble(
            from,
            reply_to,
            to,
            format!("[Contact Form] {subject} - from {sender_name}"),
            html,
        )
    }
}
