use crate::SendError;
use serde::{Deserialize, Serialize};

fn require(value: &str, field: &str) -> Result<(), SendError> {
    if value.is_empty() {
        return Err(SendError::MissingField(field.to_string()));
    }
    Ok(())
}

/// Asks a parent or guardian to approve their child's new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentVerification {
    pub parent_email: String,
    pub student_name: String,
    pub verification_code: String,
}

impl StudentVerification {
    pub fn validate(&self) -> Result<(), SendError> {
        require(&self.parent_email, "parent_email")?;
        require(&self.student_name, "student_name")?;
        if self.verification_code.is_empty() {
            // Name the student so a failed send can be traced to a child
            // account without the recipient address.
            return Err(SendError::MissingField(format!(
                "verification_code (for {})",
                self.student_name
            )));
        }
        Ok(())
    }
}

/// Email ownership check for a newly registered adult account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountVerification {
    pub email: String,
    pub full_name: String,
    pub token: String,
}

impl AccountVerification {
    pub fn validate(&self) -> Result<(), SendError> {
        require(&self.email, "email")?;
        require(&self.full_name, "full_name")?;
        if self.token.is_empty() {
            return Err(SendError::MissingField(format!(
                "token (for {})",
                self.full_name
            )));
        }
        Ok(())
    }
}

/// Invites an educator to join an organization as a teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherInvitation {
    pub email: String,
    pub full_name: String,
    pub organization: String,
    pub token: String,
}

impl TeacherInvitation {
    pub fn validate(&self) -> Result<(), SendError> {
        require(&self.email, "email")?;
        require(&self.full_name, "full_name")?;
        require(&self.organization, "organization")?;
        if self.token.is_empty() {
            return Err(SendError::MissingField(format!(
                "token (for {})",
                self.full_name
            )));
        }
        Ok(())
    }
}

/// Password reset link for a user who forgot their password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordReset {
    pub email: String,
    pub full_name: String,
    pub token: String,
}

impl PasswordReset {
    pub fn validate(&self) -> Result<(), SendError> {
        require(&self.email, "email")?;
        require(&self.full_name, "full_name")?;
        if self.token.is_empty() {
            return Err(SendError::MissingField(format!(
                "token (for {})",
                self.full_name
            )));
        }
        Ok(())
    }
}

/// Security confirmation after a successful password change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordUpdated {
    pub email: String,
    pub full_name: String,
}

impl PasswordUpdated {
    pub fn validate(&self) -> Result<(), SendError> {
        require(&self.email, "email")?;
        require(&self.full_name, "full_name")
    }
}

/// Contact form submission, forwarded to the platform's contact inbox.
///
/// `email` is the submitter's address; it goes into the rendered body, not
/// the envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    pub email: String,
    pub name: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), SendError> {
        require(&self.email, "email")?;
        require(&self.name, "name")?;
        require(&self.subject, "subject")?;
        require(&self.message, "message")
    }
}

/// One queued notification, ready for
/// [`NotificationService::dispatch`](crate::NotificationService::dispatch).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    StudentVerification(StudentVerification),
    AccountVerification(AccountVerification),
    TeacherInvitation(TeacherInvitation),
    PasswordReset(PasswordReset),
    PasswordUpdated(PasswordUpdated),
    ContactForm(ContactForm),
}

impl Notification {
    /// Stable name used in logs and progress reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::StudentVerification(_) => "student_verification",
            Notification::AccountVerification(_) => "account_verification",
            Notification::TeacherInvitation(_) => "teacher_invitation",
            Notification::PasswordReset(_) => "password_reset",
            Notification::PasswordUpdated(_) => "password_updated",
            Notification::ContactForm(_) => "contact_form",
        }
    }

    pub fn validate(&self) -> Result<(), SendError> {
        match self {
            Notification::StudentVerification(p) => p.validate(),
            Notification::AccountVerification(p) => p.validate(),
            Notification::TeacherInvitation(p) => p.validate(),
            Notification::PasswordReset(p) => p.validate(),
            Notification::PasswordUpdated(p) => p.validate(),
            Notification::ContactForm(p) => p.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_verification_validate() {
        let payload = StudentVerification {
            parent_email: "parent@example.com".to_string(),
            student_name: "Avery".to_string(),
            verification_code: "483921".to_string(),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_student_verification_missing_code_names_student() {
        let payload = StudentVerification {
            parent_email: "parent@example.com".to_string(),
            student_name: "Avery".to_string(),
            verification_code: String::new(),
        };

        assert_eq!(
            payload.validate(),
            Err(SendError::MissingField(
                "verification_code (for Avery)".to_string()
            ))
        );
    }

    #[test]
    fn test_student_verification_missing_parent_email() {
        let payload = StudentVerification {
            parent_email: String::new(),
            student_name: "Avery".to_string(),
            verification_code: "483921".to_string(),
        };

        assert_eq!(
            payload.validate(),
            Err(SendError::MissingField("parent_email".to_string()))
        );
    }

    #[test]
    fn test_teacher_invitation_checks_organization() {
        let payload = TeacherInvitation {
            email: "sam@example.com".to_string(),
            full_name: "Sam Rivera".to_string(),
            organization: String::new(),
            token: "tok".to_string(),
        };

        assert_eq!(
            payload.validate(),
            Err(SendError::MissingField("organization".to_string()))
        );
    }

    #[test]
    fn test_contact_form_checks_all_fields() {
        let payload = ContactForm {
            email: "casey@example.com".to_string(),
            name: "Casey".to_string(),
            subject: "Feedback".to_string(),
            message: String::new(),
        };

        assert_eq!(
            payload.validate(),
            Err(SendError::MissingField("message".to_string()))
        );
    }

    #[test]
    fn test_notification_kind_names() {
        let notification = Notification::PasswordReset(PasswordReset {
            email: "jordan@example.com".to_string(),
            full_name: "Jordan Lee".to_string(),
            token: "tok".to_string(),
        });

        assert_eq!(notification.kind(), "password_reset");
    }

    #[test]
    fn test_notification_validate_routes_to_payload() {
        let notification = Notification::PasswordUpdated(PasswordUpdated {
            email: String::new(),
            full_name: "Jordan Lee".to_string(),
        });

        assert_eq!(
            notification.validate(),
            Err(SendError::MissingField("email".to_string()))
        );
    }
}
