use askama::Template;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateContext {
    pub app_name: String,
    pub app_url: String,
}

impl Default for TemplateContext {
    fn default() -> Self {
        Self {
            app_name: "Owlet".to_string(),
            app_url: "http://localhost:3000".to_string(),
        }
    }
}

#[derive(Template)]
#[template(
    source = r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Verify {{ student_name }}'s Account - {{ app_name }}</title>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 20px; background-color: #f4f4f4; }
        .container { max-width: 600px; margin: 0 auto; background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; margin-bottom: 30px; }
        .code { display: inline-block; padding: 16px 32px; background-color: #f8f9fa; border: 2px dashed #007bff; border-radius: 8px; font-family: monospace; font-size: 28px; letter-spacing: 6px; color: #007bff; margin: 20px 0; }
        .footer { margin-top: 30px; padding-top: 20px; border-top: 1px solid #eee; font-size: 12px; color: #666; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{{ app_name }}</h1>
        </div>

        <h2>Verify {{ student_name }}'s Account</h2>

        <p>Hello,</p>

        <p>{{ student_name }} has created a student account on {{ app_name }}. To keep young learners safe, a parent or guardian needs to approve new accounts before they become active.</p>

        <p>Enter this verification code on the approval screen to activate {{ student_name }}'s account:</p>

        <div style="text-align: center;">
            <span class="code">{{ verification_code }}</span>
        </div>

        <p>If you weren't expecting this email, you can safely ignore it and the account will stay inactive.</p>

        <div class="footer">
            <p>This email was sent by {{ app_name }} because a student account listed you as their parent or guardian. If you have any questions, please contact our support team.</p>
        </div>
    </div>
</body>
</html>
"#,
    ext = "html"
)]
pub struct StudentVerificationTemplate {
    pub app_name: String,
    pub student_name: String,
    pub verification_code: String,
}

#[derive(Template)]
#[template(
    source = r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Verify Your Account - {{ app_name }}</title>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 20px; background-color: #f4f4f4; }
        .container { max-width: 600px; margin: 0 auto; background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; margin-bottom: 30px; }
        .button { display: inline-block; padding: 12px 24px; background-color: #28a745; color: white; text-decoration: none; border-radius: 4px; margin: 20px 0; }
        .footer { margin-top: 30px; padding-top: 20px; border-top: 1px solid #eee; font-size: 12px; color: #666; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{{ app_name }}</h1>
        </div>

        <h2>Verify Your Account</h2>

        <p>Hello {{ full_name }},</p>

        <p>Thanks for joining {{ app_name }}! Click the button below to verify your email address and finish setting up your account.</p>

        <div style="text-align: center;">
            <a href="{{ verify_link }}" class="button">Verify Account</a>
        </div>

        <p>Or copy and paste this URL into your browser:</p>
        <p style="word-break: break-all; background: #f8f9fa; padding: 10px; border-radius: 4px; font-family: monospace;">{{ verify_link }}</p>

        <p>If you didn't create an account, you can safely ignore this email.</p>

        <div class="footer">
            <p>This email was sent by {{ app_name }}. If you have any questions, please contact our support team.</p>
        </div>
    </div>
</body>
</html>
"#,
    ext = "html"
)]
pub struct AccountVerificationTemplate {
    pub app_name: String,
    pub full_name: String,
    pub verify_link: String,
}

#[derive(Template)]
#[template(
    source = r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Teacher Invitation - {{ app_name }}</title>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 20px; background-color: #f4f4f4; }
        .container { max-width: 600px; margin: 0 auto; background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; margin-bottom: 30px; }
        .button { display: inline-block; padding: 12px 24px; background-color: #007bff; color: white; text-decoration: none; border-radius: 4px; margin: 20px 0; }
        .footer { margin-top: 30px; padding-top: 20px; border-top: 1px solid #eee; font-size: 12px; color: #666; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{{ app_name }}</h1>
        </div>

        <h2>You're Invited to Join {{ organization }}</h2>

        <p>Hello {{ full_name }},</p>

        <p>{{ organization }} has invited you to join {{ app_name }} as a teacher. You'll be able to create classes, assign courses, and follow your students' progress.</p>

        <div style="text-align: center;">
            <a href="{{ invite_link }}" class="button">Accept Invitation</a>
        </div>

        <p>Or copy and paste this URL into your browser:</p>
        <p style="word-break: break-all; background: #f8f9fa; padding: 10px; border-radius: 4px; font-family: monospace;">{{ invite_link }}</p>

        <p>If you weren't expecting this invitation, you can safely ignore this email.</p>

        <div class="footer">
            <p>This invitation was sent through {{ app_name }} on behalf of {{ organization }}. If you have any questions, please contact our support team.</p>
        </div>
    </div>
</body>
</html>
"#,
    ext = "html"
)]
pub struct TeacherInvitationTemplate {
    pub app_name: String,
    pub full_name: String,
    pub organization: String,
    pub invite_link: String,
}

#[derive(Template)]
#[template(
    source = r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Reset Your Password - {{ app_name }}</title>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 20px; background-color: #f4f4f4; }
        .container { max-width: 600px; margin: 0 auto; background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; margin-bottom: 30px; }
        .button { display: inline-block; padding: 12px 24px; background-color: #dc3545; color: white; text-decoration: none; border-radius: 4px; margin: 20px 0; }
        .footer { margin-top: 30px; padding-top: 20px; border-top: 1px solid #eee; font-size: 12px; color: #666; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{{ app_name }}</h1>
        </div>

        <h2>Reset Your Password</h2>

        <p>Hello {{ full_name }},</p>

        <p>We received a request to reset your password. Click the button below to create a new password:</p>

        <div style="text-align: center;">
            <a href="{{ reset_link }}" class="button">Reset Password</a>
        </div>

        <p>Or copy and paste this URL into your browser:</p>
        <p style="word-break: break-all; background: #f8f9fa; padding: 10px; border-radius: 4px; font-family: monospace;">{{ reset_link }}</p>

        <p>If you didn't request a password reset, you can safely ignore this email. Your password will not be changed.</p>

        <div class="footer">
            <p>For security, this request was made through {{ app_name }}. If you have any concerns, please contact our support team.</p>
        </div>
    </div>
</body>
</html>
"#,
    ext = "html"
)]
pub struct PasswordResetTemplate {
    pub app_name: String,
    pub full_name: String,
    pub reset_link: String,
}

#[derive(Template)]
#[template(
    source = r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Password Updated - {{ app_name }}</title>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 20px; background-color: #f4f4f4; }
        .container { max-width: 600px; margin: 0 auto; background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; margin-bottom: 30px; }
        .alert { background-color: #d4edda; border: 1px solid #c3e6cb; color: #155724; padding: 15px; border-radius: 4px; margin: 20px 0; }
        .footer { margin-top: 30px; padding-top: 20px; border-top: 1px solid #eee; font-size: 12px; color: #666; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{{ app_name }}</h1>
        </div>

        <h2>Password Updated Successfully</h2>

        <p>Hello {{ full_name }},</p>

        <div class="alert">
            <strong>Your password has been updated.</strong>
        </div>

        <p>This is a confirmation that your account password was recently changed. If you made this change, no further action is required.</p>

        <p><strong>If you did not make this change</strong>, please reset your password right away and contact our support team.</p>

        <div class="footer">
            <p>This notification was sent for your security by {{ app_name }}. If you have any concerns, please contact our support team immediately.</p>
        </div>
    </div>
</body>
</html>
"#,
    ext = "html"
)]
pub struct PasswordUpdatedTemplate {
    pub app_name: String,
    pub full_name: String,
}

#[derive(Template)]
#[template(
    source = r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Contact Form Submission - {{ app_name }}</title>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 20px; background-color: #f4f4f4; }
        .container { max-width: 600px; margin: 0 auto; background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; margin-bottom: 30px; }
        .meta { background: #f8f9fa; padding: 15px; border-radius: 4px; margin: 20px 0; }
        .message { background: #f8f9fa; padding: 15px; border-left: 4px solid #007bff; border-radius: 4px; white-space: pre-wrap; }
        .footer { margin-top: 30px; padding-top: 20px; border-top: 1px solid #eee; font-size: 12px; color: #666; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{{ app_name }}</h1>
        </div>

        <h2>New Contact Form Submission</h2>

        <div class="meta">
            <p><strong>From:</strong> {{ sender_name }} ({{ sender_email }})</p>
            <p><strong>Subject:</strong> {{ subject }}</p>
        </div>

        <div class="message">{{ message }}</div>

        <div class="footer">
            <p>Submitted through the {{ app_name }} contact form. Reply directly to {{ sender_email }} to follow up.</p>
        </div>
    </div>
</body>
</html>
"#,
    ext = "html"
)]
pub struct ContactFormTemplate {
    pub app_name: String,
    pub sender_name: String,
    pub sender_email: String,
    pub subject: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_verification_template() {
        let html = StudentVerificationTemplate {
            app_name: "Owlet".to_string(),
            student_name: "Avery".to_string(),
            verification_code: "483921".to_string(),
        }
        .render()
        .unwrap();

        assert!(html.contains("Avery"));
        assert!(html.contains("483921"));
        assert!(html.contains("parent or guardian"));
    }

    #[test]
    fn test_account_verification_template() {
        let html = AccountVerificationTemplate {
            app_name: "Owlet".to_string(),
            full_name: "Jordan Lee".to_string(),
            verify_link: "http://localhost:3000/verify-email?token=abc123".to_string(),
        }
        .render()
        .unwrap();

        assert!(html.contains("Jordan Lee"));
        assert!(html.contains("http://localhost:3000/verify-email?token=abc123"));
    }

    #[test]
    fn test_teacher_invitation_template() {
        let html = TeacherInvitationTemplate {
            app_name: "Owlet".to_string(),
            full_name: "Sam Rivera".to_string(),
            organization: "Maple Grove Elementary".to_string(),
            invite_link: "http://localhost:3000/teacher/accept-invitation?token=xyz".to_string(),
        }
        .render()
        .unwrap();

        assert!(html.contains("Maple Grove Elementary"));
        assert!(html.contains("accept-invitation?token=xyz"));
    }

    #[test]
    fn test_contact_form_template_escapes_html() {
        let html = ContactFormTemplate {
            app_name: "Owlet".to_string(),
            sender_name: "Casey".to_string(),
            sender_email: "casey@example.com".to_string(),
            subject: "Feedback".to_string(),
            message: "<script>alert('hi')</script>".to_string(),
        }
        .render()
        .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
