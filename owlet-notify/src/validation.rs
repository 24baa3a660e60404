use crate::SendError;
use regex::Regex;
use std::sync::LazyLock;

/// Practical subset of RFC 5322, compiled once and reused for every send.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Invalid email regex pattern")
});

/// Checks the shape of a recipient address before any transport work.
///
/// An empty recipient is a missing field; any non-empty string that fails
/// the shape check is reported uniformly as an invalid recipient.
pub fn validate_recipient(email: &str) -> Result<(), SendError> {
    if email.is_empty() {
        return Err(SendError::MissingField("recipient".to_string()));
    }

    if email.len() > 254 {
        return Err(SendError::InvalidRecipient);
    }

    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(SendError::InvalidRecipient)
    }
}
