mod file;
pub mod smtp;

pub use file::FileTransport;
pub use smtp::{SmtpTransport, TlsConfig};

use crate::{Email, MailerError};
use lettre::Message;
use lettre::message::{MultiPart, SinglePart};

/// Maps an [`Email`] onto a lettre [`Message`].
///
/// With a text body present the result is a multipart/alternative; without
/// one it is a single HTML part, so the content type stays accurate either
/// way.
pub(crate) fn build_message(email: Email) -> Result<Message, MailerError> {
    let mut builder = Message::builder()
        .from(email.from.parse()?)
        .to(email.to.parse()?)
        .subject(email.subject);

    if let Some(reply_to) = email.reply_to {
        builder = builder.reply_to(reply_to.parse()?);
    }

    let message = match email.text_body {
        Some(text) => builder.multipart(
            MultiPart::alternative()
                .singlepart(SinglePart::plain(text))
                .singlepart(SinglePart::html(email.html_body)),
        )?,
        None => builder.singlepart(SinglePart::html(email.html_body))?,
    };

    Ok(message)
}
