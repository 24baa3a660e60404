mod notification_templates;

pub use notification_templates::{
    AccountVerificationTemplate, ContactFormTemplate, PasswordResetTemplate,
    PasswordUpdatedTemplate, StudentVerificationTemplate, TeacherInvitationTemplate,
    TemplateContext,
};

use regex::Regex;
use std::sync::LazyLock;

static STYLE_BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<style[^>]*>.*?</style>").expect("Invalid style block regex pattern")
});

static HTML_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid html tag regex pattern"));

static BLANK_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("Invalid blank line regex pattern"));

/// Derives the plain-text alternative from a rendered HTML body.
///
/// Line-breaking tags become newlines before the remaining tags are
/// stripped, so the text part keeps the paragraph structure of the HTML.
/// Inline `<style>` blocks are dropped entirely; their rules are not text.
pub fn html_to_text(html: &str) -> String {
    let text = STYLE_BLOCK_REGEX.replace_all(html, "");

    let text = text
        .replace("<br>", "\n")
        .replace("<br/>", "\n")
        .replace("<br />", "\n")
        .replace("</p>", "\n\n")
        .replace("</div>", "\n")
        .replace("</h1>", "\n\n")
        .replace("</h2>", "\n\n")
        .replace("</h3>", "\n\n");

    let text = HTML_TAG_REGEX.replace_all(&text, "");
    let text = BLANK_LINE_REGEX.replace_all(&text, "\n\n");

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text_strips_tags() {
        let text = html_to_text("<h1>Welcome</h1><p>Hello <strong>there</strong>.</p>");
        assert_eq!(text, "Welcome\n\nHello there.");
    }

    #[test]
    fn test_html_to_text_preserves_line_breaks() {
        let text = html_to_text("line one<br>line two<br />line three");
        assert_eq!(text, "line one\nline two\nline three");
    }

    #[test]
    fn test_html_to_text_drops_style_rules() {
        let html = "<html><head><style>body { color: #333; }</style></head>\
                    <body><p>Visible</p></body></html>";
        let text = html_to_text(html);

        assert!(text.contains("Visible"));
        assert!(!text.contains("color"));
    }

    #[test]
    fn test_html_to_text_collapses_blank_runs() {
        let text = html_to_text("<div><p>one</p></div><div><p>two</p></div>");
        assert_eq!(text, "one\n\ntwo");
    }
}
