//! Utilities for sanitizing messages before they reach the result page.
//!
//! Failure reasons are scraped from killboard HTML or taken from transport
//! errors, so they are stripped of control characters, capped in length, and
//! HTML-escaped when rendered.

use crate::config::MAX_ERROR_MESSAGE_LENGTH;

/// Sanitizes a message by removing control characters.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) are
/// removed; everything else, including non-ASCII text, is kept.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .collect()
}

/// Sanitizes and truncates a message to `MAX_ERROR_MESSAGE_LENGTH` characters.
///
/// Truncation counts characters, not bytes, so multi-byte pilot names are
/// never split.
pub fn sanitize_and_truncate_error_message(message: &str) -> String {
    let sanitized = sanitize_error_message(message);
    let length = sanitized.chars().count();

    if length > MAX_ERROR_MESSAGE_LENGTH {
        let kept: String = sanitized
            .chars()
            .take(MAX_ERROR_MESSAGE_LENGTH.saturating_sub(3))
            .collect();
        format!("{}...", kept)
    } else {
        sanitized
    }
}

/// Escapes text for inclusion in HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_error_message_removes_control_chars() {
        let input = "Error\x00message\x01with\x02control\x03chars";
        let output = sanitize_error_message(input);
        assert_eq!(output, "Errormessagewithcontrolchars");
    }

    #[test]
    fn test_sanitize_error_message_preserves_newlines_and_tabs() {
        let input = "Error\nmessage\twith\r\nwhitespace";
        assert_eq!(sanitize_error_message(input), input);
    }

    #[test]
    fn test_sanitize_error_message_preserves_unicode() {
        let input = "Pilot Ñame 测试";
        assert_eq!(sanitize_error_message(input), input);
    }

    #[test]
    fn test_truncate_keeps_short_messages() {
        assert_eq!(
            sanitize_and_truncate_error_message("Wrong password"),
            "Wrong password"
        );
    }

    #[test]
    fn test_truncate_counts_characters() {
        let long = "é".repeat(MAX_ERROR_MESSAGE_LENGTH + 10);
        let output = sanitize_and_truncate_error_message(&long);
        assert_eq!(output.chars().count(), MAX_ERROR_MESSAGE_LENGTH);
        assert!(output.ends_with("..."));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain pilot"), "plain pilot");
    }
}
