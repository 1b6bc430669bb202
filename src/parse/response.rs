//! Reading the killboard's answer to an "add pilot" post.

use regex::Regex;
use std::sync::LazyLock;

// The killboard reports rejected posts as a bold "Error: ..." line
const ERROR_MESSAGE_PATTERN: &str = r"<b>Error: (.+?)</b>";

static ERROR_MESSAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ERROR_MESSAGE_PATTERN).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in ERROR_MESSAGE_RE: {}. This is a programming error.",
            ERROR_MESSAGE_PATTERN, e
        )
    })
});

/// Extracts the first `<b>Error: ...</b>` message from a response body.
///
/// Returns the text after the `Error: ` prefix, or `None` when the body has
/// no such line.
pub fn extract_error_message(body: &str) -> Option<String> {
    ERROR_MESSAGE_RE
        .captures(body)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|message| !message.is_empty())
}
