//! Splitting the submitted text into killmail references and scout names.

use log::{debug, info};

use crate::config::{BATTLE_REPORT_MARKER, URL_LINE_PREFIX};

/// Input lines split by kind, each group in its original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedInput {
    /// Killmail and battle report URLs
    pub references: Vec<String>,
    /// Pilot names to add
    pub scouts: Vec<String>,
}

/// Classifies each line of `text` as a URL or a scout name.
///
/// Lines end at `\n`, `\r\n`, or a lone `\r`. They are trimmed and empty
/// lines are skipped. A line is a URL when it starts
/// with `http` (case-sensitive, no further validation), otherwise it is a
/// scout name.
pub fn classify_lines(text: &str) -> ClassifiedInput {
    let mut classified = ClassifiedInput::default();
    for line in text.split(['\r', '\n']) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with(URL_LINE_PREFIX) {
            debug!("Line is a URL: {}", line);
            classified.references.push(line.to_string());
        } else {
            info!("Found scout {}", line);
            classified.scouts.push(line.to_string());
        }
    }
    classified
}

/// Whether a URL points to a battle report rather than a single killmail.
pub fn is_battle_report(url: &str) -> bool {
    url.contains(BATTLE_REPORT_MARKER)
}
