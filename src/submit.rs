//! Adding one scout to one killmail.
//!
//! The killboard has no structured response: a post went through when the
//! page that comes back mentions the scout, and failed otherwise. A bold
//! `Error: ...` line, when present, says why.

use log::{info, warn};

use crate::config::{TRANSPORT_ERROR_PREFIX, UNKNOWN_ERROR};
use crate::error_handling::categorize_reqwest_error;
use crate::killboard::Killboard;
use crate::parse::extract_error_message;
use crate::utils::sanitize::sanitize_and_truncate_error_message;

/// Result of adding one scout to one killmail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The killboard accepted the scout
    Success,
    /// The scout was already listed; nothing was posted
    AlreadyPresent,
    /// The post failed, with the reason shown to the user
    Failure(String),
}

/// A submission outcome together with what it was for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoutResult {
    /// Killmail URL
    pub record: String,
    /// Scout name
    pub scout: String,
    /// What happened
    pub outcome: SubmissionOutcome,
}

impl ScoutResult {
    /// The result page line for this outcome; successes are silent.
    pub fn describe(&self) -> Option<String> {
        match &self.outcome {
            SubmissionOutcome::Success => None,
            SubmissionOutcome::AlreadyPresent => {
                Some(format!("{} already present on {}", self.scout, self.record))
            }
            SubmissionOutcome::Failure(reason) => Some(format!(
                "{} when adding {} to KM {}",
                reason, self.scout, self.record
            )),
        }
    }
}

/// Classifies the killboard's response to an "add pilot" post.
///
/// 1. The body mentions the scout: `Success`.
/// 2. The body has a `<b>Error: ...</b>` line: `Failure` with that message.
/// 3. Otherwise: `Failure("Unknown error")`.
pub fn classify_response(body: &str, scout: &str) -> SubmissionOutcome {
    if body.contains(scout) {
        return SubmissionOutcome::Success;
    }
    match extract_error_message(body) {
        Some(message) => SubmissionOutcome::Failure(sanitize_and_truncate_error_message(&message)),
        None => SubmissionOutcome::Failure(UNKNOWN_ERROR.to_string()),
    }
}

/// Adds `scout` to the killmail at `record` unless `involved` already names them.
///
/// `involved` is the involved parties markup from the presence check, or an
/// empty string when presence checking is off. Transport faults become a
/// `Failure` and are never retried.
pub async fn submit_scout<K: Killboard>(
    killboard: &K,
    record: &str,
    scout: &str,
    password: &str,
    involved: &str,
) -> SubmissionOutcome {
    if !involved.is_empty() && involved.contains(scout) {
        info!("{} already present on {}", scout, record);
        return SubmissionOutcome::AlreadyPresent;
    }

    match killboard.post_scout(record, scout, password).await {
        Ok(body) => {
            let outcome = classify_response(&body, scout);
            match &outcome {
                SubmissionOutcome::Success => info!("Added {} to {}", scout, record),
                SubmissionOutcome::Failure(reason) => {
                    warn!("Killboard refused {} on {}: {}", scout, record, reason)
                }
                SubmissionOutcome::AlreadyPresent => {}
            }
            outcome
        }
        Err(e) => {
            warn!(
                "Failed to post {} to {} ({}): {}",
                scout,
                record,
                categorize_reqwest_error(&e),
                e
            );
            SubmissionOutcome::Failure(sanitize_and_truncate_error_message(&format!(
                "{}{}",
                TRANSPORT_ERROR_PREFIX, e
            )))
        }
    }
}
