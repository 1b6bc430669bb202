//! The outcome of a batch as shown to the user.

use crate::config::{SUCCESS_MESSAGE, TIMEOUT_NOTICE};
use crate::submit::SubmissionOutcome;

/// Where a batch stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    /// Still submitting
    Running,
    /// Stopped early because the time budget ran out
    TimedOut,
    /// Every killmail was processed
    Done,
}

/// Tally of submission outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub succeeded: usize,
    pub already_present: usize,
    pub failed: usize,
}

impl OutcomeCounts {
    pub fn record(&mut self, outcome: &SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Success => self.succeeded += 1,
            SubmissionOutcome::AlreadyPresent => self.already_present += 1,
            SubmissionOutcome::Failure(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.already_present + self.failed
    }
}

/// Everything the result page needs from a finished batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// `TimedOut` or `Done`
    pub state: BatchState,
    /// Message lines, in order
    pub lines: Vec<String>,
    /// Text to pre-fill the form with when the batch timed out
    pub resubmit: Option<String>,
    /// Outcome tally
    pub counts: OutcomeCounts,
    /// Killmails whose scouts were all attempted
    pub records_processed: usize,
}

impl BatchReport {
    /// Builds the report from non-silent notices and the final state.
    ///
    /// No notices means the single success line. A timeout appends the
    /// resubmit notice as the last line.
    pub(crate) fn finish(
        state: BatchState,
        mut notices: Vec<String>,
        resubmit: Option<String>,
        counts: OutcomeCounts,
        records_processed: usize,
    ) -> Self {
        if notices.is_empty() {
            notices.push(SUCCESS_MESSAGE.to_string());
        }
        if state == BatchState::TimedOut {
            notices.push(TIMEOUT_NOTICE.to_string());
        }
        Self {
            state,
            lines: notices,
            resubmit,
            counts,
            records_processed,
        }
    }

    /// The message lines joined with newlines.
    pub fn message(&self) -> String {
        self.lines.join("\n")
    }

    pub fn timed_out(&self) -> bool {
        self.state == BatchState::TimedOut
    }
}

/// Text that feeds the unfinished part of a batch back into the form.
///
/// Remaining killmails first, then every scout, one per line.
pub fn resubmission_payload(records: &[String], scouts: &[String]) -> String {
    records
        .iter()
        .chain(scouts.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}
