//! Submission batch orchestration.
//!
//! A batch runs the whole pipeline for one form post:
//!
//! 1. classify the input lines into references and scouts
//! 2. expand battle reports into killmails
//! 3. for each killmail, in order, optionally read its involved parties and
//!    submit every scout, in order
//!
//! Everything is awaited in sequence; a batch never has two requests to the
//! killboard in flight. The time budget is polled between killmails (or
//! between scouts, see `BudgetCheck`). Once it is exceeded the batch stops and
//! hands back the unprocessed killmails plus every scout as resubmittable text.

mod budget;
mod report;

use std::time::Duration;

use log::{info, warn};

use crate::classify::classify_lines;
use crate::config::{BudgetCheck, Config, ReportFailure, MAX_RUN_TIME};
use crate::error_handling::BatchError;
use crate::expand::expand_references;
use crate::killboard::Killboard;
use crate::presence::involved_parties;
use crate::submit::{submit_scout, ScoutResult};

pub use budget::{Clock, SystemClock, TimeBudget};
pub use report::{resubmission_payload, BatchReport, BatchState, OutcomeCounts};

/// One form post: the raw text, the killboard password, and the two options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionRequest {
    /// Killmail URLs, battle report URLs, and scout names, one per line
    pub content: String,
    /// Shared killboard password
    pub password: String,
    /// Skip scouts already listed on a killmail
    pub check_presence: bool,
    /// Also submit to pod killmails found on battle reports
    pub include_pods: bool,
}

/// Server-wide batch behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSettings {
    pub max_run_time: Duration,
    pub budget_check: BudgetCheck,
    pub report_failure: ReportFailure,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            max_run_time: MAX_RUN_TIME,
            budget_check: BudgetCheck::PerRecord,
            report_failure: ReportFailure::Abort,
        }
    }
}

impl From<&Config> for BatchSettings {
    fn from(config: &Config) -> Self {
        Self {
            max_run_time: config.max_run_time(),
            budget_check: config.budget_check,
            report_failure: config.report_failure,
        }
    }
}

/// Runs a submission batch.
///
/// The time budget starts when this is called.
///
/// # Errors
///
/// Returns a `BatchError` when a battle report cannot be expanded (unless
/// `ReportFailure::Skip` is set) or when a presence check cannot read a
/// killmail. Failed scout submissions are never errors; they become lines of
/// the report.
pub async fn run_batch<K: Killboard, C: Clock>(
    killboard: &K,
    request: &SubmissionRequest,
    settings: &BatchSettings,
    clock: &C,
) -> Result<BatchReport, BatchError> {
    let budget = TimeBudget::start(clock, settings.max_run_time);

    let input = classify_lines(&request.content);
    info!(
        "Batch started: {} reference(s), {} scout(s)",
        input.references.len(),
        input.scouts.len()
    );

    let expansion = expand_references(
        killboard,
        &input.references,
        request.include_pods,
        settings.report_failure,
    )
    .await?;
    let records = expansion.records;
    let scouts = input.scouts;

    let mut state = BatchState::Running;
    let mut notices = expansion.failures;
    let mut counts = OutcomeCounts::default();
    let mut resubmit = None;
    let mut records_processed = 0;

    'records: for (index, record) in records.iter().enumerate() {
        if budget.exceeded() {
            state = BatchState::TimedOut;
            resubmit = Some(resubmission_payload(&records[index..], &scouts));
            break;
        }

        let involved =
            involved_parties(killboard, record, request.check_presence && !scouts.is_empty())
                .await?;

        for (position, scout) in scouts.iter().enumerate() {
            if settings.budget_check == BudgetCheck::PerScout && position > 0 && budget.exceeded()
            {
                // The killmail is handed back whole; scouts already added will
                // be caught by the presence check or refused by the killboard
                state = BatchState::TimedOut;
                resubmit = Some(resubmission_payload(&records[index..], &scouts));
                break 'records;
            }

            let outcome =
                submit_scout(killboard, record, scout, &request.password, &involved).await;
            counts.record(&outcome);
            let result = ScoutResult {
                record: record.clone(),
                scout: scout.clone(),
                outcome,
            };
            notices.extend(result.describe());
        }
        records_processed += 1;
    }

    if state == BatchState::Running {
        state = BatchState::Done;
    }

    let report = BatchReport::finish(state, notices, resubmit, counts, records_processed);

    if report.timed_out() {
        warn!(
            "Batch ran out of time after {:.1}s with {} of {} killmail(s) processed",
            budget.elapsed().as_secs_f64(),
            report.records_processed,
            records.len()
        );
    }
    info!(
        "Batch finished: {} killmail(s), {} submission(s): {} added, {} already present, {} failed in {:.1}s",
        report.records_processed,
        report.counts.total(),
        report.counts.succeeded,
        report.counts.already_present,
        report.counts.failed,
        budget.elapsed().as_secs_f64()
    );

    Ok(report)
}
