//! Expanding battle reports into the killmails they list.
//!
//! Killmail URLs pass through untouched; a battle report URL is replaced, in
//! place, by the hostile loss killmails scraped from its page.

use log::{info, warn};
use scraper::Html;
use url::Url;

use crate::classify::is_battle_report;
use crate::config::ReportFailure;
use crate::error_handling::{BatchError, ScrapeError};
use crate::killboard::Killboard;
use crate::parse::{extract_hostile_losses, LossLinks};
use crate::utils::sanitize::sanitize_and_truncate_error_message;

/// Killmails to submit to, plus a line for each battle report that was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Killmail URLs in submission order
    pub records: Vec<String>,
    /// One message per battle report that could not be expanded
    pub failures: Vec<String>,
}

/// Fetches a battle report and returns its hostile loss killmails in row order.
///
/// # Errors
///
/// Any fetch or layout failure is returned as a `BatchError`; no partial
/// result is produced for a report.
pub async fn expand_report<K: Killboard>(
    killboard: &K,
    url: &str,
    include_pods: bool,
) -> Result<Vec<String>, BatchError> {
    info!("Found battle report {}", url);
    let body = killboard
        .fetch_page(url)
        .await
        .map_err(|source| BatchError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let losses =
        parse_report(&body, url, include_pods).map_err(|source| BatchError::Scrape {
            url: url.to_string(),
            source,
        })?;

    let mut records = Vec::with_capacity(losses.len());
    for loss in losses {
        let urls: Vec<String> = loss.into_urls().collect();
        info!("Battle report contained killmail {}", urls.join(" and "));
        records.extend(urls);
    }
    Ok(records)
}

fn parse_report(body: &str, url: &str, include_pods: bool) -> Result<Vec<LossLinks>, ScrapeError> {
    let base = Url::parse(url).ok();
    let document = Html::parse_document(body);
    extract_hostile_losses(&document, base.as_ref(), include_pods)
}

/// Flattens classified references into the ordered list of killmails.
///
/// With `ReportFailure::Abort` the first report that fails ends the
/// expansion with its error. With `ReportFailure::Skip` the report
/// contributes no killmails and a failure line instead.
pub async fn expand_references<K: Killboard>(
    killboard: &K,
    references: &[String],
    include_pods: bool,
    on_failure: ReportFailure,
) -> Result<Expansion, BatchError> {
    let mut expansion = Expansion::default();
    for reference in references {
        if !is_battle_report(reference) {
            info!("Found killmail {}", reference);
            expansion.records.push(reference.clone());
            continue;
        }

        match expand_report(killboard, reference, include_pods).await {
            Ok(records) => expansion.records.extend(records),
            Err(e) => match on_failure {
                ReportFailure::Abort => return Err(e),
                ReportFailure::Skip => {
                    warn!("Skipping battle report: {}", e);
                    expansion.failures.push(describe_report_failure(&e));
                }
            },
        }
    }
    Ok(expansion)
}

fn describe_report_failure(error: &BatchError) -> String {
    let reason = match error {
        BatchError::Fetch { source, .. } => source.to_string(),
        BatchError::Scrape { source, .. } => source.to_string(),
    };
    sanitize_and_truncate_error_message(&format!(
        "Error: {} when reading battle report {}",
        reason,
        error.url()
    ))
}
