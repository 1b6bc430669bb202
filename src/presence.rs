//! Checking who is already listed on a killmail.

use scraper::Html;

use crate::error_handling::BatchError;
use crate::killboard::Killboard;
use crate::parse::extract_involved_parties;

/// Returns the involved parties markup of a killmail, for substring checks.
///
/// When `enabled` is false nothing is fetched and the result is empty, so no
/// scout ever counts as already present.
///
/// # Errors
///
/// A fetch failure or a page without the involved parties table is a
/// `BatchError`.
pub async fn involved_parties<K: Killboard>(
    killboard: &K,
    record_url: &str,
    enabled: bool,
) -> Result<String, BatchError> {
    if !enabled {
        return Ok(String::new());
    }

    let body = killboard
        .fetch_page(record_url)
        .await
        .map_err(|source| BatchError::Fetch {
            url: record_url.to_string(),
            source,
        })?;

    extract_involved_parties(&Html::parse_document(&body)).map_err(|source| BatchError::Scrape {
        url: record_url.to_string(),
        source,
    })
}
