//! Killmail page scraping.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::config::INVOLVED_PARTIES_SELECTOR;
use crate::error_handling::ScrapeError;
use crate::utils::{parse_selector_unsafe, parse_selector_with_fallback};

static INVOLVED_PARTIES: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(INVOLVED_PARTIES_SELECTOR, "involved parties panel")
});
static TABLE: LazyLock<Selector> = LazyLock::new(|| parse_selector_unsafe("table", "TABLE"));

/// Returns the HTML of the involved parties table on a killmail page.
///
/// The result is only ever searched for pilot names, so it is returned as
/// serialized markup rather than structured rows.
pub fn extract_involved_parties(document: &Html) -> Result<String, ScrapeError> {
    let panel = document
        .select(&INVOLVED_PARTIES)
        .next()
        .ok_or(ScrapeError::MissingElement {
            what: "involved parties panel",
            selector: INVOLVED_PARTIES_SELECTOR,
        })?;

    let table = panel
        .select(&TABLE)
        .next()
        .ok_or(ScrapeError::MissingElement {
            what: "involved parties table",
            selector: "#kl-detail-left table",
        })?;

    Ok(table.html())
}
