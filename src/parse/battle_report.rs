//! Battle report scraping.
//!
//! A battle report lists friendly losses and hostile losses in separate
//! `.kb-table` sections of the `#pilots_and_ships` container. The hostile one
//! is always the last table. Each destroyed row links to the ship killmail in
//! its first cell; the second cell carries the pilot's name link and, when the
//! pod died too, a second link to the pod killmail.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::config::{
    DESTROYED_ROW_SELECTOR, KB_TABLE_SELECTOR, PILOTS_AND_SHIPS_SELECTOR, URL_LINE_PREFIX,
};
use crate::error_handling::ScrapeError;
use crate::utils::{parse_selector_unsafe, parse_selector_with_fallback};

const CELL_SELECTOR_STR: &str = "td";
const LINK_SELECTOR_STR: &str = "a";

static PILOTS_AND_SHIPS: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(PILOTS_AND_SHIPS_SELECTOR, "battle report container")
});
static KB_TABLE: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(KB_TABLE_SELECTOR, "battle report tables"));
static DESTROYED_ROW: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(DESTROYED_ROW_SELECTOR, "battle report rows"));
static CELL: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(CELL_SELECTOR_STR, "CELL_SELECTOR"));
static LINK: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(LINK_SELECTOR_STR, "LINK_SELECTOR"));

/// Killmail links found on one hostile loss row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LossLinks {
    /// Killmail of the destroyed ship
    pub ship: String,
    /// Killmail of the pod, when it was lost and pods were requested
    pub pod: Option<String>,
}

impl LossLinks {
    /// The row's killmail URLs, ship first.
    pub fn into_urls(self) -> impl Iterator<Item = String> {
        std::iter::once(self.ship).chain(self.pod)
    }
}

/// Extracts the hostile losses from a battle report document, in row order.
///
/// # Arguments
///
/// * `document` - The parsed battle report page
/// * `base` - URL of the report, used to resolve relative links
/// * `include_pods` - Whether to also return pod killmails
///
/// # Errors
///
/// Returns a `ScrapeError` when the container or the loss tables are missing,
/// or when a destroyed row has no ship killmail link. A hostile table with no
/// destroyed rows yields an empty list.
pub fn extract_hostile_losses(
    document: &Html,
    base: Option<&Url>,
    include_pods: bool,
) -> Result<Vec<LossLinks>, ScrapeError> {
    let container =
        document
            .select(&PILOTS_AND_SHIPS)
            .next()
            .ok_or(ScrapeError::MissingElement {
                what: "pilots and ships section",
                selector: PILOTS_AND_SHIPS_SELECTOR,
            })?;

    let hostile_table = container
        .select(&KB_TABLE)
        .last()
        .ok_or(ScrapeError::MissingElement {
            what: "loss tables",
            selector: KB_TABLE_SELECTOR,
        })?;

    hostile_table
        .select(&DESTROYED_ROW)
        .enumerate()
        .map(|(row, element)| extract_row_links(element, row, base, include_pods))
        .collect()
}

fn extract_row_links(
    row_element: ElementRef<'_>,
    row: usize,
    base: Option<&Url>,
    include_pods: bool,
) -> Result<LossLinks, ScrapeError> {
    let cells: Vec<ElementRef<'_>> = row_element.select(&CELL).collect();

    let ship = cells
        .first()
        .and_then(|cell| cell.select(&LINK).next())
        .and_then(|link| link.value().attr("href"))
        .map(|href| resolve_href(href, base))
        .ok_or(ScrapeError::MissingShipLink { row })?;

    // The pod link is the second one in the pilot cell; a single link means the pod survived
    let pod = if include_pods {
        cells
            .get(1)
            .and_then(|cell| cell.select(&LINK).nth(1))
            .and_then(|link| link.value().attr("href"))
            .map(|href| resolve_href(href, base))
    } else {
        None
    };

    Ok(LossLinks { ship, pod })
}

/// Absolute links are kept verbatim; relative ones are joined onto the report URL.
fn resolve_href(href: &str, base: Option<&Url>) -> String {
    let href = href.trim();
    if href.starts_with(URL_LINE_PREFIX) {
        return href.to_string();
    }
    match base.map(|base| base.join(href)) {
        Some(Ok(resolved)) => resolved.to_string(),
        Some(Err(e)) => {
            log::warn!("Could not resolve killmail link '{}': {}", href, e);
            href.to_string()
        }
        None => href.to_string(),
    }
}
