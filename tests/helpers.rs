// Shared page fixtures for the integration tests.
//
// The markup mirrors the parts of killboard pages the scraper reads; the rest
// of a real page is left out.

/// A battle report page. Each entry is a ship killmail href and an optional
/// pod killmail href; all rows go in the hostile (last) table.
#[allow(dead_code)] // Used by other test files
pub fn battle_report_page(losses: &[(&str, Option<&str>)]) -> String {
    let rows: String = losses
        .iter()
        .map(|(ship, pod)| {
            let pod_link = pod
                .map(|href| format!(r#" <a href="{}">[pod]</a>"#, href))
                .unwrap_or_default();
            format!(
                r#"<tr class="br-destroyed"><td><a href="{}"><img src="ship.png"></a></td><td><a href="/pilot/1">Victim</a>{}</td></tr>"#,
                ship, pod_link
            )
        })
        .collect();
    format!(
        r#"<html><body><div id="pilots_and_ships">
<table class="kb-table"><tr class="br-destroyed"><td><a href="/km/friendly">x</a></td></tr></table>
<table class="kb-table">{}</table>
</div></body></html>"#,
        rows
    )
}

/// A killmail page listing `names` as involved parties.
#[allow(dead_code)] // Used by other test files
pub fn killmail_page(names: &[&str]) -> String {
    let rows: String = names
        .iter()
        .map(|name| format!(r#"<tr><td><a href="/pilot">{}</a></td></tr>"#, name))
        .collect();
    format!(
        r#"<html><body><div id="kl-detail-left"><table class="kb-table">{}</table></div></body></html>"#,
        rows
    )
}

/// The page the killboard answers with after adding `scout`.
#[allow(dead_code)] // Used by other test files
pub fn added_page(scout: &str) -> String {
    killmail_page(&[scout])
}
