//! Killboard HTTP access.
//!
//! The killboard is an unversioned third-party site with no API: pages are
//! fetched with plain GETs and pilots are added by posting the same form a
//! browser would. `Killboard` is the seam between the submission pipeline and
//! the network, so the pipeline can run against an in-memory board in tests.

use std::future::Future;
use std::sync::Arc;

use crate::config::{
    FORM_FIELD_PASSWORD, FORM_FIELD_SCOUT, FORM_FIELD_SUBMIT, FORM_SUBMIT_VALUE,
};

/// Operations the submission pipeline needs from a killboard.
///
/// Any non-success HTTP status is reported as an error, the same as a
/// connection or timeout failure.
pub trait Killboard {
    /// Fetches a page (battle report or killmail) and returns its body.
    fn fetch_page(&self, url: &str) -> impl Future<Output = Result<String, reqwest::Error>> + Send;

    /// Posts the "add pilot" form for `scout` to the killmail at `url` and
    /// returns the response body.
    fn post_scout(
        &self,
        url: &str,
        scout: &str,
        password: &str,
    ) -> impl Future<Output = Result<String, reqwest::Error>> + Send;
}

/// `Killboard` backed by a shared `reqwest::Client`.
///
/// Timeouts, User-Agent, and redirect policy all come from the injected client
/// (see `initialization::init_client`).
#[derive(Clone)]
pub struct HttpKillboard {
    client: Arc<reqwest::Client>,
}

impl HttpKillboard {
    /// Creates a killboard client from a configured HTTP client.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

impl Killboard for HttpKillboard {
    async fn fetch_page(&self, url: &str) -> Result<String, reqwest::Error> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        response.text().await
    }

    async fn post_scout(
        &self,
        url: &str,
        scout: &str,
        password: &str,
    ) -> Result<String, reqwest::Error> {
        log::debug!("POST {} ({})", url, scout);
        let form = [
            (FORM_FIELD_SCOUT, scout),
            (FORM_FIELD_PASSWORD, password),
            (FORM_FIELD_SUBMIT, FORM_SUBMIT_VALUE),
        ];
        let response = self
            .client
            .post(url)
            .form(&form)
            .send()
            .await?
            .error_for_status()?;
        response.text().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    fn killboard() -> HttpKillboard {
        HttpKillboard::new(Arc::new(reqwest::Client::new()))
    }

    #[tokio::test]
    async fn test_fetch_page_returns_body() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/km/123"))
                .respond_with(status_code(200).body("<html>killmail</html>")),
        );

        let body = killboard()
            .fetch_page(&server.url("/km/123").to_string())
            .await
            .unwrap();

        assert_eq!(body, "<html>killmail</html>");
    }

    #[tokio::test]
    async fn test_fetch_page_error_status_is_a_fault() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/km/404"))
                .respond_with(status_code(404)),
        );

        let result = killboard()
            .fetch_page(&server.url("/km/404").to_string())
            .await;

        let error = result.unwrap_err();
        assert_eq!(error.status().map(|s| s.as_u16()), Some(404));
    }

    #[tokio::test]
    async fn test_post_scout_sends_form_fields() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/km/123"),
                request::headers(contains((
                    "content-type",
                    "application/x-www-form-urlencoded"
                ))),
                request::body("scoutname=Pilot+A&password=pw&scoutsubmit=add+pilot"),
            ])
            .respond_with(status_code(200).body("Pilot A added")),
        );

        let body = killboard()
            .post_scout(&server.url("/km/123").to_string(), "Pilot A", "pw")
            .await
            .unwrap();

        assert_eq!(body, "Pilot A added");
    }

    #[tokio::test]
    async fn test_post_scout_encodes_special_characters() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/km/1"),
                request::body(url_decoded(contains(("scoutname", "Tom & Jerry")))),
                request::body(url_decoded(contains(("password", "p=w&d")))),
            ])
            .respond_with(status_code(200).body("ok")),
        );

        let result = killboard()
            .post_scout(&server.url("/km/1").to_string(), "Tom & Jerry", "p=w&d")
            .await;

        assert!(result.is_ok());
    }
}
