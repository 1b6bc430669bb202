//! Form server HTTP handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use log::error;

use super::page::{render_page, PageView};
use super::types::{AppState, SubmissionForm};
use crate::batch::{run_batch, SystemClock};
use crate::config::TRANSPORT_ERROR_PREFIX;
use crate::killboard::Killboard;
use crate::utils::sanitize::sanitize_and_truncate_error_message;

/// Empty form
pub async fn form_handler() -> Html<String> {
    Html(render_page(&PageView::default()))
}

/// Runs one batch and renders its result on the form page.
///
/// A timed-out batch pre-fills the textarea with the unfinished work. A batch
/// that could not run at all keeps the submitted text and answers 502.
pub async fn submit_handler<K>(
    State(state): State<AppState<K>>,
    Form(form): Form<SubmissionForm>,
) -> Response
where
    K: Killboard + Send + Sync + 'static,
{
    let check_presence = form.check_presence();
    let include_pods = form.include_pods();
    let request = form.into_request(state.default_password.as_deref());

    match run_batch(
        state.killboard.as_ref(),
        &request,
        &state.settings,
        &SystemClock,
    )
    .await
    {
        Ok(report) => {
            let content = report.resubmit.as_deref().unwrap_or_default();
            let html = render_page(&PageView {
                content,
                lines: &report.lines,
                check_presence,
                include_pods,
            });
            (StatusCode::OK, Html(html)).into_response()
        }
        Err(e) => {
            error!("Batch failed: {}", e);
            let lines = vec![sanitize_and_truncate_error_message(&format!(
                "{}{}",
                TRANSPORT_ERROR_PREFIX, e
            ))];
            let html = render_page(&PageView {
                content: &request.content,
                lines: &lines,
                check_presence,
                include_pods,
            });
            (StatusCode::BAD_GATEWAY, Html(html)).into_response()
        }
    }
}

/// Liveness probe
pub async fn health_handler() -> &'static str {
    "ok"
}
