//! HTTP form server.
//!
//! Provides three endpoints:
//! - `GET /` - the empty form
//! - `POST /` - runs a submission batch and shows the result on the form
//! - `GET /health` - liveness probe
//!
//! Each form post is handled on its own task; nothing is shared between posts
//! except the HTTP client and the settings.

mod handlers;
mod page;
mod types;

use axum::routing::get;
use axum::Router;

use handlers::{form_handler, health_handler, submit_handler};
use crate::killboard::Killboard;

pub use page::{render_page, PageView};
pub use types::{AppState, SubmissionForm};

/// Builds the form server's router.
pub fn create_router<K>(state: AppState<K>) -> Router
where
    K: Killboard + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(form_handler).post(submit_handler::<K>))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Binds `bind` and serves the form until the process exits.
pub async fn start_server<K>(bind: &str, state: AppState<K>) -> Result<(), anyhow::Error>
where
    K: Killboard + Send + Sync + 'static,
{
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind form server to {}: {}", bind, e))?;

    log::info!("Form server listening on http://{}/", bind);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Form server error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests;
