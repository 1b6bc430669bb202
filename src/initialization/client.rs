//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for every killboard request.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Overall request deadline from the configuration
/// - A shorter TCP connect timeout so unreachable hosts fail fast
/// - Redirect following enabled (reqwest default)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let request_timeout = Duration::from_secs(config.fetch_timeout_secs);
    let connect_timeout = Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS).min(request_timeout);
    let client = ClientBuilder::new()
        .timeout(request_timeout)
        .connect_timeout(connect_timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
