//! Error type definitions.
//!
//! This module defines the error types used throughout the application, and the
//! categories used to label transport faults in log output.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// A required element is missing from a fetched killboard page.
///
/// The killboard layout is a precondition for reading it correctly, so these
/// are never recovered locally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrapeError {
    /// No element matched a selector the page must contain.
    #[error("missing {what} ({selector})")]
    MissingElement {
        /// Human-readable name of the element
        what: &'static str,
        /// CSS selector that found nothing
        selector: &'static str,
    },

    /// A destroyed-ship row has no link to its killmail.
    #[error("hostile loss row {row} has no killmail link")]
    MissingShipLink {
        /// Zero-based position of the row in the hostile losses table
        row: usize,
    },
}

/// Request-level failures that stop a whole submission batch.
#[derive(Error, Debug)]
pub enum BatchError {
    /// A page needed before submitting could not be fetched.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        /// Page that was being fetched
        url: String,
        /// Underlying transport fault
        #[source]
        source: ReqwestError,
    },

    /// A fetched page did not have the expected layout.
    #[error("failed to read {url}: {source}")]
    Scrape {
        /// Page that was being read
        url: String,
        /// What was missing
        #[source]
        source: ScrapeError,
    },
}

impl BatchError {
    /// The page that caused the failure.
    pub fn url(&self) -> &str {
        match self {
            BatchError::Fetch { url, .. } | BatchError::Scrape { url, .. } => url,
        }
    }
}

/// Categories of transport faults seen while talking to the killboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestStatusError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    HttpRequestTooManyRequests,
    HttpRequestForbidden,
    // Specific HTTP status code errors
    HttpRequestBadRequest,          // 400 Bad Request
    HttpRequestUnauthorized,        // 401 Unauthorized
    HttpRequestNotFound,            // 404 Not Found
    HttpRequestInternalServerError, // 500 Internal Server Error
    HttpRequestBadGateway,          // 502 Bad Gateway
    HttpRequestServiceUnavailable,  // 503 Service Unavailable
    HttpRequestGatewayTimeout,      // 504 Gateway Timeout
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::HttpRequestForbidden => "Forbidden (403)",
            ErrorType::HttpRequestBadRequest => "Bad Request (400)",
            ErrorType::HttpRequestUnauthorized => "Unauthorized (401)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestInternalServerError => "Internal Server Error (500)",
            ErrorType::HttpRequestBadGateway => "Bad Gateway (502)",
            ErrorType::HttpRequestServiceUnavailable => "Service Unavailable (503)",
            ErrorType::HttpRequestGatewayTimeout => "Gateway Timeout (504)",
        }
    }
}
