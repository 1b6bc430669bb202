//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of the
//! server: the logger and the HTTP client used to talk to the killboard.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
