//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, scraping, and batch failures
//! - Categorization of transport faults for log output
//!
//! Failures are split by how far they reach:
//! - **Transport faults** on a single scout submission become a failure line
//! - **Batch errors** (report or presence pages unreadable) stop the request
//! - **Initialization errors** stop the process

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{BatchError, ErrorType, InitializationError, ScrapeError};
