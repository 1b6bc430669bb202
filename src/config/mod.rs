//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (time budget, timeouts, form fields, selectors)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{BudgetCheck, Config, LogFormat, LogLevel, Opt, ReportFailure};
