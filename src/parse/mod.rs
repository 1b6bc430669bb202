//! HTML parsing of killboard pages.
//!
//! This module extracts:
//! - Hostile loss killmail links from battle reports
//! - The involved parties table from killmails
//! - Error messages from "add pilot" responses
//!
//! Document parsing is done using CSS selectors via the `scraper` crate.

mod battle_report;
mod killmail;
mod response;

// Re-export public API
pub use battle_report::{extract_hostile_losses, LossLinks};
pub use killmail::extract_involved_parties;
pub use response::extract_error_message;
