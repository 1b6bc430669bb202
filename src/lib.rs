//! km_scouts library: bulk-adds scouts to killboard killmails
//!
//! A user pastes killmail URLs, battle report URLs, and scout names into one
//! form. Battle reports are expanded into the killmails of their hostile
//! losses, and every scout is added to every killmail through the killboard's
//! own "add pilot" form. Work is bounded by a time budget; whatever is left
//! when it runs out is handed back for resubmission.
//!
//! # Example
//!
//! ```no_run
//! use km_scouts::{run_batch, BatchSettings, Config, HttpKillboard, SubmissionRequest, SystemClock};
//! use km_scouts::initialization::init_client;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let killboard = HttpKillboard::new(init_client(&config)?);
//! let request = SubmissionRequest {
//!     content: "https://kb.example/?a=kill_detail&kll_id=1\nSome Pilot".to_string(),
//!     password: "secret".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_batch(&killboard, &request, &BatchSettings::from(&config), &SystemClock).await?;
//! println!("{}", report.message());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

mod batch;
mod classify;
pub mod config;
mod error_handling;
mod expand;
pub mod initialization;
mod killboard;
mod parse;
mod presence;
pub mod server;
mod submit;
mod utils;

#[cfg(test)]
mod test_support;

// Re-export public API
pub use batch::{
    resubmission_payload, run_batch, BatchReport, BatchSettings, BatchState, Clock,
    OutcomeCounts, SubmissionRequest, SystemClock, TimeBudget,
};
pub use classify::{classify_lines, is_battle_report, ClassifiedInput};
pub use config::{BudgetCheck, Config, LogFormat, LogLevel, Opt, ReportFailure};
pub use error_handling::{BatchError, InitializationError, ScrapeError};
pub use killboard::{HttpKillboard, Killboard};
pub use submit::{classify_response, ScoutResult, SubmissionOutcome};
