//! Configuration constants.
//!
//! This module defines the fixed values of the submission pipeline: the time
//! budget, network timeouts, the killboard's form contract, and the strings
//! shown on the result page.

use std::time::Duration;

/// Maximum wall-clock time for one submission batch, in seconds.
/// Once exceeded, the remaining killmails are handed back for resubmission.
pub const MAX_RUN_TIME_SECS: u64 = 50;
pub const MAX_RUN_TIME: Duration = Duration::from_secs(MAX_RUN_TIME_SECS);

// Network operation timeouts
/// Per-request HTTP deadline in seconds (GET and POST)
pub const FETCH_TIMEOUT_SECS: u64 = 60;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default listen address for the form server
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Default User-Agent string for killboard requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("km_scouts/", env!("CARGO_PKG_VERSION"));

// Killmail form contract
/// Form field carrying the pilot name to add
pub const FORM_FIELD_SCOUT: &str = "scoutname";
/// Form field carrying the killboard's shared password
pub const FORM_FIELD_PASSWORD: &str = "password";
/// Form field the killboard uses to recognise the "add pilot" action
pub const FORM_FIELD_SUBMIT: &str = "scoutsubmit";
/// Value of the submit marker field
pub const FORM_SUBMIT_VALUE: &str = "add pilot";

/// Substring that marks a URL as a battle report rather than a single killmail
pub const BATTLE_REPORT_MARKER: &str = "kill_related";
/// Prefix that marks an input line as a URL
pub const URL_LINE_PREFIX: &str = "http";

// CSS selectors for the killboard layouts
/// Container holding the friendly and hostile loss tables on a battle report
pub const PILOTS_AND_SHIPS_SELECTOR: &str = "#pilots_and_ships";
/// Loss tables inside the container; the last one lists hostile losses
pub const KB_TABLE_SELECTOR: &str = ".kb-table";
/// Rows of destroyed ships inside a loss table
pub const DESTROYED_ROW_SELECTOR: &str = "tr.br-destroyed";
/// Involved parties panel on a killmail page
pub const INVOLVED_PARTIES_SELECTOR: &str = "#kl-detail-left";

// Result page strings
/// Message shown when every submission went through
pub const SUCCESS_MESSAGE: &str = "success";
/// Notice appended when the batch ran out of time
pub const TIMEOUT_NOTICE: &str = "Ran out of time, please resubmit";
/// Failure reason when the killboard's response is not recognised
pub const UNKNOWN_ERROR: &str = "Unknown error";
/// Prefix for transport fault descriptions
pub const TRANSPORT_ERROR_PREFIX: &str = "Error: ";

// Error message size limits
/// Maximum error message length in characters shown on the result page
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 500;

// HTTP status codes (for clarity and consistency)
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;
