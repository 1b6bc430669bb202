//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_USER_AGENT, FETCH_TIMEOUT_SECS, MAX_RUN_TIME_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Where the time budget is polled during a batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum BudgetCheck {
    /// Before each killmail; a started killmail always finishes all its scouts
    #[default]
    PerRecord,
    /// Before each scout submission; a killmail may be split across requests
    PerScout,
}

/// What happens when a battle report cannot be expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFailure {
    /// The whole request fails
    #[default]
    Abort,
    /// The report becomes one failure line and the batch carries on
    Skip,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use km_scouts::Config;
///
/// let config = Config {
///     max_run_time_secs: 25,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the form server listens on
    pub bind: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Password used when a form submission leaves the password empty
    pub password: Option<String>,

    /// Time budget for a single batch in seconds
    pub max_run_time_secs: u64,

    /// Per-request timeout in seconds
    pub fetch_timeout_secs: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Where the time budget is polled
    pub budget_check: BudgetCheck,

    /// Handling of battle reports that fail to expand
    pub report_failure: ReportFailure,
}

impl Config {
    /// The batch time budget as a `Duration`.
    pub fn max_run_time(&self) -> Duration {
        Duration::from_secs(self.max_run_time_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDR.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            password: None,
            max_run_time_secs: MAX_RUN_TIME_SECS,
            fetch_timeout_secs: FETCH_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            budget_check: BudgetCheck::PerRecord,
            report_failure: ReportFailure::Abort,
        }
    }
}

/// Command-line options.
///
/// Every option can also be set through the environment (or a `.env` file).
///
/// ```bash
/// # Serve on all interfaces with a 30 second budget
/// km_scouts --bind 0.0.0.0:8080 --max-run-time-secs 30
///
/// # Keep going when a battle report cannot be read
/// KM_SCOUTS_REPORT_FAILURE=skip km_scouts
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "km_scouts",
    about = "Serves a form that adds scouts to killmails and battle reports."
)]
pub struct Opt {
    /// Address to listen on
    #[arg(long, env = "KM_SCOUTS_BIND", default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, env = "KM_SCOUTS_LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, env = "KM_SCOUTS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Default killboard password, used when the form field is left empty
    #[arg(long, env = "KM_SCOUTS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Time budget per submission in seconds
    #[arg(long, env = "KM_SCOUTS_MAX_RUN_TIME_SECS", default_value_t = MAX_RUN_TIME_SECS)]
    pub max_run_time_secs: u64,

    /// Per-request timeout in seconds
    #[arg(long, env = "KM_SCOUTS_FETCH_TIMEOUT_SECS", default_value_t = FETCH_TIMEOUT_SECS)]
    pub fetch_timeout_secs: u64,

    /// HTTP User-Agent header value
    #[arg(long, env = "KM_SCOUTS_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Where the time budget is checked: per-record|per-scout
    #[arg(long, env = "KM_SCOUTS_BUDGET_CHECK", value_enum, default_value_t = BudgetCheck::PerRecord)]
    pub budget_check: BudgetCheck,

    /// Battle report expansion failures: abort|skip
    #[arg(long, env = "KM_SCOUTS_REPORT_FAILURE", value_enum, default_value_t = ReportFailure::Abort)]
    pub report_failure: ReportFailure,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            bind: opt.bind,
            log_level: opt.log_level,
            log_format: opt.log_format,
            password: opt.password.filter(|p| !p.is_empty()),
            max_run_time_secs: opt.max_run_time_secs,
            fetch_timeout_secs: opt.fetch_timeout_secs,
            user_agent: opt.user_agent,
            budget_check: opt.budget_check,
            report_failure: opt.report_failure,
        }
    }
}
