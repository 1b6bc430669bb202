//! Utility functions.
//!
//! This module provides:
//! - String sanitization and HTML escaping for the result page
//! - CSS selector parsing utilities

pub mod sanitize;
mod selector;

pub use selector::{parse_selector_unsafe, parse_selector_with_fallback};
