//! Form server data structures.

use std::sync::Arc;

use serde::Deserialize;

use crate::batch::{BatchSettings, SubmissionRequest};

/// Shared state for the form server.
///
/// Only immutable data lives here; every form post runs its own batch.
pub struct AppState<K> {
    pub killboard: Arc<K>,
    pub settings: BatchSettings,
    /// Used when the form's password field is left empty
    pub default_password: Option<String>,
}

impl<K> AppState<K> {
    pub fn new(killboard: K, settings: BatchSettings, default_password: Option<String>) -> Self {
        Self {
            killboard: Arc::new(killboard),
            settings,
            default_password,
        }
    }
}

// Manual impl so `K` itself need not be `Clone`
impl<K> Clone for AppState<K> {
    fn clone(&self) -> Self {
        Self {
            killboard: Arc::clone(&self.killboard),
            settings: self.settings,
            default_password: self.default_password.clone(),
        }
    }
}

/// Fields posted by the form. Unchecked checkboxes are simply absent.
#[derive(Debug, Default, Deserialize)]
pub struct SubmissionForm {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub password: String,
    pub check: Option<String>,
    pub pods: Option<String>,
}

impl SubmissionForm {
    pub fn check_presence(&self) -> bool {
        self.check.as_deref() == Some("1")
    }

    pub fn include_pods(&self) -> bool {
        self.pods.as_deref() == Some("1")
    }

    /// Builds the batch request, falling back to `default_password` when the
    /// password field is empty.
    pub fn into_request(self, default_password: Option<&str>) -> SubmissionRequest {
        let check_presence = self.check_presence();
        let include_pods = self.include_pods();
        let password = if self.password.is_empty() {
            default_password.unwrap_or_default().to_string()
        } else {
            self.password
        };
        SubmissionRequest {
            content: self.content,
            password,
            check_presence,
            include_pods,
        }
    }
}
