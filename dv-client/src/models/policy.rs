use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default)]
pub struct TurnOnPolicyV2Params {
    pub status: Option<String>,
    pub headers: Option<HashMap<String, String>>,
}

impl TurnOnPolicyV2Params {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Default::default()
        }
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheckPolicyStatusV2Params {
    pub headers: Option<HashMap<String, String>>,
}

impl CheckPolicyStatusV2Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Policy enforcement state. Both the toggle and the status check return
/// this same single-field payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyStatus {
    pub status: String,
}

impl PolicyStatus {
    pub fn is_enabled(&self) -> bool {
        self.status.eq_ignore_ascii_case("enabled")
    }
}
