//! API Configuration
//!
//! Where the settings endpoints live and how requests authenticate.

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Connection settings for the settings REST API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    /// API root; collection paths are appended as `/settings/{collection}`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token sent with every request when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_token: None,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.auth_token = if token.is_empty() { None } else { Some(token) };
        self
    }

    /// Parses a JSON config document, filling absent keys with defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Base URL without trailing slashes
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
