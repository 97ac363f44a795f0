//! Backend endpoint configuration.
//!
//! The registry backend lives at a fixed base URL; uploaded logos are served
//! from a separate static asset host. Both are plain serde structs so a
//! deployment can swap them without touching the client code.

use serde::{Deserialize, Serialize};

/// Default REST API base URL for local development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Default host serving uploaded logo files.
pub const DEFAULT_ASSET_BASE_URL: &str = "http://localhost:3000";

/// Endpoint configuration for the registry backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API.
    pub base_url: String,
    /// Base URL of the static host serving uploaded files.
    pub asset_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Absolute URL of an uploaded logo, given the filename stored on a
    /// university record.
    pub fn logo_url(&self, logo: &str) -> String {
        format!("{}/uploads/{}", self.asset_base_url.trim_end_matches('/'), logo)
    }
}
