// Client-side access to the registry backend.
//
// This module provides the full REST surface the UI consumes:
// - collection reads for universities and degrees
// - university registration (multipart logo upload)
// - degree registration (JSON payload)
//
// The backend itself is out of scope; everything here runs in the browser.

pub mod api;
pub mod errors;
pub mod types;

// Re-export core types for easy access
pub use errors::{ClientError, ClientResult};
pub use types::{Degree, ErrorBody, LogoFile, NewDegree, NewUniversity, University};

use reqwest::Client;

use crate::services::config::ApiConfig;

/// Client for registry REST operations.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) http_client: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client against the default backend endpoints.
    pub fn new() -> Self {
        Self::with_config(ApiConfig::default())
    }

    /// Create a client against explicit endpoints.
    pub fn with_config(config: ApiConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    /// Fetch all universities.
    pub async fn list_universities(&self) -> ClientResult<Vec<University>> {
        api::universities::list_universities_impl(self).await
    }

    /// Register a university with its logo file.
    pub async fn create_university(&self, request: NewUniversity) -> ClientResult<()> {
        api::universities::create_university_impl(self, request).await
    }

    /// Fetch all degrees.
    pub async fn list_degrees(&self) -> ClientResult<Vec<Degree>> {
        api::degrees::list_degrees_impl(self).await
    }

    /// Register a degree.
    pub async fn create_degree(&self, request: NewDegree) -> ClientResult<()> {
        api::degrees::create_degree_impl(self, request).await
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_url_and_path() {
        let client = ApiClient::new();
        assert_eq!(client.endpoint("degrees"), "http://localhost:5000/degrees");
    }

    #[test]
    fn endpoint_tolerates_trailing_slash_in_base() {
        let client = ApiClient::with_config(ApiConfig {
            base_url: "https://registry.example.com/".to_string(),
            ..ApiConfig::default()
        });
        assert_eq!(
            client.endpoint("university"),
            "https://registry.example.com/university"
        );
    }
}
