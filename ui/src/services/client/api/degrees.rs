//! Degree collection operations.

use tracing::{error, info, instrument};

use crate::services::client::errors::{error_from_response, ClientError, ClientResult};
use crate::services::client::types::{Degree, NewDegree};
use crate::services::client::ApiClient;

/// Fetch every registered degree.
#[instrument(skip(client), err)]
pub async fn list_degrees_impl(client: &ApiClient) -> ClientResult<Vec<Degree>> {
    let url = client.endpoint("degrees");

    let response = client
        .http_client
        .get(&url)
        .send()
        .await
        .map_err(|e| ClientError::Network {
            message: e.to_string(),
        })?;

    let status = response.status();
    if status.is_success() {
        let degrees: Vec<Degree> = response.json().await.map_err(|e| ClientError::Decode {
            message: e.to_string(),
        })?;
        info!("Fetched {} degrees", degrees.len());
        Ok(degrees)
    } else {
        let error_text = response.text().await.unwrap_or_default();
        error!("Degree list request failed: {}", error_text);
        Err(error_from_response(status, &error_text))
    }
}

/// Register a degree against an existing university.
#[instrument(skip(client, request), err)]
pub async fn create_degree_impl(client: &ApiClient, request: NewDegree) -> ClientResult<()> {
    let url = client.endpoint("degree");

    let response = client
        .http_client
        .post(&url)
        .json(&request)
        .send()
        .await
        .map_err(|e| ClientError::Network {
            message: e.to_string(),
        })?;

    let status = response.status();
    if status.is_success() {
        info!("Degree registered");
        Ok(())
    } else {
        let error_text = response.text().await.unwrap_or_default();
        error!("Degree registration failed: {}", error_text);
        Err(error_from_response(status, &error_text))
    }
}
