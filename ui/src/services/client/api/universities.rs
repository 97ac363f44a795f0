//! University collection operations.

use reqwest::multipart::{Form, Part};
use tracing::{error, info, instrument};

use crate::console_debug;
use crate::services::client::errors::{error_from_response, ClientError, ClientResult};
use crate::services::client::types::{NewUniversity, University};
use crate::services::client::ApiClient;

/// Fetch every registered university.
#[instrument(skip(client), err)]
pub async fn list_universities_impl(client: &ApiClient) -> ClientResult<Vec<University>> {
    let url = client.endpoint("universities");

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
        let universities: Vec<University> =
            response.json().await.map_err(|e| ClientError::Decode {
                message: e.to_string(),
            })?;
        info!("Fetched {} universities", universities.len());
        Ok(universities)
    } else {
        let error_text = response.text().await.unwrap_or_default();
        error!("University list request failed: {}", error_text);
        Err(error_from_response(status, &error_text))
    }
}

/// Register a university, uploading its logo as a multipart file part.
#[instrument(skip(client, request), err)]
pub async fn create_university_impl(
    client: &ApiClient,
    request: NewUniversity,
) -> ClientResult<()> {
    let url = client.endpoint("university");
    let NewUniversity {
        name,
        location,
        email,
        logo,
    } = request;

    console_debug!(
        "Uploading university logo {} ({} bytes)",
        logo.filename,
        logo.bytes.len()
    );

    let logo_part = Part::bytes(logo.bytes)
        .file_name(logo.filename)
        .mime_str(&logo.mime)
        .map_err(|e| ClientError::Network {
            message: format!("could not encode logo upload: {e}"),
        })?;
    let form = Form::new()
        .text("name", name)
        .text("location", location)
        .text("email", email)
        .part("logo", logo_part);

    let response = client
        .http_client
        .post(&url)
        .multipart(form)
        .send()
        .await
        .map_err(|e| ClientError::Network {
            message: e.to_string(),
        })?;

    let status = response.status();
    if status.is_success() {
        info!("University registered");
        Ok(())
    } else {
        let error_text = response.text().await.unwrap_or_default();
        error!("University registration failed: {}", error_text);
        Err(error_from_response(status, &error_text))
    }
}
