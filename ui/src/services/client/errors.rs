use reqwest::StatusCode;
use thiserror::Error;

use super::types::ErrorBody;

/// Errors surfaced by the registry client.
///
/// The UI reduces every failure to a single display string, so the variants
/// only distinguish where the message came from: the transport, the server's
/// `error` payload, or a success body that failed to decode.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The request never produced a usable response.
    #[error("{message}")]
    Network { message: String },

    /// The server answered with a non-success status.
    #[error("{message}")]
    Server { message: String },

    /// A success response carried a body we could not decode.
    #[error("invalid response body: {message}")]
    Decode { message: String },
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Reduces a non-success response to a [`ClientError`].
///
/// The backend reports failures as `{"error": "..."}`; when that field is
/// present it becomes the displayed message verbatim. Otherwise the raw body
/// text is used, falling back to the status line for empty bodies.
pub(crate) fn error_from_response(status: StatusCode, body: &str) -> ClientError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.is_empty() => ClientError::Server {
            message: parsed.error,
        },
        _ if !body.trim().is_empty() => ClientError::Server {
            message: body.to_string(),
        },
        _ => ClientError::Server {
            message: format!("request failed with status {status}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_field_is_displayed_verbatim() {
        let error = error_from_response(
            StatusCode::BAD_REQUEST,
            r#"{"error": "university name already exists"}"#,
        );
        assert_eq!(error.to_string(), "university name already exists");
    }

    #[test]
    fn non_json_body_is_displayed_raw() {
        let error = error_from_response(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(error.to_string(), "boom");
    }

    #[test]
    fn empty_body_falls_back_to_status() {
        let error = error_from_response(StatusCode::NOT_FOUND, "");
        assert_eq!(error.to_string(), "request failed with status 404 Not Found");
    }

    #[test]
    fn json_without_error_field_uses_raw_body() {
        let error = error_from_response(StatusCode::BAD_GATEWAY, r#"{"detail": "nope"}"#);
        assert_eq!(error.to_string(), r#"{"detail": "nope"}"#);
    }

    #[test]
    fn network_errors_display_transport_text() {
        let error = ClientError::Network {
            message: "error sending request".to_string(),
        };
        assert_eq!(error.to_string(), "error sending request");
    }
}
