//! API error taxonomy and the client-facing error envelope
//!
//! Every failure leaving this service is translated into a uniform JSON
//! envelope `{statusCode, message}`. Errors raised by this crate carry
//! their message verbatim; anything uncategorized gets a generic message
//! so internal diagnostic detail never leaks to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced to API clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller supplied a missing or invalid parameter
    #[error("{0}")]
    InvalidArgument(String),

    /// The search engine reported an invalid response
    #[error("{0}")]
    Upstream(String),

    /// The health probe found the engine unavailable
    #[error("{0}")]
    ServiceUnavailable(String),

    /// Anything unexpected; the detail is logged, never returned
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) | Self::ServiceUnavailable(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// JSON error envelope returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    pub status_code: u16,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            Self::Internal(err) => {
                tracing::error!("unhandled error: {:#}", err);
                "An unexpected error occurred".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorMessage {
            status_code: status.as_u16(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let err = ApiError::InvalidArgument("You must supply a search term".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = ApiError::Upstream("Error connecting to search servers".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = ApiError::ServiceUnavailable("Service not healthy".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = ApiError::Internal(anyhow::anyhow!("boom"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_message_passthrough() {
        let err = ApiError::InvalidArgument("Not a valid language code.".into());
        assert_eq!(err.to_string(), "Not a valid language code.");
    }

    #[test]
    fn test_envelope_shape() {
        let body = ErrorMessage {
            status_code: 400,
            message: "You must supply a search term".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["statusCode"], 400);
        assert_eq!(json["message"], "You must supply a search term");
    }
}
