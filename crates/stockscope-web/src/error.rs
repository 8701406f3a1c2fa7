use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use stockscope_core::{ConfigError, Endpoint, SourceError, ValidationError};
use thiserror::Error;
use tracing::debug;

/// Request-level failures, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required parameter: {name}")]
    MissingParameter { name: &'static str },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(ValidationError),

    /// Query string that could not be decoded at all, e.g. a repeated key.
    #[error("Invalid parameter: {0}")]
    MalformedQuery(String),

    #[error("Failed to fetch {endpoint}: {status_text}")]
    UpstreamFailure {
        endpoint: Endpoint,
        status_text: String,
    },
}

impl ApiError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParameter { .. }
            | Self::InvalidParameter(_)
            | Self::MalformedQuery(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::MissingParameter { name } => Self::MissingParameter { name },
            other => Self::InvalidParameter(other),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::MalformedQuery(rejection.body_text())
    }
}

impl From<SourceError> for ApiError {
    fn from(error: SourceError) -> Self {
        Self::UpstreamFailure {
            endpoint: error.endpoint(),
            status_text: error.message().to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        debug!(status = status.as_u16(), "request rejected: {self}");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Startup failures of the proxy binary, mapped to exit codes.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_maps_to_bad_request() {
        let error = ApiError::from(ValidationError::MissingParameter { name: "from" });
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "Missing required parameter: from");
    }

    #[test]
    fn upstream_failure_keeps_status_text_only() {
        let error = ApiError::from(SourceError::upstream(Endpoint::Financials, 404, "Not Found"));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "Failed to fetch financials: Not Found");
    }

    #[test]
    fn config_errors_exit_with_usage_code() {
        let error = ServerError::from(ConfigError::MissingCredential {
            vars: vec!["POLYGON_API_KEY"],
        });
        assert_eq!(error.exit_code(), 2);
    }
}
