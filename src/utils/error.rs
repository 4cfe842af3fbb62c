use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Upstream {url} responded with HTTP {status}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("Portfolio data unavailable: {message}")]
    UpstreamUnavailable { message: String },

    #[error("Upstream {url} returned an empty body")]
    EmptyBody { url: String },

    #[error("All status candidates failed, last error: {last_error}")]
    AllCandidatesFailed { last_error: String },

    #[error("Status monitoring is not configured")]
    StatusNotConfigured,

    #[error("Forbidden: Invalid origin")]
    InvalidOrigin,

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Contact relay unavailable: {message}")]
    RelayUnavailable { message: String },
}

impl PortfolioError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PortfolioError::InvalidOrigin => StatusCode::FORBIDDEN,
            PortfolioError::MissingField { .. } | PortfolioError::InvalidEmail => {
                StatusCode::BAD_REQUEST
            }
            PortfolioError::StatusNotConfigured => StatusCode::NOT_FOUND,
            PortfolioError::AllCandidatesFailed { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 回傳給客戶端的訊息；除驗證錯誤外一律保持籠統
    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::InvalidOrigin => "Forbidden: Invalid origin".to_string(),
            PortfolioError::MissingField { .. } => "All fields are required".to_string(),
            PortfolioError::InvalidEmail => "Invalid email format".to_string(),
            PortfolioError::StatusNotConfigured => {
                "Status monitoring is not configured".to_string()
            }
            PortfolioError::AllCandidatesFailed { .. } => {
                "Failed to reach status monitoring API".to_string()
            }
            PortfolioError::RelayUnavailable { .. } => {
                "Failed to send message. Please try again later.".to_string()
            }
            _ => "Failed to fetch portfolio data".to_string(),
        }
    }
}

impl IntoResponse for PortfolioError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("❌ {} ({})", self, status);
        } else {
            tracing::warn!("Request rejected: {} ({})", self, status);
        }

        let body = match &self {
            PortfolioError::AllCandidatesFailed { last_error } => json!({
                "error": self.user_friendly_message(),
                "detail": last_error,
            }),
            _ => json!({ "error": self.user_friendly_message() }),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_follow_taxonomy() {
        assert_eq!(PortfolioError::InvalidOrigin.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            PortfolioError::MissingField { field: "name".into() }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(PortfolioError::InvalidEmail.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            PortfolioError::AllCandidatesFailed { last_error: "boom".into() }.status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            PortfolioError::UpstreamUnavailable { message: "down".into() }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            PortfolioError::RelayUnavailable { message: "timeout".into() }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_server_errors_hide_details() {
        let err = PortfolioError::RelayUnavailable {
            message: "https://hooks.internal/secret".into(),
        };
        assert!(!err.user_friendly_message().contains("secret"));
    }
}
