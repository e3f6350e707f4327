//! Response types and error handling for API endpoints
//!
//! Provides unified error handling and JSON response formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use favorites_common::{status_for_kind, AppError};
use favorites_core::DomainError;
use favorites_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Missing authorization header")]
    MissingAuth,
}

fn status_from_u16(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => status_from_u16(e.status_code()),
            Self::Service(e) => status_from_u16(e.status_code()),
            Self::Domain(e) => status_from_u16(status_for_kind(e.kind())),
            Self::Validation(_)
            | Self::InvalidPath(_)
            | Self::InvalidQuery(_)
            | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::MissingAuth => StatusCode::UNAUTHORIZED,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidQuery(_) => "INVALID_QUERY_PARAMETER",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::MissingAuth => "MISSING_AUTHORIZATION",
        }
    }

    /// The domain error behind this failure, if any
    fn domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) | Self::App(AppError::Domain(e)) => Some(e),
            Self::Service(e) => e.as_domain(),
            _ => None,
        }
    }

    /// Structured details for errors that carry more than a message
    fn details(&self) -> Option<serde_json::Value> {
        if let Self::Validation(errors) = self {
            return serde_json::to_value(errors).ok();
        }
        match self.domain() {
            Some(DomainError::ForeignFavorites(ids)) => {
                Some(serde_json::json!({ "favorite_ids": ids }))
            }
            _ => None,
        }
    }

    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail for API responses
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Server errors are logged in full and reported generically
        let message = if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message,
                details: self.details(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}

/// No content response (204)
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use favorites_core::{FavoriteId, GroupId, ShareId};

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(ApiError::MissingAuth.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::invalid_path("test").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::App(AppError::TokenExpired).status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_domain_error_statuses() {
        let cases = [
            (DomainError::FavoriteNotFound(FavoriteId::new()), StatusCode::NOT_FOUND),
            (DomainError::DuplicateUrl, StatusCode::CONFLICT),
            (DomainError::DuplicateGroupName("a".into()), StatusCode::CONFLICT),
            (DomainError::ForeignFavorites(vec![]), StatusCode::FORBIDDEN),
            (DomainError::IncorrectSharePassword, StatusCode::UNAUTHORIZED),
            (
                DomainError::InvalidTargetGroup(GroupId::new()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (DomainError::ShareExpired, StatusCode::GONE),
            (DomainError::ShareNotFound(ShareId::new()), StatusCode::NOT_FOUND),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::Domain(err).status_code(), status);
        }
    }

    #[test]
    fn test_service_error_keeps_domain_status() {
        let err = ApiError::Service(ServiceError::Domain(DomainError::ShareExpired));
        assert_eq!(err.status_code(), StatusCode::GONE);
        assert_eq!(err.error_code(), "SHARE_EXPIRED");
    }

    #[test]
    fn test_api_error_codes() {
        assert_eq!(ApiError::MissingAuth.error_code(), "MISSING_AUTHORIZATION");
        assert_eq!(
            ApiError::invalid_path("test").error_code(),
            "INVALID_PATH_PARAMETER"
        );
    }

    #[test]
    fn test_foreign_favorites_details_list_ids() {
        let id = FavoriteId::new();
        let err = ApiError::Service(ServiceError::Domain(DomainError::ForeignFavorites(vec![id])));
        let details = err.details().unwrap();
        assert_eq!(details["favorite_ids"][0], serde_json::json!(id.to_string()));
    }

    #[tokio::test]
    async fn test_internal_errors_hide_their_message() {
        let err = ApiError::Domain(DomainError::DatabaseError("connection refused".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "DATABASE_ERROR");
        assert_eq!(body["error"]["message"], "Internal server error");
    }
}
