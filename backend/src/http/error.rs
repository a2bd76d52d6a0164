//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::AuthError;
use crate::db::repository::RepositoryError;
use crate::services::ServiceError;

/// Message returned for every 500; details go to the log only.
const INTERNAL_MESSAGE: &str = "Internal server error";

/// API error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message
    pub error: String,
    /// Error code for programmatic handling
    pub code: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// No token, or a token that does not verify
    Unauthenticated(String),
    /// Valid token, insufficient role
    Forbidden(String),
    /// Missing file/body or malformed input
    BadRequest(String),
    /// Body over the configured limit
    PayloadTooLarge(String),
    /// Internal server error
    Internal(String),
    /// Repository error
    Repository(RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Unauthenticated(msg) => (
                StatusCode::UNAUTHORIZED,
                ApiError::new("UNAUTHENTICATED", msg),
            ),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, ApiError::new("FORBIDDEN", msg)),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("BAD_REQUEST", msg),
            ),
            AppError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ApiError::new("PAYLOAD_TOO_LARGE", msg),
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("INTERNAL_ERROR", INTERNAL_MESSAGE),
                )
            }
            AppError::Repository(e) => match e {
                RepositoryError::Conflict { .. } => (
                    StatusCode::CONFLICT,
                    ApiError::new("CONFLICT", e.message()),
                ),
                RepositoryError::ValidationError { .. } => (
                    StatusCode::BAD_REQUEST,
                    ApiError::new("BAD_REQUEST", e.message()),
                ),
                RepositoryError::InternalError { .. } => {
                    tracing::error!("Repository error: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ApiError::new("REPOSITORY_ERROR", INTERNAL_MESSAGE),
                    )
                }
            },
        };

        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken | AuthError::InvalidToken | AuthError::InvalidCredentials => {
                AppError::Unauthenticated(err.to_string())
            }
            AuthError::Forbidden { .. } => {
                AppError::Forbidden("Unauthorized. Admin access required.".to_string())
            }
            AuthError::MalformedHash | AuthError::Encoding(_) => AppError::Internal(err.to_string()),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => AppError::BadRequest(msg),
            ServiceError::Auth(e) => e.into(),
            ServiceError::Repository(e) => e.into(),
            ServiceError::Export(e) => AppError::Internal(e.to_string()),
            ServiceError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: AppError) -> (StatusCode, ApiError) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_internal_details_are_not_leaked() {
        let (status, body) = body_of(AppError::Internal("disk on fire".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Internal server error");
        assert_eq!(body.code, "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn test_repository_error_statuses() {
        let (status, body) = body_of(RepositoryError::conflict("User already exists").into()).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.error, "User already exists");

        let (status, _) = body_of(RepositoryError::internal("lock").into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_auth_error_statuses() {
        let (status, _) = body_of(AuthError::InvalidToken.into()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = body_of(AuthError::MissingToken.into()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "No token provided");
        assert_eq!(body.code, "UNAUTHENTICATED");

        let (status, body) = body_of(
            AuthError::Forbidden {
                required: crate::models::UserRole::Admin,
            }
            .into(),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.error, "Unauthorized. Admin access required.");
    }
}
