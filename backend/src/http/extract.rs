//! Request extractors: bearer-token identity, plus JSON, query and multipart
//! wrappers whose rejections are API errors.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
        FromRequest, FromRequestParts, Multipart, Query, Request,
    },
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;

use super::error::AppError;
use super::state::AppState;
use crate::auth::{require_admin, AuthError};
use crate::models::User;

/// The caller identified by a valid `Authorization: Bearer` token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

/// An [`AuthUser`] whose role may change dashboard data.
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let value = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| AppError::from(AuthError::MissingToken))?
        .to_str()
        .map_err(|_| AppError::from(AuthError::InvalidToken))?;

    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .unwrap_or(value)
        .trim();
    if token.is_empty() {
        return Err(AuthError::MissingToken.into());
    }
    Ok(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let token = bearer_token(parts)?;
        let user = state.tokens.authenticate(token)?;
        Ok(AuthUser(user))
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;
        if let Err(e) = require_admin(&user) {
            tracing::warn!("Rejected data change by {} ({})", user.email, user.role);
            return Err(e.into());
        }
        Ok(AdminUser(user))
    }
}

/// `Json<T>` whose rejections are `400` API errors, or `413` past the body limit.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, AppError> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => Err(AppError::BadRequest(
                "Expected a JSON body (Content-Type: application/json)".to_string(),
            )),
            Err(rejection) => Err(rejection_error(rejection.status(), rejection.body_text())),
        }
    }
}

/// `Query<T>` whose rejections are `400` API errors.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, AppError> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| ApiQuery(value))
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
    }
}

/// `Multipart` whose rejections (wrong content type, missing boundary,
/// oversized body) are API errors.
pub struct ApiMultipart(pub Multipart);

impl<S> FromRequest<S> for ApiMultipart
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, AppError> {
        match Multipart::from_request(req, state).await {
            Ok(multipart) => Ok(ApiMultipart(multipart)),
            Err(MultipartRejection::InvalidBoundary(_)) => Err(AppError::BadRequest(
                "Expected a multipart/form-data body with a `file` field".to_string(),
            )),
            Err(rejection) => Err(rejection_error(rejection.status(), rejection.body_text())),
        }
    }
}

fn rejection_error(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::BadRequest(message)
    }
}

/// Bytes of the multipart field named `file`.
pub async fn read_file_field(
    ApiMultipart(mut multipart): ApiMultipart,
) -> Result<Vec<u8>, AppError> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(AppError::BadRequest("No file provided".to_string())),
            Err(e) => return Err(multipart_error(e)),
        };
        if field.name() == Some("file") {
            let bytes = field.bytes().await.map_err(multipart_error)?;
            return Ok(bytes.to_vec());
        }
    }
}

fn multipart_error(e: MultipartError) -> AppError {
    rejection_error(e.status(), e.body_text())
}
