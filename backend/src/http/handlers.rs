//! HTTP request handlers.
//!
//! Each handler resolves its extractors (identity first, body last), calls a
//! service function and wraps the result. Admin-only handlers take
//! [`AdminUser`], so an unauthorised request never reaches the store.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::*;
use super::error::AppError;
use super::extract::{read_file_field, AdminUser, ApiJson, ApiMultipart, ApiQuery, AuthUser};
use super::state::AppState;
use crate::export::{report_file_name, Attachment};
use crate::models::{AdminUpdate, Dataset, DatasetRecord, DatasetUpdate, EhsUpdate, Month};
use crate::services;
use crate::summary::current_month;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn csv_attachment(file_name: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                Attachment(file_name).to_string(),
            ),
        ],
        body,
    )
        .into_response()
}

// =============================================================================
// Health
// =============================================================================

/// Health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = match state.repository.health_check().await {
        Ok(true) => "healthy",
        _ => "unhealthy",
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        store: store.to_string(),
    })
}

// =============================================================================
// Datasets
// =============================================================================

async fn read_dataset(
    state: &AppState,
    dataset: Dataset,
) -> HandlerResult<DataResponse<DatasetRecord>> {
    let data = services::read(state.repository.as_ref(), dataset).await?;
    Ok(Json(DataResponse { data }))
}

async fn upload_dataset(
    state: &AppState,
    user: &AdminUser,
    dataset: Dataset,
    multipart: ApiMultipart,
) -> HandlerResult<UploadResponse> {
    let bytes = read_file_field(multipart).await?;
    tracing::info!(
        "{} uploading {} bytes of {} data",
        user.0.email,
        bytes.len(),
        dataset
    );

    let uploaded = services::upload_csv(state.repository.as_ref(), dataset, &bytes).await?;
    let message = match dataset {
        Dataset::Admin => "Admin data uploaded successfully",
        Dataset::Ehs => "EHS data uploaded successfully",
    };
    Ok(Json(UploadResponse {
        data: uploaded.data,
        message: message.to_string(),
        report: uploaded.report,
    }))
}

async fn update_dataset(state: &AppState, update: DatasetUpdate) -> HandlerResult<UpdateResponse> {
    let message = match update.dataset() {
        Dataset::Admin => "KPI value saved",
        Dataset::Ehs => "EHS value saved",
    };
    let updated = services::apply_update(state.repository.as_ref(), &update).await?;
    Ok(Json(UpdateResponse {
        data: updated.data,
        message: message.to_string(),
        report: updated.report,
    }))
}

async fn export_dataset(state: &AppState, dataset: Dataset) -> Result<Response, AppError> {
    let csv = services::export_csv(state.repository.as_ref(), dataset).await?;
    Ok(csv_attachment(dataset.export_file_name(), csv))
}

/// `GET /v1/kpi`
pub async fn get_kpi(
    State(state): State<AppState>,
) -> HandlerResult<DataResponse<DatasetRecord>> {
    read_dataset(&state, Dataset::Admin).await
}

/// `POST /v1/kpi/upload`
pub async fn upload_kpi(
    State(state): State<AppState>,
    admin: AdminUser,
    multipart: ApiMultipart,
) -> HandlerResult<UploadResponse> {
    upload_dataset(&state, &admin, Dataset::Admin, multipart).await
}

/// `POST /v1/kpi/manual`
pub async fn manual_kpi(
    State(state): State<AppState>,
    _admin: AdminUser,
    ApiJson(update): ApiJson<AdminUpdate>,
) -> HandlerResult<UpdateResponse> {
    update_dataset(&state, DatasetUpdate::Admin(update)).await
}

/// `GET /v1/kpi/export/csv`
pub async fn export_kpi_csv(State(state): State<AppState>) -> Result<Response, AppError> {
    export_dataset(&state, Dataset::Admin).await
}

/// `GET /v1/ehs`
pub async fn get_ehs(
    State(state): State<AppState>,
) -> HandlerResult<DataResponse<DatasetRecord>> {
    read_dataset(&state, Dataset::Ehs).await
}

/// `POST /v1/ehs/upload`
pub async fn upload_ehs(
    State(state): State<AppState>,
    admin: AdminUser,
    multipart: ApiMultipart,
) -> HandlerResult<UploadResponse> {
    upload_dataset(&state, &admin, Dataset::Ehs, multipart).await
}

/// `POST /v1/ehs/manual`
pub async fn manual_ehs(
    State(state): State<AppState>,
    _admin: AdminUser,
    ApiJson(update): ApiJson<EhsUpdate>,
) -> HandlerResult<UpdateResponse> {
    update_dataset(&state, DatasetUpdate::Ehs(update)).await
}

/// `GET /v1/ehs/export/csv`
pub async fn export_ehs_csv(State(state): State<AppState>) -> Result<Response, AppError> {
    export_dataset(&state, Dataset::Ehs).await
}

/// `POST /v1/update` with a `{category, data}` body.
pub async fn post_update(
    State(state): State<AppState>,
    _admin: AdminUser,
    ApiJson(update): ApiJson<DatasetUpdate>,
) -> HandlerResult<UpdateResponse> {
    update_dataset(&state, update).await
}

// =============================================================================
// Report & summary
// =============================================================================

/// `GET /v1/export/report`
pub async fn export_report(State(state): State<AppState>) -> Result<Response, AppError> {
    let csv = services::dashboard_report(state.repository.as_ref()).await?;
    let file_name = report_file_name(chrono::Local::now().date_naive());
    Ok(csv_attachment(&file_name, csv))
}

/// `GET /v1/summary?month=mar`
pub async fn get_summary(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SummaryQuery>,
) -> HandlerResult<KpiSummary> {
    let month = match query.month.as_deref() {
        Some(raw) if !raw.trim().is_empty() => {
            raw.parse::<Month>().map_err(AppError::BadRequest)?
        }
        _ => current_month(),
    };
    let summary = services::kpi_summary(state.repository.as_ref(), month).await?;
    Ok(Json(summary))
}

// =============================================================================
// Accounts
// =============================================================================

/// `POST /v1/auth/signup`
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<SignupInput>,
) -> HandlerResult<Session> {
    let session = services::signup(
        state.repository.as_ref(),
        &state.tokens,
        input,
        state.config.auth.pbkdf2_iterations,
    )
    .await?;
    tracing::info!("New account {} ({})", session.user.email, session.user.role);
    Ok(Json(session))
}

/// `POST /v1/auth/login`
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> HandlerResult<Session> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }
    let session = services::login(
        state.repository.as_ref(),
        &state.tokens,
        &request.email,
        &request.password,
        state.config.auth.pbkdf2_iterations,
    )
    .await?;
    Ok(Json(session))
}

/// `GET /v1/auth/me`
pub async fn me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> HandlerResult<UserResponse> {
    let user = services::current_user(state.repository.as_ref(), user.id).await?;
    Ok(Json(UserResponse { user }))
}
