// src/presentation/http/controllers/approvals.rs
use crate::application::dto::{ApprovalDetailDto, ApprovalDto};
use crate::domain::approval::ApprovalId;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
};
use uuid::Uuid;

pub async fn list_pending(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ApprovalDto>>> {
    state
        .services
        .approval_queries
        .list_pending(&user)
        .await
        .into_http()
        .map(Json)
}

pub async fn list_pending_by_type(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(tipe): Path<String>,
) -> HttpResult<Json<Vec<ApprovalDto>>> {
    state
        .services
        .approval_queries
        .list_pending_by_type(&user, &tipe)
        .await
        .into_http()
        .map(Json)
}

pub async fn show(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<ApprovalDetailDto>> {
    state
        .services
        .approval_queries
        .show(&user, id)
        .await
        .into_http()
        .map(Json)
}

pub async fn approve(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<ApprovalDto>> {
    state
        .services
        .approval_commands
        .approve(&user, ApprovalId::new(id))
        .await
        .into_http()
        .map(Json)
}

pub async fn reject(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<ApprovalDto>> {
    state
        .services
        .approval_commands
        .reject(&user, ApprovalId::new(id))
        .await
        .into_http()
        .map(Json)
}

pub async fn approve_update(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<ApprovalDto>> {
    state
        .services
        .approval_commands
        .approve_update(&user, ApprovalId::new(id))
        .await
        .into_http()
        .map(Json)
}

pub async fn reject_update(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<ApprovalDto>> {
    state
        .services
        .approval_commands
        .reject_update(&user, ApprovalId::new(id))
        .await
        .into_http()
        .map(Json)
}
