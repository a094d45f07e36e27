// src/presentation/http/controllers/activity.rs
use crate::application::dto::ActivityLogDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Query,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ActivityListParams {
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub model_type: Option<String>,
}

pub async fn list_activity(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<ActivityListParams>,
) -> HttpResult<Json<Vec<ActivityLogDto>>> {
    state
        .services
        .activity_queries
        .list(&user, params.limit, params.model_type.as_deref())
        .await
        .into_http()
        .map(Json)
}
