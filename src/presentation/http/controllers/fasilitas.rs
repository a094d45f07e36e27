// src/presentation/http/controllers/fasilitas.rs
use crate::application::{
    commands::fasilitas::{CreateFasilitasCommand, UpdateFasilitasCommand},
    dto::FasilitasDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateFasilitasRequest {
    pub id_pemetaan_fasilitas: Uuid,
    pub jenis_fasilitas: String,
    pub nama_fasilitas: String,
    #[serde(default)]
    pub keterangan: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFasilitasRequest {
    pub jenis_fasilitas: Option<String>,
    pub nama_fasilitas: Option<String>,
    pub keterangan: Option<String>,
}

pub async fn list_fasilitas(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<FasilitasDto>>> {
    state
        .services
        .fasilitas_queries
        .list(&user)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_fasilitas(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<FasilitasDto>> {
    state
        .services
        .fasilitas_queries
        .get(&user, id)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_fasilitas(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateFasilitasRequest>,
) -> HttpResult<Json<FasilitasDto>> {
    let command = CreateFasilitasCommand {
        id_pemetaan_fasilitas: payload.id_pemetaan_fasilitas,
        jenis_fasilitas: payload.jenis_fasilitas,
        nama_fasilitas: payload.nama_fasilitas,
        keterangan: payload.keterangan,
    };

    state
        .services
        .fasilitas_commands
        .create_fasilitas(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_fasilitas(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFasilitasRequest>,
) -> HttpResult<Json<FasilitasDto>> {
    let command = UpdateFasilitasCommand {
        id,
        jenis_fasilitas: payload.jenis_fasilitas,
        nama_fasilitas: payload.nama_fasilitas,
        keterangan: payload.keterangan,
    };

    state
        .services
        .fasilitas_commands
        .update_fasilitas(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_fasilitas(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .fasilitas_commands
        .delete_fasilitas(&user, id)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
