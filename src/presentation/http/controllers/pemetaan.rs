// src/presentation/http/controllers/pemetaan.rs
use crate::application::{
    commands::pemetaan::{
        CreateFasilitasMappingCommand, CreateTanahMappingCommand, UpdateFasilitasMappingCommand,
        UpdateTanahMappingCommand,
    },
    dto::{PemetaanFasilitasDto, PemetaanTanahDto, TanahMappingCreatedDto},
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
pub struct CreateTanahMappingRequest {
    pub nama_pemetaan: String,
    pub jenis_geometri: String,
    pub geometri: serde_json::Value,
    #[serde(default)]
    pub keterangan: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTanahMappingRequest {
    pub nama_pemetaan: Option<String>,
    pub jenis_geometri: Option<String>,
    pub geometri: Option<serde_json::Value>,
    pub keterangan: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateFasilitasMappingRequest {
    pub nama_fasilitas: String,
    #[serde(default)]
    pub kategori_fasilitas: Option<String>,
    pub jenis_geometri: String,
    pub geometri: serde_json::Value,
    #[serde(default)]
    pub keterangan: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFasilitasMappingRequest {
    pub nama_fasilitas: Option<String>,
    pub kategori_fasilitas: Option<String>,
    pub jenis_geometri: Option<String>,
    pub geometri: Option<serde_json::Value>,
    pub keterangan: Option<String>,
}

pub async fn list_by_tanah(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id_tanah): Path<Uuid>,
) -> HttpResult<Json<Vec<PemetaanTanahDto>>> {
    state
        .services
        .pemetaan_queries
        .list_by_tanah(&user, id_tanah)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_tanah_mapping(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<PemetaanTanahDto>> {
    state
        .services
        .pemetaan_queries
        .get_tanah_mapping(&user, id)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_tanah_mapping(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id_tanah): Path<Uuid>,
    Json(payload): Json<CreateTanahMappingRequest>,
) -> HttpResult<Json<TanahMappingCreatedDto>> {
    let command = CreateTanahMappingCommand {
        id_tanah,
        nama_pemetaan: payload.nama_pemetaan,
        jenis_geometri: payload.jenis_geometri,
        geometri: payload.geometri,
        keterangan: payload.keterangan,
    };

    state
        .services
        .pemetaan_commands
        .create_tanah_mapping(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_tanah_mapping(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTanahMappingRequest>,
) -> HttpResult<Json<PemetaanTanahDto>> {
    let command = UpdateTanahMappingCommand {
        id,
        nama_pemetaan: payload.nama_pemetaan,
        jenis_geometri: payload.jenis_geometri,
        geometri: payload.geometri,
        keterangan: payload.keterangan,
    };

    state
        .services
        .pemetaan_commands
        .update_tanah_mapping(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_tanah_mapping(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .pemetaan_commands
        .delete_tanah_mapping(&user, id)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

pub async fn list_fasilitas_by_pemetaan(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id_pemetaan_tanah): Path<Uuid>,
) -> HttpResult<Json<Vec<PemetaanFasilitasDto>>> {
    state
        .services
        .pemetaan_queries
        .list_fasilitas_by_pemetaan(&user, id_pemetaan_tanah)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_fasilitas_mapping(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id_pemetaan_tanah): Path<Uuid>,
    Json(payload): Json<CreateFasilitasMappingRequest>,
) -> HttpResult<Json<PemetaanFasilitasDto>> {
    let command = CreateFasilitasMappingCommand {
        id_pemetaan_tanah,
        nama_fasilitas: payload.nama_fasilitas,
        kategori_fasilitas: payload.kategori_fasilitas,
        jenis_geometri: payload.jenis_geometri,
        geometri: payload.geometri,
        keterangan: payload.keterangan,
    };

    state
        .services
        .pemetaan_commands
        .create_fasilitas_mapping(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_fasilitas_mapping(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFasilitasMappingRequest>,
) -> HttpResult<Json<PemetaanFasilitasDto>> {
    let command = UpdateFasilitasMappingCommand {
        id,
        nama_fasilitas: payload.nama_fasilitas,
        kategori_fasilitas: payload.kategori_fasilitas,
        jenis_geometri: payload.jenis_geometri,
        geometri: payload.geometri,
        keterangan: payload.keterangan,
    };

    state
        .services
        .pemetaan_commands
        .update_fasilitas_mapping(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_fasilitas_mapping(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .pemetaan_commands
        .delete_fasilitas_mapping(&user, id)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
