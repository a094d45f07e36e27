// src/presentation/http/controllers/sertifikat.rs
use crate::application::{
    commands::sertifikat::{
        CreateSertifikatCommand, DeleteSertifikatCommand, UpdateSertifikatCommand,
    },
    dto::{SertifikatDto, WriteOutcome},
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
pub struct CreateSertifikatRequest {
    pub id_tanah: Uuid,
    #[serde(default)]
    pub no_dokumen: Option<String>,
    pub jenis_sertifikat: String,
    #[serde(default)]
    pub dokumen: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSertifikatRequest {
    pub no_dokumen: Option<String>,
    pub jenis_sertifikat: Option<String>,
    pub status_pengajuan: Option<String>,
    pub dokumen: Option<String>,
}

pub async fn list_by_tanah(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id_tanah): Path<Uuid>,
) -> HttpResult<Json<Vec<SertifikatDto>>> {
    state
        .services
        .sertifikat_queries
        .list_by_tanah(&user, id_tanah)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_sertifikat(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<SertifikatDto>> {
    state
        .services
        .sertifikat_queries
        .get(&user, id)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_sertifikat(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateSertifikatRequest>,
) -> HttpResult<Json<WriteOutcome<SertifikatDto>>> {
    let command = CreateSertifikatCommand {
        id_tanah: payload.id_tanah,
        no_dokumen: payload.no_dokumen,
        jenis_sertifikat: payload.jenis_sertifikat,
        dokumen: payload.dokumen,
    };

    state
        .services
        .sertifikat_commands
        .create_sertifikat(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_sertifikat(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSertifikatRequest>,
) -> HttpResult<Json<WriteOutcome<SertifikatDto>>> {
    let command = UpdateSertifikatCommand {
        id,
        no_dokumen: payload.no_dokumen,
        jenis_sertifikat: payload.jenis_sertifikat,
        status_pengajuan: payload.status_pengajuan,
        dokumen: payload.dokumen,
    };

    state
        .services
        .sertifikat_commands
        .update_sertifikat(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_sertifikat(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .sertifikat_commands
        .delete_sertifikat(&user, DeleteSertifikatCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
