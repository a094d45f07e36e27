// src/presentation/http/controllers/tanah.rs
use crate::application::{
    commands::tanah::{CreateTanahCommand, DeleteTanahCommand, UpdateTanahCommand},
    dto::{TanahDto, WriteOutcome},
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
pub struct CreateTanahRequest {
    pub nama_pimpinan_jamaah: String,
    pub nama_wakif: String,
    pub lokasi: String,
    pub luas_tanah: f64,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTanahRequest {
    pub nama_pimpinan_jamaah: Option<String>,
    pub nama_wakif: Option<String>,
    pub lokasi: Option<String>,
    pub luas_tanah: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

pub async fn list_tanah(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<TanahDto>>> {
    state
        .services
        .tanah_queries
        .list(&user)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_tanah(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<TanahDto>> {
    state
        .services
        .tanah_queries
        .get(&user, id)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_tanah(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateTanahRequest>,
) -> HttpResult<Json<WriteOutcome<TanahDto>>> {
    let command = CreateTanahCommand {
        nama_pimpinan_jamaah: payload.nama_pimpinan_jamaah,
        nama_wakif: payload.nama_wakif,
        lokasi: payload.lokasi,
        luas_tanah: payload.luas_tanah,
        latitude: payload.latitude,
        longitude: payload.longitude,
    };

    state
        .services
        .tanah_commands
        .create_tanah(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_tanah(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTanahRequest>,
) -> HttpResult<Json<WriteOutcome<TanahDto>>> {
    let command = UpdateTanahCommand {
        id,
        nama_pimpinan_jamaah: payload.nama_pimpinan_jamaah,
        nama_wakif: payload.nama_wakif,
        lokasi: payload.lokasi,
        luas_tanah: payload.luas_tanah,
        latitude: payload.latitude,
        longitude: payload.longitude,
    };

    state
        .services
        .tanah_commands
        .update_tanah(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_tanah(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .tanah_commands
        .delete_tanah(&user, DeleteTanahCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
