// src/presentation/http/controllers/inventaris.rs
use crate::application::{
    commands::inventaris::{CreateInventarisCommand, UpdateInventarisCommand},
    dto::InventarisDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateInventarisRequest {
    pub id_fasilitas: Uuid,
    pub nama_barang: String,
    #[serde(default)]
    pub kode_barang: Option<String>,
    pub satuan: String,
    pub jumlah: i32,
    #[serde(default)]
    pub kondisi: Option<String>,
    #[serde(default)]
    pub catatan: Option<String>,
    #[serde(default)]
    pub waktu_perolehan: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInventarisRequest {
    pub nama_barang: Option<String>,
    pub kode_barang: Option<String>,
    pub satuan: Option<String>,
    pub jumlah: Option<i32>,
    pub kondisi: Option<String>,
    pub catatan: Option<String>,
    pub waktu_perolehan: Option<NaiveDate>,
}

pub async fn list_by_fasilitas(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id_fasilitas): Path<Uuid>,
) -> HttpResult<Json<Vec<InventarisDto>>> {
    state
        .services
        .fasilitas_queries
        .list_inventaris(&user, id_fasilitas)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_inventaris(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateInventarisRequest>,
) -> HttpResult<Json<InventarisDto>> {
    let command = CreateInventarisCommand {
        id_fasilitas: payload.id_fasilitas,
        nama_barang: payload.nama_barang,
        kode_barang: payload.kode_barang,
        satuan: payload.satuan,
        jumlah: payload.jumlah,
        kondisi: payload.kondisi,
        catatan: payload.catatan,
        waktu_perolehan: payload.waktu_perolehan,
    };

    state
        .services
        .inventaris_commands
        .create_inventaris(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_inventaris(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInventarisRequest>,
) -> HttpResult<Json<InventarisDto>> {
    let command = UpdateInventarisCommand {
        id,
        nama_barang: payload.nama_barang,
        kode_barang: payload.kode_barang,
        satuan: payload.satuan,
        jumlah: payload.jumlah,
        kondisi: payload.kondisi,
        catatan: payload.catatan,
        waktu_perolehan: payload.waktu_perolehan,
    };

    state
        .services
        .inventaris_commands
        .update_inventaris(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_inventaris(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .inventaris_commands
        .delete_inventaris(&user, id)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
