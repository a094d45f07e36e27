// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{
    activity, approvals, fasilitas, inventaris, pemetaan, sertifikat, tanah,
};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::Method,
    routing::{get, post, put},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api/approvals", get(approvals::list_pending))
        .route(
            "/api/approvals/type/{tipe}",
            get(approvals::list_pending_by_type),
        )
        .route("/api/approvals/{id}", get(approvals::show))
        .route("/api/approvals/{id}/approve", post(approvals::approve))
        .route("/api/approvals/{id}/reject", post(approvals::reject))
        .route(
            "/api/approvals/{id}/update/approve",
            post(approvals::approve_update),
        )
        .route(
            "/api/approvals/{id}/update/reject",
            post(approvals::reject_update),
        )
        .route(
            "/api/tanah",
            get(tanah::list_tanah).post(tanah::create_tanah),
        )
        .route(
            "/api/tanah/{id}",
            get(tanah::get_tanah)
                .put(tanah::update_tanah)
                .delete(tanah::delete_tanah),
        )
        .route("/api/tanah/{id}/sertifikat", get(sertifikat::list_by_tanah))
        .route(
            "/api/tanah/{id}/pemetaan",
            get(pemetaan::list_by_tanah).post(pemetaan::create_tanah_mapping),
        )
        .route("/api/sertifikat", post(sertifikat::create_sertifikat))
        .route(
            "/api/sertifikat/{id}",
            get(sertifikat::get_sertifikat)
                .put(sertifikat::update_sertifikat)
                .delete(sertifikat::delete_sertifikat),
        )
        .route(
            "/api/pemetaan/tanah/{id}",
            get(pemetaan::get_tanah_mapping)
                .put(pemetaan::update_tanah_mapping)
                .delete(pemetaan::delete_tanah_mapping),
        )
        .route(
            "/api/pemetaan/tanah/{id}/fasilitas",
            get(pemetaan::list_fasilitas_by_pemetaan).post(pemetaan::create_fasilitas_mapping),
        )
        .route(
            "/api/pemetaan/fasilitas/{id}",
            put(pemetaan::update_fasilitas_mapping).delete(pemetaan::delete_fasilitas_mapping),
        )
        .route(
            "/api/fasilitas",
            get(fasilitas::list_fasilitas).post(fasilitas::create_fasilitas),
        )
        .route(
            "/api/fasilitas/{id}",
            get(fasilitas::get_fasilitas)
                .put(fasilitas::update_fasilitas)
                .delete(fasilitas::delete_fasilitas),
        )
        .route(
            "/api/fasilitas/{id}/inventaris",
            get(inventaris::list_by_fasilitas),
        )
        .route("/api/inventaris", post(inventaris::create_inventaris))
        .route(
            "/api/inventaris/{id}",
            put(inventaris::update_inventaris).delete(inventaris::delete_inventaris),
        )
        .route("/api/activity", get(activity::list_activity))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
