// src/domain/fasilitas/entity.rs
use crate::domain::pemetaan::PemetaanFasilitasId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FasilitasId(pub Uuid);

impl FasilitasId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<FasilitasId> for Uuid {
    fn from(value: FasilitasId) -> Self {
        value.0
    }
}

impl fmt::Display for FasilitasId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone)]
pub struct Fasilitas {
    pub id_fasilitas: FasilitasId,
    pub id_pemetaan_fasilitas: PemetaanFasilitasId,
    pub jenis_fasilitas: String,
    pub nama_fasilitas: String,
    pub keterangan: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFasilitas {
    pub id_fasilitas: FasilitasId,
    pub id_pemetaan_fasilitas: PemetaanFasilitasId,
    pub jenis_fasilitas: String,
    pub nama_fasilitas: String,
    pub keterangan: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FasilitasUpdate {
    pub id: FasilitasId,
    pub jenis_fasilitas: Option<String>,
    pub nama_fasilitas: Option<String>,
    pub keterangan: Option<String>,
    pub updated_at: DateTime<Utc>,
}
