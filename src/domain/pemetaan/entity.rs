// src/domain/pemetaan/entity.rs
use crate::domain::geo::{Geometry, GeometryKind};
use crate::domain::tanah::TanahId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PemetaanTanahId(pub Uuid);

impl PemetaanTanahId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<PemetaanTanahId> for Uuid {
    fn from(value: PemetaanTanahId) -> Self {
        value.0
    }
}

impl fmt::Display for PemetaanTanahId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PemetaanFasilitasId(pub Uuid);

impl PemetaanFasilitasId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<PemetaanFasilitasId> for Uuid {
    fn from(value: PemetaanFasilitasId) -> Self {
        value.0
    }
}

impl fmt::Display for PemetaanFasilitasId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Outline of a parcel. `luas_tanah` is computed from the geometry once,
/// when the mapping is created; geometry edits leave it untouched.
#[derive(Debug, Clone)]
pub struct PemetaanTanah {
    pub id_pemetaan_tanah: PemetaanTanahId,
    pub id_tanah: TanahId,
    pub nama_pemetaan: String,
    pub jenis_geometri: GeometryKind,
    pub geometri: Geometry,
    pub geometri_wkt: Option<String>,
    pub luas_tanah: f64,
    pub keterangan: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPemetaanTanah {
    pub id_pemetaan_tanah: PemetaanTanahId,
    pub id_tanah: TanahId,
    pub nama_pemetaan: String,
    pub jenis_geometri: GeometryKind,
    pub geometri: Geometry,
    pub luas_tanah: f64,
    pub keterangan: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Geometry replacement on the update path: the service has already
/// rendered the WKT, bypassing the create-side cast.
#[derive(Debug, Clone)]
pub struct GeometryWrite {
    pub jenis_geometri: GeometryKind,
    pub geometri: Geometry,
    pub wkt: String,
}

#[derive(Debug, Clone)]
pub struct PemetaanTanahUpdate {
    pub id: PemetaanTanahId,
    pub nama_pemetaan: Option<String>,
    pub keterangan: Option<String>,
    pub geometri: Option<GeometryWrite>,
    pub updated_at: DateTime<Utc>,
}

/// Outline or position of a facility inside a parcel mapping.
#[derive(Debug, Clone)]
pub struct PemetaanFasilitas {
    pub id_pemetaan_fasilitas: PemetaanFasilitasId,
    pub id_pemetaan_tanah: PemetaanTanahId,
    pub nama_fasilitas: String,
    pub kategori_fasilitas: Option<String>,
    pub jenis_geometri: GeometryKind,
    pub geometri: Geometry,
    pub geometri_wkt: Option<String>,
    pub keterangan: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPemetaanFasilitas {
    pub id_pemetaan_fasilitas: PemetaanFasilitasId,
    pub id_pemetaan_tanah: PemetaanTanahId,
    pub nama_fasilitas: String,
    pub kategori_fasilitas: Option<String>,
    pub jenis_geometri: GeometryKind,
    pub geometri: Geometry,
    pub keterangan: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PemetaanFasilitasUpdate {
    pub id: PemetaanFasilitasId,
    pub nama_fasilitas: Option<String>,
    pub kategori_fasilitas: Option<String>,
    pub keterangan: Option<String>,
    pub geometri: Option<GeometryWrite>,
    pub updated_at: DateTime<Utc>,
}
