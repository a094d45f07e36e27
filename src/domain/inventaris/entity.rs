// src/domain/inventaris/entity.rs
use crate::domain::fasilitas::FasilitasId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InventarisId(pub Uuid);

impl InventarisId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<InventarisId> for Uuid {
    fn from(value: InventarisId) -> Self {
        value.0
    }
}

impl fmt::Display for InventarisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A movable asset registered under a facility.
#[derive(Debug, Clone)]
pub struct Inventaris {
    pub id_inventaris: InventarisId,
    pub id_fasilitas: FasilitasId,
    pub nama_barang: String,
    pub kode_barang: Option<String>,
    pub satuan: String,
    pub jumlah: i32,
    pub kondisi: Option<String>,
    pub catatan: Option<String>,
    pub waktu_perolehan: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewInventaris {
    pub id_inventaris: InventarisId,
    pub id_fasilitas: FasilitasId,
    pub nama_barang: String,
    pub kode_barang: Option<String>,
    pub satuan: String,
    pub jumlah: i32,
    pub kondisi: Option<String>,
    pub catatan: Option<String>,
    pub waktu_perolehan: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct InventarisUpdate {
    pub id: InventarisId,
    pub nama_barang: Option<String>,
    pub kode_barang: Option<String>,
    pub satuan: Option<String>,
    pub jumlah: Option<i32>,
    pub kondisi: Option<String>,
    pub catatan: Option<String>,
    pub waktu_perolehan: Option<NaiveDate>,
    pub updated_at: DateTime<Utc>,
}
