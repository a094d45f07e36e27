// src/domain/tanah/entity.rs
use crate::domain::status::RecordStatus;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TanahId(pub Uuid);

impl TanahId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<TanahId> for Uuid {
    fn from(value: TanahId) -> Self {
        value.0
    }
}

impl fmt::Display for TanahId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone)]
pub struct Tanah {
    pub id_tanah: TanahId,
    pub nama_pimpinan_jamaah: String,
    pub nama_wakif: String,
    pub lokasi: String,
    pub luas_tanah: f64,
    pub status: RecordStatus,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tanah {
    /// Full-field patch snapshot, used as `previous_data` when an update
    /// goes through the approval workflow.
    pub fn as_patch(&self) -> TanahPatch {
        TanahPatch {
            id_tanah: Some(self.id_tanah),
            nama_pimpinan_jamaah: Some(self.nama_pimpinan_jamaah.clone()),
            nama_wakif: Some(self.nama_wakif.clone()),
            lokasi: Some(self.lokasi.clone()),
            luas_tanah: Some(self.luas_tanah),
            latitude: self.latitude,
            longitude: self.longitude,
            status: Some(self.status),
        }
    }

    pub fn apply(&mut self, patch: &TanahPatch, now: DateTime<Utc>) {
        if let Some(nama) = &patch.nama_pimpinan_jamaah {
            self.nama_pimpinan_jamaah = nama.clone();
        }
        if let Some(nama) = &patch.nama_wakif {
            self.nama_wakif = nama.clone();
        }
        if let Some(lokasi) = &patch.lokasi {
            self.lokasi = lokasi.clone();
        }
        if let Some(luas) = patch.luas_tanah {
            self.luas_tanah = luas;
        }
        if let Some(latitude) = patch.latitude {
            self.latitude = Some(latitude);
        }
        if let Some(longitude) = patch.longitude {
            self.longitude = Some(longitude);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = now;
    }
}

/// Creation payload. Doubles as the wire format of a `tanah` approval's
/// `data` blob, so the id is generated at submission time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TanahDraft {
    pub id_tanah: TanahId,
    pub nama_pimpinan_jamaah: String,
    pub nama_wakif: String,
    pub lokasi: String,
    pub luas_tanah: f64,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub user_id: UserId,
}

#[derive(Debug, Clone)]
pub struct NewTanah {
    pub draft: TanahDraft,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update. `None` means "leave the column alone"; the wire format
/// of `previous_data`/`updated_data` in a `tanah_update` approval.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TanahPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_tanah: Option<TanahId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nama_pimpinan_jamaah: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nama_wakif: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lokasi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub luas_tanah: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RecordStatus>,
}

impl TanahPatch {
    /// Force a status, overriding whatever the patch carried.
    pub fn with_status(mut self, status: RecordStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Default a status, keeping one the patch already carries.
    pub fn or_status(mut self, status: RecordStatus) -> Self {
        self.status.get_or_insert(status);
        self
    }
}

#[derive(Debug, Clone)]
pub struct TanahUpdate {
    pub id: TanahId,
    pub patch: TanahPatch,
    pub updated_at: DateTime<Utc>,
}
