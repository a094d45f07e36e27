// src/domain/sertifikat/entity.rs
use crate::domain::errors::DomainError;
use crate::domain::status::RecordStatus;
use crate::domain::tanah::TanahId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SertifikatId(pub Uuid);

impl SertifikatId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<SertifikatId> for Uuid {
    fn from(value: SertifikatId) -> Self {
        value.0
    }
}

impl fmt::Display for SertifikatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Legal document class of a certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JenisSertifikat {
    Bastw,
    Aiw,
    Sw,
}

impl JenisSertifikat {
    pub fn as_str(&self) -> &'static str {
        match self {
            JenisSertifikat::Bastw => "BASTW",
            JenisSertifikat::Aiw => "AIW",
            JenisSertifikat::Sw => "SW",
        }
    }
}

impl fmt::Display for JenisSertifikat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JenisSertifikat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BASTW" => Ok(JenisSertifikat::Bastw),
            "AIW" => Ok(JenisSertifikat::Aiw),
            "SW" => Ok(JenisSertifikat::Sw),
            other => Err(DomainError::Validation(format!(
                "unknown jenis_sertifikat '{other}'"
            ))),
        }
    }
}

/// Progress of the paperwork itself, independent from the approval status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusPengajuan {
    Diproses,
    Terbit,
    Ditolak,
}

impl StatusPengajuan {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusPengajuan::Diproses => "diproses",
            StatusPengajuan::Terbit => "terbit",
            StatusPengajuan::Ditolak => "ditolak",
        }
    }
}

impl Default for StatusPengajuan {
    fn default() -> Self {
        StatusPengajuan::Diproses
    }
}

impl fmt::Display for StatusPengajuan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusPengajuan {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "diproses" => Ok(StatusPengajuan::Diproses),
            "terbit" => Ok(StatusPengajuan::Terbit),
            "ditolak" => Ok(StatusPengajuan::Ditolak),
            other => Err(DomainError::Validation(format!(
                "unknown status_pengajuan '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sertifikat {
    pub id_sertifikat: SertifikatId,
    pub id_tanah: TanahId,
    pub no_dokumen: Option<String>,
    pub jenis_sertifikat: JenisSertifikat,
    pub status_pengajuan: StatusPengajuan,
    pub status: RecordStatus,
    pub user_id: UserId,
    pub dokumen: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sertifikat {
    pub fn as_patch(&self) -> SertifikatPatch {
        SertifikatPatch {
            id_sertifikat: Some(self.id_sertifikat),
            id_tanah: Some(self.id_tanah),
            no_dokumen: self.no_dokumen.clone(),
            jenis_sertifikat: Some(self.jenis_sertifikat),
            status_pengajuan: Some(self.status_pengajuan),
            status: Some(self.status),
            dokumen: self.dokumen.clone(),
        }
    }

    pub fn apply(&mut self, patch: &SertifikatPatch, now: DateTime<Utc>) {
        if let Some(id_tanah) = patch.id_tanah {
            self.id_tanah = id_tanah;
        }
        if let Some(no_dokumen) = &patch.no_dokumen {
            self.no_dokumen = Some(no_dokumen.clone());
        }
        if let Some(jenis) = patch.jenis_sertifikat {
            self.jenis_sertifikat = jenis;
        }
        if let Some(pengajuan) = patch.status_pengajuan {
            self.status_pengajuan = pengajuan;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(dokumen) = &patch.dokumen {
            self.dokumen = Some(dokumen.clone());
        }
        self.updated_at = now;
    }
}

/// Creation payload and the wire format of a `sertifikat` approval's
/// `data` blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SertifikatDraft {
    pub id_sertifikat: SertifikatId,
    pub id_tanah: TanahId,
    #[serde(default)]
    pub no_dokumen: Option<String>,
    pub jenis_sertifikat: JenisSertifikat,
    #[serde(default)]
    pub status_pengajuan: StatusPengajuan,
    pub user_id: UserId,
    #[serde(default)]
    pub dokumen: Option<String>,
}

impl SertifikatDraft {
    /// Patch carrying every draft field, used when an approval applies the
    /// proposed certificate onto the row inserted at submission time.
    pub fn as_patch(&self) -> SertifikatPatch {
        SertifikatPatch {
            id_sertifikat: Some(self.id_sertifikat),
            id_tanah: Some(self.id_tanah),
            no_dokumen: self.no_dokumen.clone(),
            jenis_sertifikat: Some(self.jenis_sertifikat),
            status_pengajuan: Some(self.status_pengajuan),
            status: None,
            dokumen: self.dokumen.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewSertifikat {
    pub draft: SertifikatDraft,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SertifikatPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_sertifikat: Option<SertifikatId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_tanah: Option<TanahId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_dokumen: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jenis_sertifikat: Option<JenisSertifikat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_pengajuan: Option<StatusPengajuan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RecordStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dokumen: Option<String>,
}

impl SertifikatPatch {
    pub fn with_status(mut self, status: RecordStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn or_status(mut self, status: RecordStatus) -> Self {
        self.status.get_or_insert(status);
        self
    }
}

#[derive(Debug, Clone)]
pub struct SertifikatUpdate {
    pub id: SertifikatId,
    pub patch: SertifikatPatch,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_patch_carries_every_field_but_status() {
        let draft = SertifikatDraft {
            id_sertifikat: SertifikatId::generate(),
            id_tanah: TanahId::generate(),
            no_dokumen: Some("W.5/011/2024".into()),
            jenis_sertifikat: JenisSertifikat::Aiw,
            status_pengajuan: StatusPengajuan::Diproses,
            user_id: UserId::generate(),
            dokumen: None,
        };
        let patch = draft.as_patch();
        assert_eq!(patch.id_sertifikat, Some(draft.id_sertifikat));
        assert_eq!(patch.no_dokumen.as_deref(), Some("W.5/011/2024"));
        assert_eq!(patch.status, None);
    }

    #[test]
    fn status_pengajuan_defaults_to_diproses_on_the_wire() {
        let draft: SertifikatDraft = serde_json::from_value(serde_json::json!({
            "id_sertifikat": SertifikatId::generate(),
            "id_tanah": TanahId::generate(),
            "jenis_sertifikat": "SW",
            "user_id": UserId::generate(),
        }))
        .unwrap();
        assert_eq!(draft.status_pengajuan, StatusPengajuan::Diproses);
    }
}
