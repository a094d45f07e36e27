// src/application/dto.rs
use crate::domain::{
    approval::{Approval, ApprovalType},
    audit::{ActivityLog, AuditAction},
    fasilitas::Fasilitas,
    geo::{Geometry, GeometryKind},
    inventaris::Inventaris,
    pemetaan::{PemetaanFasilitas, PemetaanTanah},
    sertifikat::{JenisSertifikat, Sertifikat, StatusPengajuan},
    status::{ApprovalStatus, RecordStatus},
    tanah::Tanah,
    user::{Role, UserId},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Request-scoped identity, resolved by the HTTP layer from the gateway
/// headers and passed explicitly into every service call.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize)]
pub struct TanahDto {
    pub id_tanah: Uuid,
    pub nama_pimpinan_jamaah: String,
    pub nama_wakif: String,
    pub lokasi: String,
    pub luas_tanah: f64,
    pub status: RecordStatus,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub user_id: Uuid,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Tanah> for TanahDto {
    fn from(tanah: Tanah) -> Self {
        Self {
            id_tanah: tanah.id_tanah.into(),
            nama_pimpinan_jamaah: tanah.nama_pimpinan_jamaah,
            nama_wakif: tanah.nama_wakif,
            lokasi: tanah.lokasi,
            luas_tanah: tanah.luas_tanah,
            status: tanah.status,
            latitude: tanah.latitude,
            longitude: tanah.longitude,
            user_id: tanah.user_id.into(),
            created_at: tanah.created_at,
            updated_at: tanah.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SertifikatDto {
    pub id_sertifikat: Uuid,
    pub id_tanah: Uuid,
    pub no_dokumen: Option<String>,
    pub jenis_sertifikat: JenisSertifikat,
    pub status_pengajuan: StatusPengajuan,
    pub status: RecordStatus,
    pub user_id: Uuid,
    pub dokumen: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Sertifikat> for SertifikatDto {
    fn from(sertifikat: Sertifikat) -> Self {
        Self {
            id_sertifikat: sertifikat.id_sertifikat.into(),
            id_tanah: sertifikat.id_tanah.into(),
            no_dokumen: sertifikat.no_dokumen,
            jenis_sertifikat: sertifikat.jenis_sertifikat,
            status_pengajuan: sertifikat.status_pengajuan,
            status: sertifikat.status,
            user_id: sertifikat.user_id.into(),
            dokumen: sertifikat.dokumen,
            created_at: sertifikat.created_at,
            updated_at: sertifikat.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApprovalDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub approver_id: Option<Uuid>,
    pub approval_type: ApprovalType,
    pub data_id: Uuid,
    pub status: ApprovalStatus,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Approval> for ApprovalDto {
    fn from(approval: Approval) -> Self {
        Self {
            id: approval.id.into(),
            user_id: approval.user_id.into(),
            approver_id: approval.approver_id.map(Into::into),
            approval_type: approval.approval_type,
            data_id: approval.data_id,
            status: approval.status,
            created_at: approval.created_at,
            updated_at: approval.updated_at,
        }
    }
}

/// Detail view: the row plus the decoded `data` blob.
#[derive(Debug, Clone, Serialize)]
pub struct ApprovalDetailDto {
    #[serde(flatten)]
    pub approval: ApprovalDto,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct PemetaanTanahDto {
    pub id_pemetaan_tanah: Uuid,
    pub id_tanah: Uuid,
    pub nama_pemetaan: String,
    pub jenis_geometri: GeometryKind,
    pub geometri: Geometry,
    pub geometri_wkt: Option<String>,
    pub luas_tanah: f64,
    pub keterangan: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<PemetaanTanah> for PemetaanTanahDto {
    fn from(pemetaan: PemetaanTanah) -> Self {
        Self {
            id_pemetaan_tanah: pemetaan.id_pemetaan_tanah.into(),
            id_tanah: pemetaan.id_tanah.into(),
            nama_pemetaan: pemetaan.nama_pemetaan,
            jenis_geometri: pemetaan.jenis_geometri,
            geometri: pemetaan.geometri,
            geometri_wkt: pemetaan.geometri_wkt,
            luas_tanah: pemetaan.luas_tanah,
            keterangan: pemetaan.keterangan,
            created_at: pemetaan.created_at,
            updated_at: pemetaan.updated_at,
        }
    }
}

/// Create response for a parcel mapping: the row plus how the measured
/// area compares against the area declared on the parent Tanah.
#[derive(Debug, Clone, Serialize)]
pub struct TanahMappingCreatedDto {
    pub pemetaan: PemetaanTanahDto,
    pub luas_tanah_tercatat: f64,
    pub luas_hasil_pemetaan: f64,
    pub selisih_luas: f64,
    pub persentase_selisih: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PemetaanFasilitasDto {
    pub id_pemetaan_fasilitas: Uuid,
    pub id_pemetaan_tanah: Uuid,
    pub nama_fasilitas: String,
    pub kategori_fasilitas: Option<String>,
    pub jenis_geometri: GeometryKind,
    pub geometri: Geometry,
    pub geometri_wkt: Option<String>,
    pub keterangan: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<PemetaanFasilitas> for PemetaanFasilitasDto {
    fn from(pemetaan: PemetaanFasilitas) -> Self {
        Self {
            id_pemetaan_fasilitas: pemetaan.id_pemetaan_fasilitas.into(),
            id_pemetaan_tanah: pemetaan.id_pemetaan_tanah.into(),
            nama_fasilitas: pemetaan.nama_fasilitas,
            kategori_fasilitas: pemetaan.kategori_fasilitas,
            jenis_geometri: pemetaan.jenis_geometri,
            geometri: pemetaan.geometri,
            geometri_wkt: pemetaan.geometri_wkt,
            keterangan: pemetaan.keterangan,
            created_at: pemetaan.created_at,
            updated_at: pemetaan.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FasilitasDto {
    pub id_fasilitas: Uuid,
    pub id_pemetaan_fasilitas: Uuid,
    pub jenis_fasilitas: String,
    pub nama_fasilitas: String,
    pub keterangan: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Fasilitas> for FasilitasDto {
    fn from(fasilitas: Fasilitas) -> Self {
        Self {
            id_fasilitas: fasilitas.id_fasilitas.into(),
            id_pemetaan_fasilitas: fasilitas.id_pemetaan_fasilitas.into(),
            jenis_fasilitas: fasilitas.jenis_fasilitas,
            nama_fasilitas: fasilitas.nama_fasilitas,
            keterangan: fasilitas.keterangan,
            created_at: fasilitas.created_at,
            updated_at: fasilitas.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InventarisDto {
    pub id_inventaris: Uuid,
    pub id_fasilitas: Uuid,
    pub nama_barang: String,
    pub kode_barang: Option<String>,
    pub satuan: String,
    pub jumlah: i32,
    pub kondisi: Option<String>,
    pub catatan: Option<String>,
    pub waktu_perolehan: Option<NaiveDate>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Inventaris> for InventarisDto {
    fn from(inventaris: Inventaris) -> Self {
        Self {
            id_inventaris: inventaris.id_inventaris.into(),
            id_fasilitas: inventaris.id_fasilitas.into(),
            nama_barang: inventaris.nama_barang,
            kode_barang: inventaris.kode_barang,
            satuan: inventaris.satuan,
            jumlah: inventaris.jumlah,
            kondisi: inventaris.kondisi,
            catatan: inventaris.catatan,
            waktu_perolehan: inventaris.waktu_perolehan,
            created_at: inventaris.created_at,
            updated_at: inventaris.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityLogDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub action: AuditAction,
    pub model_type: String,
    pub model_id: Uuid,
    pub changes: serde_json::Value,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<ActivityLog> for ActivityLogDto {
    fn from(log: ActivityLog) -> Self {
        Self {
            id: log.id,
            user_id: log.user_id.into(),
            action: log.action,
            model_type: log.model_type,
            model_id: log.model_id,
            changes: log.changes,
            created_at: log.created_at,
        }
    }
}

/// Result of a gated write: either the mutation was applied directly, or
/// it was parked as a pending approval.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum WriteOutcome<T> {
    Applied { data: T },
    PendingApproval { approval: ApprovalDto },
}

/// RFC3339 (de)serialization for timestamps on the wire.
pub mod serde_time {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    #[allow(dead_code)]
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
