// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use uuid::Uuid;

use wakaf_core::application::ports::notify::{NotificationEvent, Notifier};
use wakaf_core::application::ports::time::Clock;
use wakaf_core::domain::approval::{
    Approval, ApprovalId, ApprovalRepository, ApprovalResolution, ApprovalType, NewApproval,
    ResolutionEffect,
};
use wakaf_core::domain::audit::{ActivityLog, ActivityLogRepository, NewActivityLog};
use wakaf_core::domain::errors::{DomainError, DomainResult};
use wakaf_core::domain::pemetaan::{
    NewPemetaanFasilitas, NewPemetaanTanah, PemetaanFasilitas, PemetaanFasilitasId,
    PemetaanFasilitasRepository, PemetaanFasilitasUpdate, PemetaanTanah, PemetaanTanahId,
    PemetaanTanahRepository, PemetaanTanahUpdate,
};
use wakaf_core::domain::sertifikat::{
    NewSertifikat, Sertifikat, SertifikatId, SertifikatRepository, SertifikatUpdate,
};
use wakaf_core::domain::status::ApprovalStatus;
use wakaf_core::domain::tanah::{NewTanah, Tanah, TanahId, TanahRepository, TanahUpdate};
use wakaf_core::domain::user::{Role, UserId};

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2025-03-01T08:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

/// Deterministic timestamp shared by the clock mock and the builders.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/* ------------------------------- SharedDb -------------------------------- */

/// One in-memory "database" shared by the entity repos and the approval
/// repo, so resolution effects land in the same maps the services read.
#[derive(Default)]
pub struct SharedDb {
    pub tanah: Mutex<HashMap<Uuid, Tanah>>,
    pub sertifikat: Mutex<HashMap<Uuid, Sertifikat>>,
    pub approvals: Mutex<HashMap<Uuid, Approval>>,
}

fn materialize_tanah(new: &NewTanah) -> Tanah {
    Tanah {
        id_tanah: new.draft.id_tanah,
        nama_pimpinan_jamaah: new.draft.nama_pimpinan_jamaah.clone(),
        nama_wakif: new.draft.nama_wakif.clone(),
        lokasi: new.draft.lokasi.clone(),
        luas_tanah: new.draft.luas_tanah,
        status: new.status,
        latitude: new.draft.latitude,
        longitude: new.draft.longitude,
        user_id: new.draft.user_id,
        created_at: new.created_at,
        updated_at: new.updated_at,
    }
}

fn materialize_sertifikat(new: &NewSertifikat) -> Sertifikat {
    Sertifikat {
        id_sertifikat: new.draft.id_sertifikat,
        id_tanah: new.draft.id_tanah,
        no_dokumen: new.draft.no_dokumen.clone(),
        jenis_sertifikat: new.draft.jenis_sertifikat,
        status_pengajuan: new.draft.status_pengajuan,
        status: new.status,
        user_id: new.draft.user_id,
        dokumen: new.draft.dokumen.clone(),
        created_at: new.created_at,
        updated_at: new.updated_at,
    }
}

pub struct InMemoryTanahRepo(pub Arc<SharedDb>);

#[async_trait]
impl TanahRepository for InMemoryTanahRepo {
    async fn insert(&self, tanah: NewTanah) -> DomainResult<Tanah> {
        let row = materialize_tanah(&tanah);
        let mut map = self.0.tanah.lock().unwrap();
        if map.contains_key(&Uuid::from(row.id_tanah)) {
            return Err(DomainError::Conflict("tanah already exists".into()));
        }
        map.insert(row.id_tanah.into(), row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: TanahId) -> DomainResult<Option<Tanah>> {
        Ok(self.0.tanah.lock().unwrap().get(&Uuid::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Tanah>> {
        Ok(self.0.tanah.lock().unwrap().values().cloned().collect())
    }

    async fn list_by_user(&self, user_id: UserId) -> DomainResult<Vec<Tanah>> {
        Ok(self
            .0
            .tanah
            .lock()
            .unwrap()
            .values()
            .filter(|tanah| tanah.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update(&self, update: TanahUpdate) -> DomainResult<Tanah> {
        let mut map = self.0.tanah.lock().unwrap();
        let tanah = map
            .get_mut(&Uuid::from(update.id))
            .ok_or_else(|| DomainError::NotFound("tanah not found".into()))?;
        tanah.apply(&update.patch, update.updated_at);
        Ok(tanah.clone())
    }

    async fn delete(&self, id: TanahId) -> DomainResult<()> {
        self.0
            .tanah
            .lock()
            .unwrap()
            .remove(&Uuid::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("tanah not found".into()))
    }
}

pub struct InMemorySertifikatRepo(pub Arc<SharedDb>);

#[async_trait]
impl SertifikatRepository for InMemorySertifikatRepo {
    async fn insert(&self, sertifikat: NewSertifikat) -> DomainResult<Sertifikat> {
        let row = materialize_sertifikat(&sertifikat);
        let mut map = self.0.sertifikat.lock().unwrap();
        if map.contains_key(&Uuid::from(row.id_sertifikat)) {
            return Err(DomainError::Conflict("sertifikat already exists".into()));
        }
        map.insert(row.id_sertifikat.into(), row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: SertifikatId) -> DomainResult<Option<Sertifikat>> {
        Ok(self
            .0
            .sertifikat
            .lock()
            .unwrap()
            .get(&Uuid::from(id))
            .cloned())
    }

    async fn list_by_tanah(&self, id_tanah: TanahId) -> DomainResult<Vec<Sertifikat>> {
        Ok(self
            .0
            .sertifikat
            .lock()
            .unwrap()
            .values()
            .filter(|sertifikat| sertifikat.id_tanah == id_tanah)
            .cloned()
            .collect())
    }

    async fn update(&self, update: SertifikatUpdate) -> DomainResult<Sertifikat> {
        let mut map = self.0.sertifikat.lock().unwrap();
        let sertifikat = map
            .get_mut(&Uuid::from(update.id))
            .ok_or_else(|| DomainError::NotFound("sertifikat not found".into()))?;
        sertifikat.apply(&update.patch, update.updated_at);
        Ok(sertifikat.clone())
    }

    async fn delete(&self, id: SertifikatId) -> DomainResult<()> {
        self.0
            .sertifikat
            .lock()
            .unwrap()
            .remove(&Uuid::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("sertifikat not found".into()))
    }
}

pub struct InMemoryApprovalRepo(pub Arc<SharedDb>);

#[async_trait]
impl ApprovalRepository for InMemoryApprovalRepo {
    async fn insert(&self, approval: NewApproval) -> DomainResult<Approval> {
        let row = Approval {
            id: ApprovalId::new(Uuid::new_v4()),
            user_id: approval.user_id,
            approver_id: None,
            approval_type: approval.approval_type,
            data_id: approval.data_id,
            data: approval.data,
            status: ApprovalStatus::Ditinjau,
            created_at: approval.created_at,
            updated_at: approval.updated_at,
        };
        self.0
            .approvals
            .lock()
            .unwrap()
            .insert(row.id.into(), row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: ApprovalId) -> DomainResult<Option<Approval>> {
        Ok(self
            .0
            .approvals
            .lock()
            .unwrap()
            .get(&Uuid::from(id))
            .cloned())
    }

    async fn list_pending(&self, kind: Option<ApprovalType>) -> DomainResult<Vec<Approval>> {
        let mut rows: Vec<Approval> = self
            .0
            .approvals
            .lock()
            .unwrap()
            .values()
            .filter(|approval| approval.status == ApprovalStatus::Ditinjau)
            .filter(|approval| kind.is_none_or(|kind| approval.approval_type == kind))
            .cloned()
            .collect();
        rows.sort_by_key(|approval| approval.created_at);
        Ok(rows)
    }

    /// Mirrors the transactional CAS: the status flip and the entity
    /// effect happen under one lock, and an effect failure leaves the
    /// approval untouched.
    async fn resolve(&self, resolution: ApprovalResolution) -> DomainResult<Approval> {
        let mut approvals = self.0.approvals.lock().unwrap();
        let approval = approvals
            .get_mut(&Uuid::from(resolution.approval_id))
            .ok_or_else(|| DomainError::NotFound("approval not found".into()))?;
        if approval.status != ApprovalStatus::Ditinjau {
            return Err(DomainError::Conflict("approval already resolved".into()));
        }

        match &resolution.effect {
            ResolutionEffect::UpsertTanah(new) => {
                let row = materialize_tanah(new);
                self.0
                    .tanah
                    .lock()
                    .unwrap()
                    .insert(row.id_tanah.into(), row);
            }
            ResolutionEffect::PatchTanah(update) => {
                let mut map = self.0.tanah.lock().unwrap();
                let tanah = map
                    .get_mut(&Uuid::from(update.id))
                    .ok_or_else(|| DomainError::NotFound("tanah not found".into()))?;
                tanah.apply(&update.patch, update.updated_at);
            }
            ResolutionEffect::UpsertSertifikat(new) => {
                let row = materialize_sertifikat(new);
                self.0
                    .sertifikat
                    .lock()
                    .unwrap()
                    .insert(row.id_sertifikat.into(), row);
            }
            ResolutionEffect::PatchSertifikat(update) => {
                let mut map = self.0.sertifikat.lock().unwrap();
                let sertifikat = map
                    .get_mut(&Uuid::from(update.id))
                    .ok_or_else(|| DomainError::NotFound("sertifikat not found".into()))?;
                sertifikat.apply(&update.patch, update.updated_at);
            }
        }

        approval.status = resolution.verdict;
        approval.approver_id = Some(resolution.approver_id);
        approval.updated_at = resolution.resolved_at;
        Ok(approval.clone())
    }
}

/* ------------------------- Pemetaan repositories -------------------------- */

#[derive(Default)]
pub struct InMemoryPemetaanTanahRepo {
    pub rows: Mutex<HashMap<Uuid, PemetaanTanah>>,
}

#[async_trait]
impl PemetaanTanahRepository for InMemoryPemetaanTanahRepo {
    async fn insert(&self, pemetaan: NewPemetaanTanah) -> DomainResult<PemetaanTanah> {
        let row = PemetaanTanah {
            id_pemetaan_tanah: pemetaan.id_pemetaan_tanah,
            id_tanah: pemetaan.id_tanah,
            nama_pemetaan: pemetaan.nama_pemetaan,
            jenis_geometri: pemetaan.jenis_geometri,
            geometri: pemetaan.geometri,
            geometri_wkt: None,
            luas_tanah: pemetaan.luas_tanah,
            keterangan: pemetaan.keterangan,
            created_at: pemetaan.created_at,
            updated_at: pemetaan.updated_at,
        };
        self.rows
            .lock()
            .unwrap()
            .insert(row.id_pemetaan_tanah.into(), row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: PemetaanTanahId) -> DomainResult<Option<PemetaanTanah>> {
        Ok(self.rows.lock().unwrap().get(&Uuid::from(id)).cloned())
    }

    async fn list_by_tanah(&self, id_tanah: TanahId) -> DomainResult<Vec<PemetaanTanah>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|row| row.id_tanah == id_tanah)
            .cloned()
            .collect())
    }

    async fn update(&self, update: PemetaanTanahUpdate) -> DomainResult<PemetaanTanah> {
        let mut map = self.rows.lock().unwrap();
        let row = map
            .get_mut(&Uuid::from(update.id))
            .ok_or_else(|| DomainError::NotFound("pemetaan tanah not found".into()))?;

        if let Some(nama) = update.nama_pemetaan {
            row.nama_pemetaan = nama;
        }
        if let Some(keterangan) = update.keterangan {
            row.keterangan = Some(keterangan);
        }
        if let Some(write) = update.geometri {
            row.jenis_geometri = write.jenis_geometri;
            row.geometri = write.geometri;
            row.geometri_wkt = Some(write.wkt);
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: PemetaanTanahId) -> DomainResult<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(&Uuid::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("pemetaan tanah not found".into()))
    }
}

#[derive(Default)]
pub struct InMemoryPemetaanFasilitasRepo {
    pub rows: Mutex<HashMap<Uuid, PemetaanFasilitas>>,
}

#[async_trait]
impl PemetaanFasilitasRepository for InMemoryPemetaanFasilitasRepo {
    async fn insert(&self, pemetaan: NewPemetaanFasilitas) -> DomainResult<PemetaanFasilitas> {
        let row = PemetaanFasilitas {
            id_pemetaan_fasilitas: pemetaan.id_pemetaan_fasilitas,
            id_pemetaan_tanah: pemetaan.id_pemetaan_tanah,
            nama_fasilitas: pemetaan.nama_fasilitas,
            kategori_fasilitas: pemetaan.kategori_fasilitas,
            jenis_geometri: pemetaan.jenis_geometri,
            geometri: pemetaan.geometri,
            geometri_wkt: None,
            keterangan: pemetaan.keterangan,
            created_at: pemetaan.created_at,
            updated_at: pemetaan.updated_at,
        };
        self.rows
            .lock()
            .unwrap()
            .insert(row.id_pemetaan_fasilitas.into(), row.clone());
        Ok(row)
    }

    async fn find_by_id(
        &self,
        id: PemetaanFasilitasId,
    ) -> DomainResult<Option<PemetaanFasilitas>> {
        Ok(self.rows.lock().unwrap().get(&Uuid::from(id)).cloned())
    }

    async fn list_by_pemetaan_tanah(
        &self,
        id_pemetaan_tanah: PemetaanTanahId,
    ) -> DomainResult<Vec<PemetaanFasilitas>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|row| row.id_pemetaan_tanah == id_pemetaan_tanah)
            .cloned()
            .collect())
    }

    async fn update(&self, update: PemetaanFasilitasUpdate) -> DomainResult<PemetaanFasilitas> {
        let mut map = self.rows.lock().unwrap();
        let row = map
            .get_mut(&Uuid::from(update.id))
            .ok_or_else(|| DomainError::NotFound("pemetaan fasilitas not found".into()))?;

        if let Some(nama) = update.nama_fasilitas {
            row.nama_fasilitas = nama;
        }
        if let Some(kategori) = update.kategori_fasilitas {
            row.kategori_fasilitas = Some(kategori);
        }
        if let Some(keterangan) = update.keterangan {
            row.keterangan = Some(keterangan);
        }
        if let Some(write) = update.geometri {
            row.jenis_geometri = write.jenis_geometri;
            row.geometri = write.geometri;
            row.geometri_wkt = Some(write.wkt);
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: PemetaanFasilitasId) -> DomainResult<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(&Uuid::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("pemetaan fasilitas not found".into()))
    }
}

/* ------------------------------ Audit double ------------------------------ */

/// Captures inserted activity rows so tests can assert on them.
#[derive(Default)]
pub struct CapturingAuditRepo {
    pub inserted: Mutex<Vec<NewActivityLog>>,
}

impl CapturingAuditRepo {
    pub fn entries(&self) -> Vec<NewActivityLog> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ActivityLogRepository for CapturingAuditRepo {
    async fn insert(&self, log: NewActivityLog) -> DomainResult<()> {
        self.inserted.lock().unwrap().push(log);
        Ok(())
    }

    async fn list(
        &self,
        _limit: u32,
        _model_type: Option<&str>,
    ) -> DomainResult<Vec<ActivityLog>> {
        Ok(vec![])
    }
}

/* ---------------------------- Notifier double ----------------------------- */

#[derive(Default)]
pub struct CapturingNotifier {
    pub user_events: Mutex<Vec<(UserId, NotificationEvent)>>,
    pub role_events: Mutex<Vec<(Role, NotificationEvent)>>,
}

impl CapturingNotifier {
    pub fn user_events(&self) -> Vec<(UserId, NotificationEvent)> {
        self.user_events.lock().unwrap().clone()
    }

    pub fn role_events(&self) -> Vec<(Role, NotificationEvent)> {
        self.role_events.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for CapturingNotifier {
    async fn notify_user(&self, recipient: UserId, event: NotificationEvent) -> DomainResult<()> {
        self.user_events.lock().unwrap().push((recipient, event));
        Ok(())
    }

    async fn notify_role(&self, role: Role, event: NotificationEvent) -> DomainResult<()> {
        self.role_events.lock().unwrap().push((role, event));
        Ok(())
    }
}
