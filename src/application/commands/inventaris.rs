// src/application/commands/inventaris.rs
use std::sync::Arc;

use crate::application::{
    audit::ActivityRecorder,
    dto::{AuthenticatedUser, InventarisDto},
    error::{ApplicationError, ApplicationResult},
    ports::time::Clock,
};
use crate::domain::{
    fasilitas::{FasilitasId, FasilitasRepository},
    inventaris::{InventarisId, InventarisRepository, InventarisUpdate, NewInventaris},
};
use chrono::NaiveDate;
use uuid::Uuid;

pub struct CreateInventarisCommand {
    pub id_fasilitas: Uuid,
    pub nama_barang: String,
    pub kode_barang: Option<String>,
    pub satuan: String,
    pub jumlah: i32,
    pub kondisi: Option<String>,
    pub catatan: Option<String>,
    pub waktu_perolehan: Option<NaiveDate>,
}

pub struct UpdateInventarisCommand {
    pub id: Uuid,
    pub nama_barang: Option<String>,
    pub kode_barang: Option<String>,
    pub satuan: Option<String>,
    pub jumlah: Option<i32>,
    pub kondisi: Option<String>,
    pub catatan: Option<String>,
    pub waktu_perolehan: Option<NaiveDate>,
}

pub struct InventarisCommandService {
    inventaris: Arc<dyn InventarisRepository>,
    fasilitas: Arc<dyn FasilitasRepository>,
    recorder: Arc<ActivityRecorder>,
    clock: Arc<dyn Clock>,
}

impl InventarisCommandService {
    pub fn new(
        inventaris: Arc<dyn InventarisRepository>,
        fasilitas: Arc<dyn FasilitasRepository>,
        recorder: Arc<ActivityRecorder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            inventaris,
            fasilitas,
            recorder,
            clock,
        }
    }

    pub async fn create_inventaris(
        &self,
        actor: &AuthenticatedUser,
        command: CreateInventarisCommand,
    ) -> ApplicationResult<InventarisDto> {
        if command.nama_barang.trim().is_empty() {
            return Err(ApplicationError::validation("nama_barang cannot be empty"));
        }
        if command.satuan.trim().is_empty() {
            return Err(ApplicationError::validation("satuan cannot be empty"));
        }
        if command.jumlah < 0 {
            return Err(ApplicationError::validation("jumlah cannot be negative"));
        }

        let id_fasilitas = FasilitasId::new(command.id_fasilitas);
        self.fasilitas
            .find_by_id(id_fasilitas)
            .await?
            .ok_or_else(|| ApplicationError::not_found("fasilitas not found"))?;

        let now = self.clock.now();
        let created = self
            .inventaris
            .insert(NewInventaris {
                id_inventaris: InventarisId::generate(),
                id_fasilitas,
                nama_barang: command.nama_barang,
                kode_barang: command.kode_barang,
                satuan: command.satuan,
                jumlah: command.jumlah,
                kondisi: command.kondisi,
                catatan: command.catatan,
                waktu_perolehan: command.waktu_perolehan,
                created_at: now,
                updated_at: now,
            })
            .await?;

        let dto = InventarisDto::from(created);
        self.recorder
            .created(actor.id, "inventaris", dto.id_inventaris, &dto)
            .await;
        Ok(dto)
    }

    pub async fn update_inventaris(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateInventarisCommand,
    ) -> ApplicationResult<InventarisDto> {
        if let Some(jumlah) = command.jumlah {
            if jumlah < 0 {
                return Err(ApplicationError::validation("jumlah cannot be negative"));
            }
        }

        let id = InventarisId::new(command.id);
        let existing = self
            .inventaris
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("inventaris not found"))?;

        let before = InventarisDto::from(existing);
        let updated = self
            .inventaris
            .update(InventarisUpdate {
                id,
                nama_barang: command.nama_barang,
                kode_barang: command.kode_barang,
                satuan: command.satuan,
                jumlah: command.jumlah,
                kondisi: command.kondisi,
                catatan: command.catatan,
                waktu_perolehan: command.waktu_perolehan,
                updated_at: self.clock.now(),
            })
            .await?;

        let after = InventarisDto::from(updated);
        self.recorder
            .updated(actor.id, "inventaris", after.id_inventaris, &before, &after)
            .await;
        Ok(after)
    }

    pub async fn delete_inventaris(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
    ) -> ApplicationResult<()> {
        let id = InventarisId::new(id);
        let existing = self
            .inventaris
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("inventaris not found"))?;

        self.inventaris.delete(id).await?;

        let snapshot = InventarisDto::from(existing);
        self.recorder
            .deleted(actor.id, "inventaris", snapshot.id_inventaris, &snapshot)
            .await;
        Ok(())
    }
}
