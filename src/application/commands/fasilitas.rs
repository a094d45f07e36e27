// src/application/commands/fasilitas.rs
use std::sync::Arc;

use crate::application::{
    audit::ActivityRecorder,
    dto::{AuthenticatedUser, FasilitasDto},
    error::{ApplicationError, ApplicationResult},
    ports::time::Clock,
};
use crate::domain::{
    fasilitas::{FasilitasId, FasilitasRepository, FasilitasUpdate, NewFasilitas},
    pemetaan::{PemetaanFasilitasId, PemetaanFasilitasRepository},
};
use uuid::Uuid;

pub struct CreateFasilitasCommand {
    pub id_pemetaan_fasilitas: Uuid,
    pub jenis_fasilitas: String,
    pub nama_fasilitas: String,
    pub keterangan: Option<String>,
}

pub struct UpdateFasilitasCommand {
    pub id: Uuid,
    pub jenis_fasilitas: Option<String>,
    pub nama_fasilitas: Option<String>,
    pub keterangan: Option<String>,
}

pub struct FasilitasCommandService {
    fasilitas: Arc<dyn FasilitasRepository>,
    pemetaan_fasilitas: Arc<dyn PemetaanFasilitasRepository>,
    recorder: Arc<ActivityRecorder>,
    clock: Arc<dyn Clock>,
}

impl FasilitasCommandService {
    pub fn new(
        fasilitas: Arc<dyn FasilitasRepository>,
        pemetaan_fasilitas: Arc<dyn PemetaanFasilitasRepository>,
        recorder: Arc<ActivityRecorder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            fasilitas,
            pemetaan_fasilitas,
            recorder,
            clock,
        }
    }

    pub async fn create_fasilitas(
        &self,
        actor: &AuthenticatedUser,
        command: CreateFasilitasCommand,
    ) -> ApplicationResult<FasilitasDto> {
        if command.nama_fasilitas.trim().is_empty() {
            return Err(ApplicationError::validation(
                "nama_fasilitas cannot be empty",
            ));
        }
        if command.jenis_fasilitas.trim().is_empty() {
            return Err(ApplicationError::validation(
                "jenis_fasilitas cannot be empty",
            ));
        }

        let id_pemetaan_fasilitas = PemetaanFasilitasId::new(command.id_pemetaan_fasilitas);
        self.pemetaan_fasilitas
            .find_by_id(id_pemetaan_fasilitas)
            .await?
            .ok_or_else(|| ApplicationError::not_found("pemetaan fasilitas not found"))?;

        let now = self.clock.now();
        let created = self
            .fasilitas
            .insert(NewFasilitas {
                id_fasilitas: FasilitasId::generate(),
                id_pemetaan_fasilitas,
                jenis_fasilitas: command.jenis_fasilitas,
                nama_fasilitas: command.nama_fasilitas,
                keterangan: command.keterangan,
                created_at: now,
                updated_at: now,
            })
            .await?;

        let dto = FasilitasDto::from(created);
        self.recorder
            .created(actor.id, "fasilitas", dto.id_fasilitas, &dto)
            .await;
        Ok(dto)
    }

    pub async fn update_fasilitas(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateFasilitasCommand,
    ) -> ApplicationResult<FasilitasDto> {
        let id = FasilitasId::new(command.id);
        let existing = self
            .fasilitas
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("fasilitas not found"))?;

        let before = FasilitasDto::from(existing);
        let updated = self
            .fasilitas
            .update(FasilitasUpdate {
                id,
                jenis_fasilitas: command.jenis_fasilitas,
                nama_fasilitas: command.nama_fasilitas,
                keterangan: command.keterangan,
                updated_at: self.clock.now(),
            })
            .await?;

        let after = FasilitasDto::from(updated);
        self.recorder
            .updated(actor.id, "fasilitas", after.id_fasilitas, &before, &after)
            .await;
        Ok(after)
    }

    pub async fn delete_fasilitas(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
    ) -> ApplicationResult<()> {
        let id = FasilitasId::new(id);
        let existing = self
            .fasilitas
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("fasilitas not found"))?;

        self.fasilitas.delete(id).await?;

        let snapshot = FasilitasDto::from(existing);
        self.recorder
            .deleted(actor.id, "fasilitas", snapshot.id_fasilitas, &snapshot)
            .await;
        Ok(())
    }
}
