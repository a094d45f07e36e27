// src/application/commands/pemetaan/delete.rs
use super::service::PemetaanCommandService;
use crate::application::{
    dto::{AuthenticatedUser, PemetaanFasilitasDto, PemetaanTanahDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::pemetaan::{PemetaanFasilitasId, PemetaanTanahId};
use uuid::Uuid;

impl PemetaanCommandService {
    /// Child rows go with the parent via the referential constraints; the
    /// service only emits the delete and the audit entry.
    pub async fn delete_tanah_mapping(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
    ) -> ApplicationResult<()> {
        let id = PemetaanTanahId::new(id);
        let existing = self
            .pemetaan_tanah
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("pemetaan tanah not found"))?;

        self.pemetaan_tanah.delete(id).await?;

        let snapshot = PemetaanTanahDto::from(existing);
        self.recorder
            .deleted(
                actor.id,
                "pemetaan_tanah",
                snapshot.id_pemetaan_tanah,
                &snapshot,
            )
            .await;
        Ok(())
    }

    pub async fn delete_fasilitas_mapping(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
    ) -> ApplicationResult<()> {
        let id = PemetaanFasilitasId::new(id);
        let existing = self
            .pemetaan_fasilitas
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("pemetaan fasilitas not found"))?;

        self.pemetaan_fasilitas.delete(id).await?;

        let snapshot = PemetaanFasilitasDto::from(existing);
        self.recorder
            .deleted(
                actor.id,
                "pemetaan_fasilitas",
                snapshot.id_pemetaan_fasilitas,
                &snapshot,
            )
            .await;
        Ok(())
    }
}
