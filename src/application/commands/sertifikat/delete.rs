// src/application/commands/sertifikat/delete.rs
use super::SertifikatCommandService;
use crate::application::{
    dto::{AuthenticatedUser, SertifikatDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::sertifikat::SertifikatId;
use uuid::Uuid;

pub struct DeleteSertifikatCommand {
    pub id: Uuid,
}

impl SertifikatCommandService {
    pub async fn delete_sertifikat(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteSertifikatCommand,
    ) -> ApplicationResult<()> {
        if !actor.role.can_mutate_sertifikat_directly() {
            return Err(ApplicationError::forbidden(
                "deleting sertifikat requires the Bidgar Wakaf role",
            ));
        }

        let id = SertifikatId::new(command.id);
        let existing = self
            .sertifikat
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("sertifikat not found"))?;

        self.sertifikat.delete(id).await?;

        let snapshot = SertifikatDto::from(existing);
        self.recorder
            .deleted(actor.id, "sertifikat", snapshot.id_sertifikat, &snapshot)
            .await;
        Ok(())
    }
}
