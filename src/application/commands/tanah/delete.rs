// src/application/commands/tanah/delete.rs
use super::TanahCommandService;
use crate::application::{
    dto::{AuthenticatedUser, TanahDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::tanah::TanahId;
use uuid::Uuid;

pub struct DeleteTanahCommand {
    pub id: Uuid,
}

impl TanahCommandService {
    /// Deletion never passes through the approval workflow; it is limited
    /// to the roles that may mutate tanah directly.
    pub async fn delete_tanah(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteTanahCommand,
    ) -> ApplicationResult<()> {
        if !actor.role.can_mutate_tanah_directly() {
            return Err(ApplicationError::forbidden(
                "deleting tanah requires a direct-mutation role",
            ));
        }

        let id = TanahId::new(command.id);
        let existing = self
            .tanah
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tanah not found"))?;

        self.tanah.delete(id).await?;

        let snapshot = TanahDto::from(existing);
        self.recorder
            .deleted(actor.id, "tanah", snapshot.id_tanah, &snapshot)
            .await;
        Ok(())
    }
}
