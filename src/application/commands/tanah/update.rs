// src/application/commands/tanah/update.rs
use super::TanahCommandService;
use crate::application::{
    dto::{AuthenticatedUser, TanahDto, WriteOutcome},
    error::{ApplicationError, ApplicationResult},
    ports::notify::NotificationEvent,
};
use crate::domain::{
    approval::{ApprovalType, NewApproval},
    status::RecordStatus,
    tanah::{TanahId, TanahPatch, TanahUpdate},
};
use serde_json::json;
use uuid::Uuid;

pub struct UpdateTanahCommand {
    pub id: Uuid,
    pub nama_pimpinan_jamaah: Option<String>,
    pub nama_wakif: Option<String>,
    pub lokasi: Option<String>,
    pub luas_tanah: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl UpdateTanahCommand {
    fn into_patch(self) -> ApplicationResult<TanahPatch> {
        for (field, value) in [
            ("nama_pimpinan_jamaah", &self.nama_pimpinan_jamaah),
            ("nama_wakif", &self.nama_wakif),
            ("lokasi", &self.lokasi),
        ] {
            if let Some(value) = value {
                if value.trim().is_empty() {
                    return Err(ApplicationError::validation(format!(
                        "{field} cannot be empty"
                    )));
                }
            }
        }
        if let Some(luas) = self.luas_tanah {
            if !luas.is_finite() || luas <= 0.0 {
                return Err(ApplicationError::validation("luas_tanah must be positive"));
            }
        }

        let patch = TanahPatch {
            id_tanah: None,
            nama_pimpinan_jamaah: self.nama_pimpinan_jamaah,
            nama_wakif: self.nama_wakif,
            lokasi: self.lokasi,
            luas_tanah: self.luas_tanah,
            latitude: self.latitude,
            longitude: self.longitude,
            status: None,
        };
        if patch == TanahPatch::default() {
            return Err(ApplicationError::validation("no fields to update"));
        }
        Ok(patch)
    }
}

impl TanahCommandService {
    /// Direct roles patch the row in place (re-stamped `disetujui`); a
    /// proposer's change is wrapped in a `tanah_update` approval carrying
    /// the current snapshot and the requested patch.
    pub async fn update_tanah(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateTanahCommand,
    ) -> ApplicationResult<WriteOutcome<TanahDto>> {
        let id = TanahId::new(command.id);
        let existing = self
            .tanah
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tanah not found"))?;

        let patch = command.into_patch()?;
        let now = self.clock.now();

        if actor.role.can_mutate_tanah_directly() {
            let before = TanahDto::from(existing);
            let updated = self
                .tanah
                .update(TanahUpdate {
                    id,
                    patch: patch.with_status(RecordStatus::Disetujui),
                    updated_at: now,
                })
                .await?;

            let after = TanahDto::from(updated);
            self.recorder
                .updated(actor.id, "tanah", after.id_tanah, &before, &after)
                .await;
            return Ok(WriteOutcome::Applied { data: after });
        }

        if existing.user_id != actor.id {
            return Err(ApplicationError::forbidden(
                "only the owning user may propose changes to this tanah",
            ));
        }

        let data = json!({
            "previous_data": existing.as_patch(),
            "updated_data": patch,
        });
        let approval = self
            .approvals
            .insert(NewApproval {
                user_id: actor.id,
                approval_type: ApprovalType::TanahUpdate,
                data_id: id.into(),
                data,
                created_at: now,
                updated_at: now,
            })
            .await?;

        self.notify_approvers(NotificationEvent::ApprovalSubmitted {
            approval_id: approval.id,
            approval_type: approval.approval_type,
        })
        .await;

        Ok(WriteOutcome::PendingApproval {
            approval: approval.into(),
        })
    }
}
