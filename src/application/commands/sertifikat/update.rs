// src/application/commands/sertifikat/update.rs
use super::SertifikatCommandService;
use crate::application::{
    dto::{AuthenticatedUser, SertifikatDto, WriteOutcome},
    error::{ApplicationError, ApplicationResult},
    ports::notify::NotificationEvent,
};
use crate::domain::{
    approval::{ApprovalType, NewApproval},
    sertifikat::{
        JenisSertifikat, SertifikatId, SertifikatPatch, SertifikatUpdate, StatusPengajuan,
    },
    status::RecordStatus,
};
use serde_json::json;
use uuid::Uuid;

pub struct UpdateSertifikatCommand {
    pub id: Uuid,
    pub no_dokumen: Option<String>,
    pub jenis_sertifikat: Option<String>,
    pub status_pengajuan: Option<String>,
    pub dokumen: Option<String>,
}

impl UpdateSertifikatCommand {
    fn into_patch(self) -> ApplicationResult<SertifikatPatch> {
        let patch = SertifikatPatch {
            id_sertifikat: None,
            id_tanah: None,
            no_dokumen: self.no_dokumen,
            jenis_sertifikat: self
                .jenis_sertifikat
                .as_deref()
                .map(str::parse::<JenisSertifikat>)
                .transpose()?,
            status_pengajuan: self
                .status_pengajuan
                .as_deref()
                .map(str::parse::<StatusPengajuan>)
                .transpose()?,
            status: None,
            dokumen: self.dokumen,
        };
        if patch == SertifikatPatch::default() {
            return Err(ApplicationError::validation("no fields to update"));
        }
        Ok(patch)
    }
}

impl SertifikatCommandService {
    pub async fn update_sertifikat(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateSertifikatCommand,
    ) -> ApplicationResult<WriteOutcome<SertifikatDto>> {
        let id = SertifikatId::new(command.id);
        let existing = self
            .sertifikat
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("sertifikat not found"))?;

        let patch = command.into_patch()?;
        let now = self.clock.now();

        if actor.role.can_mutate_sertifikat_directly() {
            let before = SertifikatDto::from(existing);
            let updated = self
                .sertifikat
                .update(SertifikatUpdate {
                    id,
                    patch: patch.with_status(RecordStatus::Disetujui),
                    updated_at: now,
                })
                .await?;

            let after = SertifikatDto::from(updated);
            self.recorder
                .updated(actor.id, "sertifikat", after.id_sertifikat, &before, &after)
                .await;
            return Ok(WriteOutcome::Applied { data: after });
        }

        if existing.user_id != actor.id {
            return Err(ApplicationError::forbidden(
                "only the owning user may propose changes to this sertifikat",
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
                approval_type: ApprovalType::SertifikatUpdate,
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
