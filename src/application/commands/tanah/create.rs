// src/application/commands/tanah/create.rs
use super::TanahCommandService;
use crate::application::{
    dto::{AuthenticatedUser, TanahDto, WriteOutcome},
    error::{ApplicationError, ApplicationResult},
    ports::notify::NotificationEvent,
};
use crate::domain::{
    approval::{ApprovalType, NewApproval},
    status::RecordStatus,
    tanah::{NewTanah, TanahDraft, TanahId},
};

pub struct CreateTanahCommand {
    pub nama_pimpinan_jamaah: String,
    pub nama_wakif: String,
    pub lokasi: String,
    pub luas_tanah: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl CreateTanahCommand {
    fn validate(&self) -> ApplicationResult<()> {
        if self.nama_pimpinan_jamaah.trim().is_empty() {
            return Err(ApplicationError::validation(
                "nama_pimpinan_jamaah cannot be empty",
            ));
        }
        if self.nama_wakif.trim().is_empty() {
            return Err(ApplicationError::validation("nama_wakif cannot be empty"));
        }
        if self.lokasi.trim().is_empty() {
            return Err(ApplicationError::validation("lokasi cannot be empty"));
        }
        if !self.luas_tanah.is_finite() || self.luas_tanah <= 0.0 {
            return Err(ApplicationError::validation("luas_tanah must be positive"));
        }
        Ok(())
    }
}

impl TanahCommandService {
    /// Direct roles insert an approved row; a proposer's request is parked
    /// as a `tanah` approval and no row is written until sign-off.
    pub async fn create_tanah(
        &self,
        actor: &AuthenticatedUser,
        command: CreateTanahCommand,
    ) -> ApplicationResult<WriteOutcome<TanahDto>> {
        command.validate()?;
        let now = self.clock.now();

        let draft = TanahDraft {
            id_tanah: TanahId::generate(),
            nama_pimpinan_jamaah: command.nama_pimpinan_jamaah,
            nama_wakif: command.nama_wakif,
            lokasi: command.lokasi,
            luas_tanah: command.luas_tanah,
            latitude: command.latitude,
            longitude: command.longitude,
            user_id: actor.id,
        };

        if actor.role.can_mutate_tanah_directly() {
            let created = self
                .tanah
                .insert(NewTanah {
                    draft,
                    status: RecordStatus::Disetujui,
                    created_at: now,
                    updated_at: now,
                })
                .await?;

            let dto = TanahDto::from(created);
            self.recorder
                .created(actor.id, "tanah", dto.id_tanah, &dto)
                .await;
            return Ok(WriteOutcome::Applied { data: dto });
        }

        let data = serde_json::to_value(&draft)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let approval = self
            .approvals
            .insert(NewApproval {
                user_id: actor.id,
                approval_type: ApprovalType::Tanah,
                data_id: draft.id_tanah.into(),
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
