// src/application/commands/sertifikat/create.rs
use super::SertifikatCommandService;
use crate::application::{
    dto::{AuthenticatedUser, SertifikatDto, WriteOutcome},
    error::{ApplicationError, ApplicationResult},
    ports::notify::NotificationEvent,
};
use crate::domain::{
    approval::{ApprovalType, NewApproval},
    sertifikat::{JenisSertifikat, NewSertifikat, SertifikatDraft, SertifikatId, StatusPengajuan},
    status::RecordStatus,
    tanah::TanahId,
};
use uuid::Uuid;

pub struct CreateSertifikatCommand {
    pub id_tanah: Uuid,
    pub no_dokumen: Option<String>,
    pub jenis_sertifikat: String,
    pub dokumen: Option<String>,
}

impl SertifikatCommandService {
    /// Bidgar Wakaf inserts an approved certificate outright. A proposer's
    /// certificate is inserted as `ditinjau` and a `sertifikat` approval
    /// carrying the same draft is parked next to it; sign-off later patches
    /// the row to `disetujui`.
    pub async fn create_sertifikat(
        &self,
        actor: &AuthenticatedUser,
        command: CreateSertifikatCommand,
    ) -> ApplicationResult<WriteOutcome<SertifikatDto>> {
        let jenis: JenisSertifikat = command.jenis_sertifikat.parse()?;
        let id_tanah = TanahId::new(command.id_tanah);
        self.tanah
            .find_by_id(id_tanah)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tanah not found"))?;

        let now = self.clock.now();
        let draft = SertifikatDraft {
            id_sertifikat: SertifikatId::generate(),
            id_tanah,
            no_dokumen: command.no_dokumen,
            jenis_sertifikat: jenis,
            status_pengajuan: StatusPengajuan::Diproses,
            user_id: actor.id,
            dokumen: command.dokumen,
        };

        if actor.role.can_mutate_sertifikat_directly() {
            let created = self
                .sertifikat
                .insert(NewSertifikat {
                    draft,
                    status: RecordStatus::Disetujui,
                    created_at: now,
                    updated_at: now,
                })
                .await?;

            let dto = SertifikatDto::from(created);
            self.recorder
                .created(actor.id, "sertifikat", dto.id_sertifikat, &dto)
                .await;
            return Ok(WriteOutcome::Applied { data: dto });
        }

        let created = self
            .sertifikat
            .insert(NewSertifikat {
                draft: draft.clone(),
                status: RecordStatus::Ditinjau,
                created_at: now,
                updated_at: now,
            })
            .await?;

        let dto = SertifikatDto::from(created);
        self.recorder
            .created(actor.id, "sertifikat", dto.id_sertifikat, &dto)
            .await;

        let data = serde_json::to_value(&draft)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let approval = self
            .approvals
            .insert(NewApproval {
                user_id: actor.id,
                approval_type: ApprovalType::Sertifikat,
                data_id: draft.id_sertifikat.into(),
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
