// src/application/commands/approvals/reject.rs
use super::service::ApprovalCommandService;
use crate::application::{
    dto::{ApprovalDto, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult},
    ports::notify::NotificationEvent,
};
use crate::domain::{
    approval::{ApprovalId, ApprovalPayload, ApprovalResolution, ResolutionEffect},
    audit::AuditAction,
    sertifikat::{NewSertifikat, SertifikatId, SertifikatUpdate},
    status::{ApprovalStatus, RecordStatus},
    tanah::{NewTanah, TanahId, TanahUpdate},
};

impl ApprovalCommandService {
    /// Negatively resolve a creation approval. The proposed row is still
    /// materialised, flagged `ditolak`, so rejected submissions stay
    /// visible in the registry.
    pub async fn reject(
        &self,
        actor: &AuthenticatedUser,
        id: ApprovalId,
    ) -> ApplicationResult<ApprovalDto> {
        let (approval, payload) = self.load_pending(actor, id).await?;
        let now = self.clock.now();

        let effect = match payload {
            ApprovalPayload::TanahCreate(mut draft) => {
                draft.user_id = approval.user_id;
                ResolutionEffect::UpsertTanah(NewTanah {
                    draft,
                    status: RecordStatus::Ditolak,
                    created_at: now,
                    updated_at: now,
                })
            }
            ApprovalPayload::SertifikatCreate(draft) => {
                ResolutionEffect::UpsertSertifikat(NewSertifikat {
                    draft,
                    status: RecordStatus::Ditolak,
                    created_at: now,
                    updated_at: now,
                })
            }
            ApprovalPayload::TanahUpdate(_) | ApprovalPayload::SertifikatUpdate(_) => {
                return Err(ApplicationError::validation(
                    "approval is not a creation request",
                ));
            }
        };

        let resolved = self
            .approvals
            .resolve(ApprovalResolution {
                approval_id: approval.id,
                approver_id: actor.id,
                verdict: ApprovalStatus::Ditolak,
                effect,
                resolved_at: now,
            })
            .await?;

        self.notify_proposer(
            approval.user_id,
            NotificationEvent::ApprovalRejected {
                approval_id: approval.id,
                approval_type: approval.approval_type,
            },
        )
        .await;

        self.recorder
            .recorded(
                actor.id,
                AuditAction::Create,
                Self::entity_model(approval.approval_type),
                approval.data_id,
                approval.data.clone(),
            )
            .await;

        Ok(resolved.into())
    }

    /// Negatively resolve an update approval by re-applying the
    /// `previous_data` snapshot. The snapshot lands on top of a forced
    /// `disetujui` status, as the workflow has always done.
    // TODO: confirm with product whether a rejected update should leave the
    // record `ditolak` instead of `disetujui`.
    pub async fn reject_update(
        &self,
        actor: &AuthenticatedUser,
        id: ApprovalId,
    ) -> ApplicationResult<ApprovalDto> {
        let (approval, payload) = self.load_pending(actor, id).await?;
        let now = self.clock.now();

        let effect = match payload {
            ApprovalPayload::TanahUpdate(envelope) => {
                let target = envelope
                    .previous_data
                    .id_tanah
                    .or(envelope.updated_data.id_tanah)
                    .unwrap_or_else(|| TanahId::new(approval.data_id));
                ResolutionEffect::PatchTanah(TanahUpdate {
                    id: target,
                    patch: envelope.previous_data.or_status(RecordStatus::Disetujui),
                    updated_at: now,
                })
            }
            ApprovalPayload::SertifikatUpdate(envelope) => {
                let target = envelope
                    .previous_data
                    .id_sertifikat
                    .or(envelope.updated_data.id_sertifikat)
                    .unwrap_or_else(|| SertifikatId::new(approval.data_id));
                ResolutionEffect::PatchSertifikat(SertifikatUpdate {
                    id: target,
                    patch: envelope.previous_data.or_status(RecordStatus::Disetujui),
                    updated_at: now,
                })
            }
            ApprovalPayload::TanahCreate(_) | ApprovalPayload::SertifikatCreate(_) => {
                return Err(ApplicationError::validation(
                    "approval is not an update request",
                ));
            }
        };

        let resolved = self
            .approvals
            .resolve(ApprovalResolution {
                approval_id: approval.id,
                approver_id: actor.id,
                verdict: ApprovalStatus::Ditolak,
                effect,
                resolved_at: now,
            })
            .await?;

        self.notify_proposer(
            approval.user_id,
            NotificationEvent::ApprovalRejected {
                approval_id: approval.id,
                approval_type: approval.approval_type,
            },
        )
        .await;

        self.recorder
            .recorded(
                actor.id,
                AuditAction::Update,
                Self::entity_model(approval.approval_type),
                approval.data_id,
                approval
                    .data
                    .get("previous_data")
                    .cloned()
                    .unwrap_or_default(),
            )
            .await;

        Ok(resolved.into())
    }
}
