// src/application/commands/approvals/approve.rs
use super::service::ApprovalCommandService;
use crate::application::{
    dto::{ApprovalDto, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult},
    ports::notify::NotificationEvent,
};
use crate::domain::{
    approval::{ApprovalId, ApprovalPayload, ApprovalResolution, ResolutionEffect},
    audit::AuditAction,
    sertifikat::{SertifikatId, SertifikatUpdate},
    status::{ApprovalStatus, RecordStatus},
    tanah::{NewTanah, TanahId, TanahUpdate},
};

impl ApprovalCommandService {
    /// Positively resolve a creation approval (`tanah` / `sertifikat`).
    /// A proposed Tanah is upserted by its submitted id; a proposed
    /// Sertifikat already has a `ditinjau` row from submission and is
    /// patched onto it. Both end up `disetujui` and owned by the proposer.
    pub async fn approve(
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
                    status: RecordStatus::Disetujui,
                    created_at: now,
                    updated_at: now,
                })
            }
            ApprovalPayload::SertifikatCreate(draft) => ResolutionEffect::PatchSertifikat(
                SertifikatUpdate {
                    id: draft.id_sertifikat,
                    patch: draft.as_patch().with_status(RecordStatus::Disetujui),
                    updated_at: now,
                },
            ),
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
                verdict: ApprovalStatus::Disetujui,
                effect,
                resolved_at: now,
            })
            .await?;

        self.notify_proposer(
            approval.user_id,
            NotificationEvent::ApprovalApproved {
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

    /// Positively resolve an update approval: apply `updated_data` onto the
    /// target row with a forced `disetujui` status.
    pub async fn approve_update(
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
                    patch: envelope.updated_data.with_status(RecordStatus::Disetujui),
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
                    patch: envelope.updated_data.with_status(RecordStatus::Disetujui),
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
                verdict: ApprovalStatus::Disetujui,
                effect,
                resolved_at: now,
            })
            .await?;

        self.notify_proposer(
            approval.user_id,
            NotificationEvent::ApprovalApproved {
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
                    .get("updated_data")
                    .cloned()
                    .unwrap_or_default(),
            )
            .await;

        Ok(resolved.into())
    }
}
