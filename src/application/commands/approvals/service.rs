// src/application/commands/approvals/service.rs
use std::sync::Arc;

use crate::application::{
    audit::ActivityRecorder,
    commands::gate::ensure_bidgar_wakaf,
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::{notify::NotificationEvent, notify::Notifier, time::Clock},
};
use crate::domain::approval::{
    Approval, ApprovalId, ApprovalPayload, ApprovalRepository, ApprovalType,
};
use tracing::warn;

pub struct ApprovalCommandService {
    pub(super) approvals: Arc<dyn ApprovalRepository>,
    pub(super) notifier: Arc<dyn Notifier>,
    pub(super) recorder: Arc<ActivityRecorder>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ApprovalCommandService {
    pub fn new(
        approvals: Arc<dyn ApprovalRepository>,
        notifier: Arc<dyn Notifier>,
        recorder: Arc<ActivityRecorder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            approvals,
            notifier,
            recorder,
            clock,
        }
    }

    /// Gate, load and decode a pending approval. Returns `Conflict` when a
    /// racing resolver already flipped the row; the repository re-checks
    /// the same condition inside the resolve transaction.
    pub(super) async fn load_pending(
        &self,
        actor: &AuthenticatedUser,
        id: ApprovalId,
    ) -> ApplicationResult<(Approval, ApprovalPayload)> {
        ensure_bidgar_wakaf(actor)?;

        let approval = self
            .approvals
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("approval not found"))?;

        if approval.status.is_terminal() {
            return Err(ApplicationError::conflict("approval already resolved"));
        }

        let payload = approval.payload()?;
        Ok((approval, payload))
    }

    /// Notification delivery must never influence the resolution outcome;
    /// failures are logged and dropped.
    pub(super) async fn notify_proposer(&self, recipient: crate::domain::user::UserId, event: NotificationEvent) {
        if let Err(err) = self.notifier.notify_user(recipient, event).await {
            warn!(error = %err, "failed to deliver approval notification");
        }
    }

    pub(super) fn entity_model(approval_type: ApprovalType) -> &'static str {
        match approval_type {
            ApprovalType::Tanah | ApprovalType::TanahUpdate => "tanah",
            ApprovalType::Sertifikat | ApprovalType::SertifikatUpdate => "sertifikat",
        }
    }
}
