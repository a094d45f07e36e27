// src/application/commands/tanah/service.rs
use std::sync::Arc;

use crate::application::{
    audit::ActivityRecorder,
    ports::{notify::NotificationEvent, notify::Notifier, time::Clock},
};
use crate::domain::{approval::ApprovalRepository, tanah::TanahRepository, user::Role};
use tracing::warn;

pub struct TanahCommandService {
    pub(super) tanah: Arc<dyn TanahRepository>,
    pub(super) approvals: Arc<dyn ApprovalRepository>,
    pub(super) notifier: Arc<dyn Notifier>,
    pub(super) recorder: Arc<ActivityRecorder>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TanahCommandService {
    pub fn new(
        tanah: Arc<dyn TanahRepository>,
        approvals: Arc<dyn ApprovalRepository>,
        notifier: Arc<dyn Notifier>,
        recorder: Arc<ActivityRecorder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            tanah,
            approvals,
            notifier,
            recorder,
            clock,
        }
    }

    /// Tell the approver role a submission is waiting. Best effort only.
    pub(super) async fn notify_approvers(&self, event: NotificationEvent) {
        if let Err(err) = self.notifier.notify_role(Role::BidgarWakaf, event).await {
            warn!(error = %err, "failed to deliver submission notification");
        }
    }
}
