// src/application/commands/sertifikat/service.rs
use std::sync::Arc;

use crate::application::{
    audit::ActivityRecorder,
    ports::{notify::NotificationEvent, notify::Notifier, time::Clock},
};
use crate::domain::{
    approval::ApprovalRepository, sertifikat::SertifikatRepository, tanah::TanahRepository,
    user::Role,
};
use tracing::warn;

pub struct SertifikatCommandService {
    pub(super) sertifikat: Arc<dyn SertifikatRepository>,
    pub(super) tanah: Arc<dyn TanahRepository>,
    pub(super) approvals: Arc<dyn ApprovalRepository>,
    pub(super) notifier: Arc<dyn Notifier>,
    pub(super) recorder: Arc<ActivityRecorder>,
    pub(super) clock: Arc<dyn Clock>,
}

impl SertifikatCommandService {
    pub fn new(
        sertifikat: Arc<dyn SertifikatRepository>,
        tanah: Arc<dyn TanahRepository>,
        approvals: Arc<dyn ApprovalRepository>,
        notifier: Arc<dyn Notifier>,
        recorder: Arc<ActivityRecorder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sertifikat,
            tanah,
            approvals,
            notifier,
            recorder,
            clock,
        }
    }

    pub(super) async fn notify_approvers(&self, event: NotificationEvent) {
        if let Err(err) = self.notifier.notify_role(Role::BidgarWakaf, event).await {
            warn!(error = %err, "failed to deliver submission notification");
        }
    }
}
