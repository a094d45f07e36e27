// src/application/ports/notify.rs
use crate::domain::approval::{ApprovalId, ApprovalType};
use crate::domain::errors::DomainResult;
use crate::domain::user::{Role, UserId};
use async_trait::async_trait;
use serde::Serialize;

/// Workflow events handed to the delivery transport. The transport itself
/// (mail, in-app, push) lives outside this service.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NotificationEvent {
    ApprovalSubmitted {
        approval_id: ApprovalId,
        approval_type: ApprovalType,
    },
    ApprovalApproved {
        approval_id: ApprovalId,
        approval_type: ApprovalType,
    },
    ApprovalRejected {
        approval_id: ApprovalId,
        approval_type: ApprovalType,
    },
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify_user(&self, recipient: UserId, event: NotificationEvent) -> DomainResult<()>;
    async fn notify_role(&self, role: Role, event: NotificationEvent) -> DomainResult<()>;
}
