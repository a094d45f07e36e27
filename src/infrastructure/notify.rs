// src/infrastructure/notify.rs
use crate::application::ports::notify::{NotificationEvent, Notifier};
use crate::domain::errors::DomainResult;
use crate::domain::user::{Role, UserId};
use async_trait::async_trait;
use tracing::info;

/// Stand-in sink: delivery (mail, in-app, push) is owned by an external
/// system, so the core only records that an event was handed over.
#[derive(Debug, Default)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify_user(&self, recipient: UserId, event: NotificationEvent) -> DomainResult<()> {
        info!(recipient = %recipient, event = ?event, "notification dispatched");
        Ok(())
    }

    async fn notify_role(&self, role: Role, event: NotificationEvent) -> DomainResult<()> {
        info!(role = %role, event = ?event, "role notification dispatched");
        Ok(())
    }
}
