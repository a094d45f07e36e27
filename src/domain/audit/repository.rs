use crate::domain::audit::entity::{ActivityLog, NewActivityLog};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ActivityLogRepository: Send + Sync {
    async fn insert(&self, log: NewActivityLog) -> DomainResult<()>;
    async fn list(&self, limit: u32, model_type: Option<&str>) -> DomainResult<Vec<ActivityLog>>;
}
