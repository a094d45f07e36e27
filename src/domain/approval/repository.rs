use crate::domain::approval::entity::{
    Approval, ApprovalId, ApprovalResolution, ApprovalType, NewApproval,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ApprovalRepository: Send + Sync {
    async fn insert(&self, approval: NewApproval) -> DomainResult<Approval>;
    async fn find_by_id(&self, id: ApprovalId) -> DomainResult<Option<Approval>>;
    /// Pending (`ditinjau`) rows, optionally narrowed to one type.
    async fn list_pending(&self, kind: Option<ApprovalType>) -> DomainResult<Vec<Approval>>;
    /// Atomically flip a pending approval to its verdict and apply the
    /// entity-side effect. Implementations must guard the flip with a
    /// status check so a second resolver observes `Conflict`, and must
    /// roll the flip back when the effect fails.
    async fn resolve(&self, resolution: ApprovalResolution) -> DomainResult<Approval>;
}
