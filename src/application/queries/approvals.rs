// src/application/queries/approvals.rs
use std::sync::Arc;

use crate::application::{
    commands::gate::ensure_bidgar_wakaf,
    dto::{ApprovalDetailDto, ApprovalDto, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::approval::{ApprovalId, ApprovalRepository, ApprovalType};
use uuid::Uuid;

pub struct ApprovalQueryService {
    approvals: Arc<dyn ApprovalRepository>,
}

impl ApprovalQueryService {
    pub fn new(approvals: Arc<dyn ApprovalRepository>) -> Self {
        Self { approvals }
    }

    /// Pending approvals, oldest first. Reviewer-only.
    pub async fn list_pending(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ApprovalDto>> {
        ensure_bidgar_wakaf(actor)?;
        let approvals = self.approvals.list_pending(None).await?;
        Ok(approvals.into_iter().map(Into::into).collect())
    }

    /// Pending approvals of one type. The path parameter is parsed here so
    /// an unknown type surfaces as a 400, not an empty list.
    pub async fn list_pending_by_type(
        &self,
        actor: &AuthenticatedUser,
        tipe: &str,
    ) -> ApplicationResult<Vec<ApprovalDto>> {
        ensure_bidgar_wakaf(actor)?;
        let kind: ApprovalType = tipe.parse()?;
        let approvals = self.approvals.list_pending(Some(kind)).await?;
        Ok(approvals.into_iter().map(Into::into).collect())
    }

    /// Detail view including the raw `data` blob.
    pub async fn show(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
    ) -> ApplicationResult<ApprovalDetailDto> {
        ensure_bidgar_wakaf(actor)?;
        let approval = self
            .approvals
            .find_by_id(ApprovalId::new(id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("approval not found"))?;

        let data = approval.data.clone();
        Ok(ApprovalDetailDto {
            approval: approval.into(),
            data,
        })
    }
}
