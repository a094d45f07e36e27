// src/infrastructure/repositories/postgres_approval.rs
use super::{map_sqlx, postgres_sertifikat, postgres_tanah};
use crate::domain::approval::{
    Approval, ApprovalId, ApprovalRepository, ApprovalResolution, ApprovalType, NewApproval,
    ResolutionEffect,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::status::ApprovalStatus;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresApprovalRepository {
    pool: PgPool,
}

impl PostgresApprovalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ApprovalRow {
    id: Uuid,
    user_id: Uuid,
    approver_id: Option<Uuid>,
    approval_type: String,
    data_id: Uuid,
    data: serde_json::Value,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ApprovalRow> for Approval {
    type Error = DomainError;

    fn try_from(row: ApprovalRow) -> Result<Self, Self::Error> {
        Ok(Approval {
            id: ApprovalId::new(row.id),
            user_id: UserId::new(row.user_id),
            approver_id: row.approver_id.map(UserId::new),
            approval_type: row.approval_type.parse()?,
            data_id: row.data_id,
            data: row.data,
            status: row.status.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ApprovalRepository for PostgresApprovalRepository {
    async fn insert(&self, approval: NewApproval) -> DomainResult<Approval> {
        let row = sqlx::query_as::<_, ApprovalRow>(
            "INSERT INTO approvals (user_id, approval_type, data_id, data, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, user_id, approver_id, approval_type, data_id, data, status, created_at, updated_at",
        )
        .bind(Uuid::from(approval.user_id))
        .bind(approval.approval_type.as_str())
        .bind(approval.data_id)
        .bind(approval.data)
        .bind(ApprovalStatus::Ditinjau.as_str())
        .bind(approval.created_at)
        .bind(approval.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Approval::try_from(row)
    }

    async fn find_by_id(&self, id: ApprovalId) -> DomainResult<Option<Approval>> {
        let row = sqlx::query_as::<_, ApprovalRow>(
            "SELECT id, user_id, approver_id, approval_type, data_id, data, status, created_at, updated_at
             FROM approvals WHERE id = $1",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Approval::try_from).transpose()
    }

    async fn list_pending(&self, kind: Option<ApprovalType>) -> DomainResult<Vec<Approval>> {
        let rows = match kind {
            Some(kind) => {
                sqlx::query_as::<_, ApprovalRow>(
                    "SELECT id, user_id, approver_id, approval_type, data_id, data, status, created_at, updated_at
                     FROM approvals WHERE status = 'ditinjau' AND approval_type = $1
                     ORDER BY created_at ASC",
                )
                .bind(kind.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ApprovalRow>(
                    "SELECT id, user_id, approver_id, approval_type, data_id, data, status, created_at, updated_at
                     FROM approvals WHERE status = 'ditinjau'
                     ORDER BY created_at ASC",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_sqlx)?;

        rows.into_iter().map(Approval::try_from).collect()
    }

    async fn resolve(&self, resolution: ApprovalResolution) -> DomainResult<Approval> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // Compare-and-swap on the pending status: a racing resolver gets
        // zero rows here and the transaction never touches the entity.
        let row = sqlx::query_as::<_, ApprovalRow>(
            "UPDATE approvals SET status = $2, approver_id = $3, updated_at = $4
             WHERE id = $1 AND status = 'ditinjau'
             RETURNING id, user_id, approver_id, approval_type, data_id, data, status, created_at, updated_at",
        )
        .bind(Uuid::from(resolution.approval_id))
        .bind(resolution.verdict.as_str())
        .bind(Uuid::from(resolution.approver_id))
        .bind(resolution.resolved_at)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let Some(row) = row else {
            let exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM approvals WHERE id = $1)",
            )
            .bind(Uuid::from(resolution.approval_id))
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

            return Err(if exists {
                DomainError::Conflict("approval already resolved".into())
            } else {
                DomainError::NotFound("approval not found".into())
            });
        };

        match &resolution.effect {
            ResolutionEffect::UpsertTanah(tanah) => {
                postgres_tanah::upsert_tanah(&mut tx, tanah).await?;
            }
            ResolutionEffect::PatchTanah(update) => {
                if postgres_tanah::patch_tanah(&mut tx, update).await?.is_none() {
                    return Err(DomainError::NotFound("tanah not found".into()));
                }
            }
            ResolutionEffect::UpsertSertifikat(sertifikat) => {
                postgres_sertifikat::upsert_sertifikat(&mut tx, sertifikat).await?;
            }
            ResolutionEffect::PatchSertifikat(update) => {
                if postgres_sertifikat::patch_sertifikat(&mut tx, update)
                    .await?
                    .is_none()
                {
                    return Err(DomainError::NotFound("sertifikat not found".into()));
                }
            }
        }

        tx.commit().await.map_err(map_sqlx)?;
        Approval::try_from(row)
    }
}
