// src/infrastructure/repositories/postgres_activity_log.rs
use super::map_sqlx;
use crate::domain::audit::{ActivityLog, ActivityLogRepository, NewActivityLog};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresActivityLogRepository {
    pool: PgPool,
}

impl PostgresActivityLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ActivityLogRow {
    id: Uuid,
    user_id: Uuid,
    action: String,
    model_type: String,
    model_id: Uuid,
    changes: serde_json::Value,
    created_at: DateTime<Utc>,
}

impl TryFrom<ActivityLogRow> for ActivityLog {
    type Error = DomainError;

    fn try_from(row: ActivityLogRow) -> Result<Self, Self::Error> {
        Ok(ActivityLog {
            id: row.id,
            user_id: UserId::new(row.user_id),
            action: row.action.parse()?,
            model_type: row.model_type,
            model_id: row.model_id,
            changes: row.changes,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ActivityLogRepository for PostgresActivityLogRepository {
    async fn insert(&self, log: NewActivityLog) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO activity_logs (user_id, action, model_type, model_id, changes, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(Uuid::from(log.user_id))
        .bind(log.action.as_str())
        .bind(log.model_type)
        .bind(log.model_id)
        .bind(log.changes)
        .bind(log.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn list(&self, limit: u32, model_type: Option<&str>) -> DomainResult<Vec<ActivityLog>> {
        let rows = match model_type {
            Some(model_type) => {
                sqlx::query_as::<_, ActivityLogRow>(
                    "SELECT id, user_id, action, model_type, model_id, changes, created_at
                     FROM activity_logs WHERE model_type = $1
                     ORDER BY created_at DESC LIMIT $2",
                )
                .bind(model_type)
                .bind(i64::from(limit))
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ActivityLogRow>(
                    "SELECT id, user_id, action, model_type, model_id, changes, created_at
                     FROM activity_logs ORDER BY created_at DESC LIMIT $1",
                )
                .bind(i64::from(limit))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_sqlx)?;

        rows.into_iter().map(ActivityLog::try_from).collect()
    }
}
