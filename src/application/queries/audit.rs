// src/application/queries/audit.rs
use std::sync::Arc;

use crate::application::{
    dto::{ActivityLogDto, AuthenticatedUser},
    error::ApplicationResult,
};
use crate::domain::audit::ActivityLogRepository;

const DEFAULT_LIMIT: u32 = 50;
const MAX_LIMIT: u32 = 200;

pub struct ActivityQueryService {
    logs: Arc<dyn ActivityLogRepository>,
}

impl ActivityQueryService {
    pub fn new(logs: Arc<dyn ActivityLogRepository>) -> Self {
        Self { logs }
    }

    pub async fn list(
        &self,
        _actor: &AuthenticatedUser,
        limit: Option<u32>,
        model_type: Option<&str>,
    ) -> ApplicationResult<Vec<ActivityLogDto>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let rows = self.logs.list(limit, model_type).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
