// src/application/queries/tanah.rs
use std::sync::Arc;

use crate::application::{
    dto::{AuthenticatedUser, TanahDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::{
    tanah::{TanahId, TanahRepository},
    user::Role,
};
use uuid::Uuid;

pub struct TanahQueryService {
    tanah: Arc<dyn TanahRepository>,
}

impl TanahQueryService {
    pub fn new(tanah: Arc<dyn TanahRepository>) -> Self {
        Self { tanah }
    }

    /// Proposers see their own parcels; supervising roles see everything.
    pub async fn list(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<TanahDto>> {
        let rows = match actor.role {
            Role::PimpinanJamaah => self.tanah.list_by_user(actor.id).await?,
            Role::PimpinanCabang | Role::BidgarWakaf => self.tanah.list().await?,
        };
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, _actor: &AuthenticatedUser, id: Uuid) -> ApplicationResult<TanahDto> {
        let tanah = self
            .tanah
            .find_by_id(TanahId::new(id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("tanah not found"))?;
        Ok(tanah.into())
    }
}
