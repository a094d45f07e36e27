// src/application/queries/fasilitas.rs
use std::sync::Arc;

use crate::application::{
    dto::{AuthenticatedUser, FasilitasDto, InventarisDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::{
    fasilitas::{FasilitasId, FasilitasRepository},
    inventaris::InventarisRepository,
};
use uuid::Uuid;

pub struct FasilitasQueryService {
    fasilitas: Arc<dyn FasilitasRepository>,
    inventaris: Arc<dyn InventarisRepository>,
}

impl FasilitasQueryService {
    pub fn new(
        fasilitas: Arc<dyn FasilitasRepository>,
        inventaris: Arc<dyn InventarisRepository>,
    ) -> Self {
        Self {
            fasilitas,
            inventaris,
        }
    }

    pub async fn list(&self, _actor: &AuthenticatedUser) -> ApplicationResult<Vec<FasilitasDto>> {
        let rows = self.fasilitas.list().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn get(
        &self,
        _actor: &AuthenticatedUser,
        id: Uuid,
    ) -> ApplicationResult<FasilitasDto> {
        let fasilitas = self
            .fasilitas
            .find_by_id(FasilitasId::new(id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("fasilitas not found"))?;
        Ok(fasilitas.into())
    }

    pub async fn list_inventaris(
        &self,
        _actor: &AuthenticatedUser,
        id_fasilitas: Uuid,
    ) -> ApplicationResult<Vec<InventarisDto>> {
        let rows = self
            .inventaris
            .list_by_fasilitas(FasilitasId::new(id_fasilitas))
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
