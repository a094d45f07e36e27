// src/application/queries/sertifikat.rs
use std::sync::Arc;

use crate::application::{
    dto::{AuthenticatedUser, SertifikatDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::{
    sertifikat::{SertifikatId, SertifikatRepository},
    tanah::TanahId,
};
use uuid::Uuid;

pub struct SertifikatQueryService {
    sertifikat: Arc<dyn SertifikatRepository>,
}

impl SertifikatQueryService {
    pub fn new(sertifikat: Arc<dyn SertifikatRepository>) -> Self {
        Self { sertifikat }
    }

    pub async fn list_by_tanah(
        &self,
        _actor: &AuthenticatedUser,
        id_tanah: Uuid,
    ) -> ApplicationResult<Vec<SertifikatDto>> {
        let rows = self
            .sertifikat
            .list_by_tanah(TanahId::new(id_tanah))
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn get(
        &self,
        _actor: &AuthenticatedUser,
        id: Uuid,
    ) -> ApplicationResult<SertifikatDto> {
        let sertifikat = self
            .sertifikat
            .find_by_id(SertifikatId::new(id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("sertifikat not found"))?;
        Ok(sertifikat.into())
    }
}
