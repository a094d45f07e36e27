// src/application/queries/pemetaan.rs
use std::sync::Arc;

use crate::application::{
    dto::{AuthenticatedUser, PemetaanFasilitasDto, PemetaanTanahDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::{
    pemetaan::{
        PemetaanFasilitasRepository, PemetaanTanahId, PemetaanTanahRepository,
    },
    tanah::TanahId,
};
use uuid::Uuid;

pub struct PemetaanQueryService {
    pemetaan_tanah: Arc<dyn PemetaanTanahRepository>,
    pemetaan_fasilitas: Arc<dyn PemetaanFasilitasRepository>,
}

impl PemetaanQueryService {
    pub fn new(
        pemetaan_tanah: Arc<dyn PemetaanTanahRepository>,
        pemetaan_fasilitas: Arc<dyn PemetaanFasilitasRepository>,
    ) -> Self {
        Self {
            pemetaan_tanah,
            pemetaan_fasilitas,
        }
    }

    pub async fn list_by_tanah(
        &self,
        _actor: &AuthenticatedUser,
        id_tanah: Uuid,
    ) -> ApplicationResult<Vec<PemetaanTanahDto>> {
        let rows = self
            .pemetaan_tanah
            .list_by_tanah(TanahId::new(id_tanah))
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn get_tanah_mapping(
        &self,
        _actor: &AuthenticatedUser,
        id: Uuid,
    ) -> ApplicationResult<PemetaanTanahDto> {
        let pemetaan = self
            .pemetaan_tanah
            .find_by_id(PemetaanTanahId::new(id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("pemetaan tanah not found"))?;
        Ok(pemetaan.into())
    }

    pub async fn list_fasilitas_by_pemetaan(
        &self,
        _actor: &AuthenticatedUser,
        id_pemetaan_tanah: Uuid,
    ) -> ApplicationResult<Vec<PemetaanFasilitasDto>> {
        let rows = self
            .pemetaan_fasilitas
            .list_by_pemetaan_tanah(PemetaanTanahId::new(id_pemetaan_tanah))
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
