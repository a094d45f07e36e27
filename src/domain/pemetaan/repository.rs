use crate::domain::errors::DomainResult;
use crate::domain::pemetaan::entity::{
    NewPemetaanFasilitas, NewPemetaanTanah, PemetaanFasilitas, PemetaanFasilitasId,
    PemetaanFasilitasUpdate, PemetaanTanah, PemetaanTanahId, PemetaanTanahUpdate,
};
use crate::domain::tanah::TanahId;
use async_trait::async_trait;

#[async_trait]
pub trait PemetaanTanahRepository: Send + Sync {
    async fn insert(&self, pemetaan: NewPemetaanTanah) -> DomainResult<PemetaanTanah>;
    async fn find_by_id(&self, id: PemetaanTanahId) -> DomainResult<Option<PemetaanTanah>>;
    async fn list_by_tanah(&self, id_tanah: TanahId) -> DomainResult<Vec<PemetaanTanah>>;
    async fn update(&self, update: PemetaanTanahUpdate) -> DomainResult<PemetaanTanah>;
    async fn delete(&self, id: PemetaanTanahId) -> DomainResult<()>;
}

#[async_trait]
pub trait PemetaanFasilitasRepository: Send + Sync {
    async fn insert(&self, pemetaan: NewPemetaanFasilitas) -> DomainResult<PemetaanFasilitas>;
    async fn find_by_id(&self, id: PemetaanFasilitasId)
    -> DomainResult<Option<PemetaanFasilitas>>;
    async fn list_by_pemetaan_tanah(
        &self,
        id_pemetaan_tanah: PemetaanTanahId,
    ) -> DomainResult<Vec<PemetaanFasilitas>>;
    async fn update(&self, update: PemetaanFasilitasUpdate) -> DomainResult<PemetaanFasilitas>;
    async fn delete(&self, id: PemetaanFasilitasId) -> DomainResult<()>;
}
