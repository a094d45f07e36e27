use crate::domain::errors::DomainResult;
use crate::domain::fasilitas::FasilitasId;
use crate::domain::inventaris::entity::{
    Inventaris, InventarisId, InventarisUpdate, NewInventaris,
};
use async_trait::async_trait;

#[async_trait]
pub trait InventarisRepository: Send + Sync {
    async fn insert(&self, inventaris: NewInventaris) -> DomainResult<Inventaris>;
    async fn find_by_id(&self, id: InventarisId) -> DomainResult<Option<Inventaris>>;
    async fn list_by_fasilitas(&self, id_fasilitas: FasilitasId) -> DomainResult<Vec<Inventaris>>;
    async fn update(&self, update: InventarisUpdate) -> DomainResult<Inventaris>;
    async fn delete(&self, id: InventarisId) -> DomainResult<()>;
}
