use crate::domain::errors::DomainResult;
use crate::domain::fasilitas::entity::{Fasilitas, FasilitasId, FasilitasUpdate, NewFasilitas};
use async_trait::async_trait;

#[async_trait]
pub trait FasilitasRepository: Send + Sync {
    async fn insert(&self, fasilitas: NewFasilitas) -> DomainResult<Fasilitas>;
    async fn find_by_id(&self, id: FasilitasId) -> DomainResult<Option<Fasilitas>>;
    async fn list(&self) -> DomainResult<Vec<Fasilitas>>;
    async fn update(&self, update: FasilitasUpdate) -> DomainResult<Fasilitas>;
    async fn delete(&self, id: FasilitasId) -> DomainResult<()>;
}
