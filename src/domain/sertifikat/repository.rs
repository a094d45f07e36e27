use crate::domain::errors::DomainResult;
use crate::domain::sertifikat::entity::{
    NewSertifikat, Sertifikat, SertifikatId, SertifikatUpdate,
};
use crate::domain::tanah::TanahId;
use async_trait::async_trait;

#[async_trait]
pub trait SertifikatRepository: Send + Sync {
    async fn insert(&self, sertifikat: NewSertifikat) -> DomainResult<Sertifikat>;
    async fn find_by_id(&self, id: SertifikatId) -> DomainResult<Option<Sertifikat>>;
    async fn list_by_tanah(&self, id_tanah: TanahId) -> DomainResult<Vec<Sertifikat>>;
    async fn update(&self, update: SertifikatUpdate) -> DomainResult<Sertifikat>;
    async fn delete(&self, id: SertifikatId) -> DomainResult<()>;
}
