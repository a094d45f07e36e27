use crate::domain::errors::DomainResult;
use crate::domain::tanah::entity::{NewTanah, Tanah, TanahId, TanahUpdate};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait TanahRepository: Send + Sync {
    async fn insert(&self, tanah: NewTanah) -> DomainResult<Tanah>;
    async fn find_by_id(&self, id: TanahId) -> DomainResult<Option<Tanah>>;
    async fn list(&self) -> DomainResult<Vec<Tanah>>;
    async fn list_by_user(&self, user_id: UserId) -> DomainResult<Vec<Tanah>>;
    async fn update(&self, update: TanahUpdate) -> DomainResult<Tanah>;
    async fn delete(&self, id: TanahId) -> DomainResult<()>;
}
