use crate::model::{
    banner::{
        event::{CreateBanner, DeleteBanner, UpdateBanner},
        Banner,
    },
    id::BannerId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BannerRepository: Send + Sync {
    async fn create(&self, event: CreateBanner) -> AppResult<BannerId>;
    async fn find_all(&self) -> AppResult<Vec<Banner>>;
    async fn find_active(&self) -> AppResult<Option<Banner>>;
    async fn update(&self, event: UpdateBanner) -> AppResult<()>;
    async fn delete(&self, event: DeleteBanner) -> AppResult<()>;
}
