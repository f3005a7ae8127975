use crate::model::promotion::{Promotion, Recommendation};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait PromotionRepository: Send + Sync {
    async fn find_all_promotions(&self) -> AppResult<Vec<Promotion>>;
    async fn find_all_recommendations(&self) -> AppResult<Vec<Recommendation>>;
}
