use crate::database::{
    model::promotion::{PromotionRow, RecommendationRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::promotion::{Promotion, Recommendation};
use kernel::repository::promotion::PromotionRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct PromotionRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl PromotionRepository for PromotionRepositoryImpl {
    async fn find_all_promotions(&self) -> AppResult<Vec<Promotion>> {
        let rows: Vec<PromotionRow> = sqlx::query_as(
            r#"
                SELECT promotion_id, title, description, image_url
                FROM promotions
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Promotion::from).collect())
    }

    async fn find_all_recommendations(&self) -> AppResult<Vec<Recommendation>> {
        let rows: Vec<RecommendationRow> = sqlx::query_as(
            r#"
                SELECT recommendation_id, title, body, image_url
                FROM recommendations
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Recommendation::from).collect())
    }
}
