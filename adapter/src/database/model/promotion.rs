use kernel::model::{
    id::{PromotionId, RecommendationId},
    promotion::{Promotion, Recommendation},
};

#[derive(sqlx::FromRow)]
pub struct PromotionRow {
    pub promotion_id: PromotionId,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl From<PromotionRow> for Promotion {
    fn from(value: PromotionRow) -> Self {
        let PromotionRow {
            promotion_id,
            title,
            description,
            image_url,
        } = value;
        Promotion {
            promotion_id,
            title,
            description,
            image_url,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct RecommendationRow {
    pub recommendation_id: RecommendationId,
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
}

impl From<RecommendationRow> for Recommendation {
    fn from(value: RecommendationRow) -> Self {
        let RecommendationRow {
            recommendation_id,
            title,
            body,
            image_url,
        } = value;
        Recommendation {
            recommendation_id,
            title,
            body,
            image_url,
        }
    }
}
