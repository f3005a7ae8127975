use crate::model::id::{PromotionId, RecommendationId};

#[derive(Debug, Clone)]
pub struct Promotion {
    pub promotion_id: PromotionId,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Recommendation {
    pub recommendation_id: RecommendationId,
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
}
