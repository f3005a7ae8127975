use kernel::model::{
    id::{PromotionId, RecommendationId},
    promotion::{Promotion, Recommendation},
};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionsResponse {
    pub items: Vec<PromotionResponse>,
}

impl From<Vec<Promotion>> for PromotionsResponse {
    fn from(value: Vec<Promotion>) -> Self {
        Self {
            items: value.into_iter().map(PromotionResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionResponse {
    pub promotion_id: PromotionId,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl From<Promotion> for PromotionResponse {
    fn from(value: Promotion) -> Self {
        let Promotion {
            promotion_id,
            title,
            description,
            image_url,
        } = value;
        Self {
            promotion_id,
            title,
            description,
            image_url,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub items: Vec<RecommendationResponse>,
}

impl From<Vec<Recommendation>> for RecommendationsResponse {
    fn from(value: Vec<Recommendation>) -> Self {
        Self {
            items: value.into_iter().map(RecommendationResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub recommendation_id: RecommendationId,
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(value: Recommendation) -> Self {
        let Recommendation {
            recommendation_id,
            title,
            body,
            image_url,
        } = value;
        Self {
            recommendation_id,
            title,
            body,
            image_url,
        }
    }
}
