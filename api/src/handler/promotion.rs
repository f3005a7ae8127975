use crate::model::promotion::{PromotionsResponse, RecommendationsResponse};
use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn show_promotion_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PromotionsResponse>> {
    registry
        .promotion_repository()
        .find_all_promotions()
        .await
        .map(PromotionsResponse::from)
        .map(Json)
}

pub async fn show_recommendation_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RecommendationsResponse>> {
    registry
        .promotion_repository()
        .find_all_recommendations()
        .await
        .map(RecommendationsResponse::from)
        .map(Json)
}
