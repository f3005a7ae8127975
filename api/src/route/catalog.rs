use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::promotion::{show_promotion_list, show_recommendation_list};

pub fn build_catalog_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/promotions", get(show_promotion_list))
        .route("/recommendations", get(show_recommendation_list))
}
