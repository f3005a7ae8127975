use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::banner::{
    delete_banner, register_banner, show_active_banner, show_banner_list, update_banner,
};

pub fn build_banner_routers() -> Router<AppRegistry> {
    let banners_routers = Router::new()
        .route("/", get(show_banner_list))
        .route("/", post(register_banner))
        .route("/active", get(show_active_banner))
        .route("/:banner_id", put(update_banner))
        .route("/:banner_id", delete(delete_banner));

    Router::new().nest("/banners", banners_routers)
}
