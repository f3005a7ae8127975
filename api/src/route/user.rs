use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{
    block_user, check_admin, promote_to_admin, register_user, show_user, show_user_list,
    update_user,
};

// 第一セグメントは email と user_id の両方を受けるため、
// パラメータ名は :id に揃えてメソッドごとにハンドラを分ける
pub fn build_user_routers() -> Router<AppRegistry> {
    let users_routers = Router::new()
        .route("/", get(show_user_list))
        .route("/", post(register_user))
        .route("/:id", get(show_user).put(update_user))
        .route("/:id/status", put(block_user))
        .route("/:id/admin", get(check_admin).patch(promote_to_admin));

    Router::new().nest("/users", users_routers)
}
