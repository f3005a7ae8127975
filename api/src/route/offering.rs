use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::offering::{
    delete_test, register_test, reserve_slot, show_test, show_test_list, update_test,
};

pub fn build_test_routers() -> Router<AppRegistry> {
    let tests_routers = Router::new()
        .route("/", get(show_test_list))
        .route("/", post(register_test))
        // PUT は旧フロント互換の枠デクリメント（reserve_slot）に割り当てている
        .route(
            "/:test_id",
            get(show_test)
                .put(reserve_slot)
                .patch(update_test)
                .delete(delete_test),
        );

    Router::new().nest("/tests", tests_routers)
}
