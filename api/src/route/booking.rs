use axum::{
    routing::{get, patch, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    attach_result, cancel_booking, complete_booking, register_booking, show_booking_list,
    show_bookings_by_email,
};

// GET /:id は所有者 email による検索。PUT /:id はキャンセル
pub fn build_booking_routers() -> Router<AppRegistry> {
    let bookings_routers = Router::new()
        .route("/", get(show_booking_list))
        .route("/", post(register_booking))
        .route("/:id", get(show_bookings_by_email).put(cancel_booking))
        .route("/:id/status", put(complete_booking))
        .route("/:id/result", patch(attach_result));

    Router::new().nest("/bookings", bookings_routers)
}
