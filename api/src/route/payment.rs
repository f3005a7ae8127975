use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::payment::create_payment_intent;

pub fn build_payment_routers() -> Router<AppRegistry> {
    let payments_routers = Router::new().route("/intent", post(create_payment_intent));

    Router::new().nest("/payments", payments_routers)
}
