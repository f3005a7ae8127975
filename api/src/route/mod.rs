mod auth;
mod banner;
mod booking;
mod catalog;
mod health;
mod offering;
mod payment;
mod user;

use auth::build_auth_routers;
use axum::Router;
use banner::build_banner_routers;
use booking::build_booking_routers;
use catalog::build_catalog_routers;
use health::build_health_check_routers;
use offering::build_test_routers;
use payment::build_payment_routers;
use registry::AppRegistry;
use user::build_user_routers;

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(build_health_check_routers())
        .merge(build_auth_routers())
        .merge(build_user_routers())
        .merge(build_banner_routers())
        .merge(build_test_routers())
        .merge(build_booking_routers())
        .merge(build_payment_routers())
        .merge(build_catalog_routers())
}
