use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::auth::{issue_token, logout};

pub fn build_auth_routers() -> Router<AppRegistry> {
    let auth_routers = Router::new()
        .route("/token", post(issue_token))
        .route("/logout", get(logout));

    Router::new().nest("/auth", auth_routers)
}
