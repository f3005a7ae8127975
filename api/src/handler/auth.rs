use crate::model::auth::{IssueTokenRequest, IssueTokenResponse};
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn issue_token(
    State(registry): State<AppRegistry>,
    Json(req): Json<IssueTokenRequest>,
) -> AppResult<Json<IssueTokenResponse>> {
    req.validate()?;

    let token = registry.token_provider().issue(&req.email)?;
    Ok(Json(IssueTokenResponse { token: token.0 }))
}

// ログアウトはクライアント側の Cookie 破棄のみ。
// 発行済みのトークンは期限が切れるまで有効なまま
pub async fn logout() -> impl IntoResponse {
    (
        [(header::SET_COOKIE, "token=; HttpOnly; Max-Age=0; Path=/")],
        Json(serde_json::json!({ "success": true })),
    )
}
