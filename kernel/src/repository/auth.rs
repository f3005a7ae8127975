use crate::model::auth::{AccessToken, Claims};
use shared::error::AppResult;

/// 署名付きアクセストークンの発行と検証。
/// ステートレスであり、データストアには一切アクセスしない。
/// ログアウトはクライアント側の Cookie 破棄のみで、失効管理は行わない。
pub trait TokenProvider: Send + Sync {
    fn issue(&self, email: &str) -> AppResult<AccessToken>;
    /// 欠落・改ざん・期限切れはすべて UnauthenticatedError になる。
    fn verify(&self, token: &str) -> AppResult<Claims>;
}
