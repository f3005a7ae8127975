use serde::{Deserialize, Serialize};

/// アクセストークンに埋め込む識別情報。サーバー側には保存しない。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    // 署名済みトークンに email が入っていない場合でも
    // 検証自体は通し、認可側（ロールゲート）で 403 にする。
    #[serde(default)]
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct AccessToken(pub String);
