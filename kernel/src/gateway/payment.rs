use async_trait::async_trait;
use shared::error::AppResult;

/// 決済ゲートウェイが返すインテント。client_secret をフロントに渡す。
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    pub client_secret: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// 金額（セント単位）から決済インテントを作成する。
    async fn create_intent(&self, amount_cents: i64) -> AppResult<PaymentIntent>;
}
