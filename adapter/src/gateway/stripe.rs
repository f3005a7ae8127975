use async_trait::async_trait;
use kernel::gateway::payment::{PaymentGateway, PaymentIntent};
use serde::Deserialize;
use shared::error::{AppError, AppResult};

const PAYMENT_INTENTS_URL: &str = "https://api.stripe.com/v1/payment_intents";

pub struct StripePaymentGateway {
    client: reqwest::Client,
    secret_key: String,
}

impl StripePaymentGateway {
    pub fn new(secret_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key,
        }
    }
}

#[derive(Deserialize)]
struct PaymentIntentResponse {
    client_secret: String,
}

#[async_trait]
impl PaymentGateway for StripePaymentGateway {
    async fn create_intent(&self, amount_cents: i64) -> AppResult<PaymentIntent> {
        let params = [
            ("amount", amount_cents.to_string()),
            ("currency", "usd".to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let res = self
            .client
            .post(PAYMENT_INTENTS_URL)
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Stripe error: {e}")))?;

        if !res.status().is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Stripe error: {body}"
            )));
        }

        let intent: PaymentIntentResponse = res
            .json()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Stripe error: {e}")))?;

        Ok(PaymentIntent {
            client_secret: intent.client_secret,
        })
    }
}
