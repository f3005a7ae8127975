use garde::Validate;
use kernel::gateway::payment::PaymentIntent;
use serde::{Deserialize, Serialize};

use super::to_cents;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    // ドル単位。ゲートウェイにはセントに換算して渡す
    #[garde(range(min = 0.0))]
    pub price: f64,
}

impl CreatePaymentIntentRequest {
    pub fn amount_cents(&self) -> i64 {
        to_cents(self.price)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

impl From<PaymentIntent> for PaymentIntentResponse {
    fn from(value: PaymentIntent) -> Self {
        Self {
            client_secret: value.client_secret,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_in_dollars_becomes_cents() {
        let req = CreatePaymentIntentRequest { price: 49.99 };
        assert_eq!(req.amount_cents(), 4999);
    }
}
