use crate::model::payment::{CreatePaymentIntentRequest, PaymentIntentResponse};
use axum::{extract::State, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn create_payment_intent(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreatePaymentIntentRequest>,
) -> AppResult<Json<PaymentIntentResponse>> {
    req.validate()?;

    registry
        .payment_gateway()
        .create_intent(req.amount_cents())
        .await
        .map(PaymentIntentResponse::from)
        .map(Json)
}
