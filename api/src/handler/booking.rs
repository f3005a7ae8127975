use crate::model::booking::{
    AttachResultRequest, AttachResultRequestWithBookingId, BookingResponse, BookingsResponse,
    CreateBookingRequest,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::id::BookingId;
use registry::AppRegistry;
use shared::error::AppResult;

// 枠の確保と予約レコードの作成は単一のトランザクションで行われる。
// 枠がなければ 409 で返り、予約レコードは残らない
pub async fn register_booking(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate()?;

    let booking = registry.booking_repository().create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(BookingResponse::from(booking))))
}

pub async fn show_booking_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_all()
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn show_bookings_by_email(
    Path(email): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_by_user_email(&email)
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn cancel_booking(
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry.booking_repository().cancel(booking_id).await?;
    Ok(StatusCode::OK)
}

pub async fn complete_booking(
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .booking_repository()
        .mark_complete(booking_id)
        .await?;
    Ok(StatusCode::OK)
}

pub async fn attach_result(
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<AttachResultRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;

    registry
        .booking_repository()
        .attach_result(AttachResultRequestWithBookingId::new(booking_id, req).into())
        .await?;
    Ok(StatusCode::OK)
}
