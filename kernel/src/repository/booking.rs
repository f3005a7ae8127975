use crate::model::{
    booking::{
        event::{AttachResult, CreateBooking},
        Booking,
    },
    id::BookingId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // 枠の確保に成功した場合にのみ pending の予約レコードを作成する
    async fn create(&self, event: CreateBooking) -> AppResult<Booking>;
    // すべての予約を取得する
    async fn find_all(&self) -> AppResult<Vec<Booking>>;
    // ユーザーの email に紐づく予約を取得する
    async fn find_by_user_email(&self, email: &str) -> AppResult<Vec<Booking>>;
    // booking_id から予約を取得する
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    // pending の予約をキャンセルし、枠をちょうど 1 つ戻す
    async fn cancel(&self, booking_id: BookingId) -> AppResult<()>;
    // pending の予約を complete にする。枠は消費されたまま
    async fn mark_complete(&self, booking_id: BookingId) -> AppResult<()>;
    // 結果ドキュメントへのリンクを予約に紐づける
    async fn attach_result(&self, event: AttachResult) -> AppResult<()>;
}
