use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::{
    booking::{Booking, BookingStatus},
    id::{BookingId, TestId},
};
use shared::error::AppError;
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub user_email: String,
    pub test_id: TestId,
    pub test_name: String,
    pub price_cents: i64,
    pub test_date: NaiveDate,
    pub status: String,
    pub payment_id: Option<String>,
    pub result_link: Option<String>,
    pub booked_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let BookingRow {
            booking_id,
            user_email,
            test_id,
            test_name,
            price_cents,
            test_date,
            status,
            payment_id,
            result_link,
            booked_at,
        } = value;
        Ok(Booking {
            booking_id,
            user_email,
            test_id,
            test_name,
            price_cents,
            test_date,
            status: BookingStatus::from_str(&status)
                .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
            payment_id,
            result_link,
            booked_at,
        })
    }
}
