use chrono::{DateTime, NaiveDate, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    booking::{
        event::{AttachResult, CreateBooking},
        Booking, BookingStatus,
    },
    id::{BookingId, TestId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatusName {
    Pending,
    Cancelled,
    Complete,
}

impl From<BookingStatus> for BookingStatusName {
    fn from(value: BookingStatus) -> Self {
        match value {
            BookingStatus::Pending => Self::Pending,
            BookingStatus::Cancelled => Self::Cancelled,
            BookingStatus::Complete => Self::Complete,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(email)]
    pub email: String,
    #[garde(skip)]
    pub test_id: TestId,
    #[garde(skip)]
    pub payment_id: Option<String>,
}

impl From<CreateBookingRequest> for CreateBooking {
    fn from(value: CreateBookingRequest) -> Self {
        let CreateBookingRequest {
            email,
            test_id,
            payment_id,
        } = value;
        Self {
            user_email: email,
            test_id,
            payment_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AttachResultRequest {
    #[garde(length(min = 1))]
    pub result_link: String,
}

#[derive(new)]
pub struct AttachResultRequestWithBookingId(BookingId, AttachResultRequest);

impl From<AttachResultRequestWithBookingId> for AttachResult {
    fn from(value: AttachResultRequestWithBookingId) -> Self {
        let AttachResultRequestWithBookingId(booking_id, AttachResultRequest { result_link }) =
            value;
        AttachResult {
            booking_id,
            result_link,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: BookingId,
    pub user_email: String,
    pub test_id: TestId,
    pub test_name: String,
    pub price: f64,
    pub test_date: NaiveDate,
    pub status: BookingStatusName,
    pub payment_id: Option<String>,
    pub result_link: Option<String>,
    pub booked_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
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
        Self {
            booking_id,
            user_email,
            test_id,
            test_name,
            price: price_cents as f64 / 100.0,
            test_date,
            status: BookingStatusName::from(status),
            payment_id,
            result_link,
            booked_at,
        }
    }
}
