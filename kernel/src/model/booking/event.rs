use crate::model::id::{BookingId, TestId};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateBooking {
    pub user_email: String,
    pub test_id: TestId,
    pub payment_id: Option<String>,
}

#[derive(Debug, new)]
pub struct AttachResult {
    pub booking_id: BookingId,
    pub result_link: String,
}
