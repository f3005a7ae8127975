use crate::model::id::{BookingId, TestId};
use chrono::{DateTime, NaiveDate, Utc};

pub mod event;

#[derive(Debug, Clone)]
pub struct Booking {
    pub booking_id: BookingId,
    pub user_email: String,
    pub test_id: TestId,
    // 予約時点の検査情報のスナップショット。
    // 検査メニューが後から削除されても予約一覧は成立する。
    pub test_name: String,
    pub price_cents: i64,
    pub test_date: NaiveDate,
    pub status: BookingStatus,
    pub payment_id: Option<String>,
    pub result_link: Option<String>,
    pub booked_at: DateTime<Utc>,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Cancelled,
    Complete,
}

impl BookingStatus {
    /// cancelled / complete からの遷移は存在しない。
    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Cancelled | BookingStatus::Complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_the_only_non_terminal_status() {
        assert!(!BookingStatus::Pending.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
        assert!(BookingStatus::Complete.is_terminal());
    }

    #[test]
    fn status_round_trips_through_its_string_form() {
        use std::str::FromStr;
        for status in [
            BookingStatus::Pending,
            BookingStatus::Cancelled,
            BookingStatus::Complete,
        ] {
            assert_eq!(BookingStatus::from_str(status.as_ref()).unwrap(), status);
        }
    }
}
