use crate::model::id::TestId;
use chrono::NaiveDate;

pub mod event;

/// 検査メニュー。slots は SlotLedger 経由でのみ増減する。
#[derive(Debug, Clone)]
pub struct TestOffering {
    pub test_id: TestId,
    pub test_name: String,
    pub category: String,
    pub description: String,
    pub image_url: Option<String>,
    pub price_cents: i64,
    pub test_date: NaiveDate,
    pub slots: i32,
}
