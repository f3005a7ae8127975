use crate::model::id::TestId;
use chrono::NaiveDate;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateTestOffering {
    pub test_name: String,
    pub category: String,
    pub description: String,
    pub image_url: Option<String>,
    pub price_cents: i64,
    pub test_date: NaiveDate,
    pub slots: i32,
}

// slots を持たない。空き枠の増減は SlotLedger だけが行う。
#[derive(Debug)]
pub struct UpdateTestOffering {
    pub test_id: TestId,
    pub test_name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price_cents: Option<i64>,
    pub test_date: Option<NaiveDate>,
}

#[derive(Debug, new)]
pub struct DeleteTestOffering {
    pub test_id: TestId,
}

/// 一覧取得の絞り込み。upcoming は本日以降、until は指定日まで。
#[derive(Debug, Default, new)]
pub struct ListTestOfferings {
    pub upcoming: bool,
    pub until: Option<NaiveDate>,
}
