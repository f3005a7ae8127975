use chrono::NaiveDate;
use kernel::model::{id::TestId, offering::TestOffering};

#[derive(sqlx::FromRow)]
pub struct TestOfferingRow {
    pub test_id: TestId,
    pub test_name: String,
    pub category: String,
    pub description: String,
    pub image_url: Option<String>,
    pub price_cents: i64,
    pub test_date: NaiveDate,
    pub slots: i32,
}

impl From<TestOfferingRow> for TestOffering {
    fn from(value: TestOfferingRow) -> Self {
        let TestOfferingRow {
            test_id,
            test_name,
            category,
            description,
            image_url,
            price_cents,
            test_date,
            slots,
        } = value;
        TestOffering {
            test_id,
            test_name,
            category,
            description,
            image_url,
            price_cents,
            test_date,
            slots,
        }
    }
}
