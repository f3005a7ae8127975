use chrono::NaiveDate;
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::TestId,
    offering::{
        event::{CreateTestOffering, ListTestOfferings, UpdateTestOffering},
        TestOffering,
    },
};
use serde::{Deserialize, Serialize};

use super::{to_cents, to_price};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestRequest {
    #[garde(length(min = 1))]
    pub test_name: String,
    #[garde(length(min = 1))]
    pub category: String,
    #[garde(skip)]
    pub description: String,
    #[garde(skip)]
    pub image_url: Option<String>,
    #[garde(range(min = 0.0))]
    pub price: f64,
    #[garde(skip)]
    pub test_date: NaiveDate,
    #[garde(range(min = 0))]
    pub slots: i32,
}

impl From<CreateTestRequest> for CreateTestOffering {
    fn from(value: CreateTestRequest) -> Self {
        let CreateTestRequest {
            test_name,
            category,
            description,
            image_url,
            price,
            test_date,
            slots,
        } = value;
        Self {
            test_name,
            category,
            description,
            image_url,
            price_cents: to_cents(price),
            test_date,
            slots,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestRequest {
    #[garde(inner(length(min = 1)))]
    pub test_name: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub category: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(skip)]
    pub image_url: Option<String>,
    #[garde(inner(range(min = 0.0)))]
    pub price: Option<f64>,
    #[garde(skip)]
    pub test_date: Option<NaiveDate>,
}

#[derive(new)]
pub struct UpdateTestRequestWithTestId(TestId, UpdateTestRequest);

impl From<UpdateTestRequestWithTestId> for UpdateTestOffering {
    fn from(value: UpdateTestRequestWithTestId) -> Self {
        let UpdateTestRequestWithTestId(
            test_id,
            UpdateTestRequest {
                test_name,
                category,
                description,
                image_url,
                price,
                test_date,
            },
        ) = value;
        UpdateTestOffering {
            test_id,
            test_name,
            category,
            description,
            image_url,
            price_cents: price.map(to_cents),
            test_date,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTestsQuery {
    pub upcoming: Option<bool>,
    pub until: Option<NaiveDate>,
}

impl From<ListTestsQuery> for ListTestOfferings {
    fn from(value: ListTestsQuery) -> Self {
        let ListTestsQuery { upcoming, until } = value;
        Self {
            upcoming: upcoming.unwrap_or(false),
            until,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestsResponse {
    pub items: Vec<TestResponse>,
}

impl From<Vec<TestOffering>> for TestsResponse {
    fn from(value: Vec<TestOffering>) -> Self {
        Self {
            items: value.into_iter().map(TestResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResponse {
    pub test_id: TestId,
    pub test_name: String,
    pub category: String,
    pub description: String,
    pub image_url: Option<String>,
    pub price: f64,
    pub test_date: NaiveDate,
    pub slots: i32,
}

impl From<TestOffering> for TestResponse {
    fn from(value: TestOffering) -> Self {
        let TestOffering {
            test_id,
            test_name,
            category,
            description,
            image_url,
            price_cents,
            test_date,
            slots,
        } = value;
        Self {
            test_id,
            test_name,
            category,
            description,
            image_url,
            price: to_price(price_cents),
            test_date,
            slots,
        }
    }
}

/// 枠を操作した後の残数
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotsRemainingResponse {
    pub slots: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_update_cannot_express_a_slots_change() {
        // PATCH のリクエスト型に slots が存在しないことの回帰テスト。
        // 枠の増減は SlotLedger 経由でしか行えない。
        let req: Result<UpdateTestRequest, _> =
            serde_json::from_str(r#"{ "slots": 5, "testName": "CBC" }"#);
        let event = UpdateTestOffering::from(UpdateTestRequestWithTestId::new(
            TestId::new(),
            req.unwrap(),
        ));
        assert_eq!(event.test_name.as_deref(), Some("CBC"));
    }
}
