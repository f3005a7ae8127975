use crate::model::{
    id::TestId,
    offering::{
        event::{CreateTestOffering, DeleteTestOffering, ListTestOfferings, UpdateTestOffering},
        TestOffering,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait TestOfferingRepository: Send + Sync {
    async fn create(&self, event: CreateTestOffering) -> AppResult<TestId>;
    async fn find_all(&self, filter: ListTestOfferings) -> AppResult<Vec<TestOffering>>;
    async fn find_by_id(&self, test_id: TestId) -> AppResult<Option<TestOffering>>;
    // slots には触れない部分更新
    async fn update(&self, event: UpdateTestOffering) -> AppResult<()>;
    async fn delete(&self, event: DeleteTestOffering) -> AppResult<()>;
}
