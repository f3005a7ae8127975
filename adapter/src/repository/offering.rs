use crate::database::{model::offering::TestOfferingRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::TestId,
    offering::{
        event::{CreateTestOffering, DeleteTestOffering, ListTestOfferings, UpdateTestOffering},
        TestOffering,
    },
};
use kernel::repository::offering::TestOfferingRepository;
use shared::error::{AppError, AppResult};

const SELECT_OFFERING: &str = r#"
    SELECT test_id, test_name, category, description, image_url,
    price_cents, test_date, slots
    FROM tests
"#;

#[derive(new)]
pub struct TestOfferingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl TestOfferingRepository for TestOfferingRepositoryImpl {
    async fn create(&self, event: CreateTestOffering) -> AppResult<TestId> {
        let test_id = TestId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO tests
                (test_id, test_name, category, description, image_url,
                price_cents, test_date, slots)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(test_id)
        .bind(&event.test_name)
        .bind(&event.category)
        .bind(&event.description)
        .bind(&event.image_url)
        .bind(event.price_cents)
        .bind(event.test_date)
        .bind(event.slots)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No test offering record has been created".into(),
            ));
        }

        Ok(test_id)
    }

    async fn find_all(&self, filter: ListTestOfferings) -> AppResult<Vec<TestOffering>> {
        let rows: Vec<TestOfferingRow> = match filter.until {
            // 本日から指定日までの検査メニューに絞り込む
            Some(until) => {
                sqlx::query_as(&format!(
                    "{SELECT_OFFERING} WHERE test_date >= CURRENT_DATE AND test_date <= $1 ORDER BY test_date ASC"
                ))
                .bind(until)
                .fetch_all(self.db.inner_ref())
                .await
            }
            None if filter.upcoming => {
                sqlx::query_as(&format!(
                    "{SELECT_OFFERING} WHERE test_date >= CURRENT_DATE ORDER BY test_date ASC"
                ))
                .fetch_all(self.db.inner_ref())
                .await
            }
            None => {
                sqlx::query_as(&format!("{SELECT_OFFERING} ORDER BY test_date ASC"))
                    .fetch_all(self.db.inner_ref())
                    .await
            }
        }
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(TestOffering::from).collect())
    }

    async fn find_by_id(&self, test_id: TestId) -> AppResult<Option<TestOffering>> {
        let row: Option<TestOfferingRow> =
            sqlx::query_as(&format!("{SELECT_OFFERING} WHERE test_id = $1"))
                .bind(test_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(TestOffering::from))
    }

    // slots はこの UPDATE の対象外。枠の増減は SlotLedger だけが行う
    async fn update(&self, event: UpdateTestOffering) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE tests
                SET
                    test_name = COALESCE($2, test_name),
                    category = COALESCE($3, category),
                    description = COALESCE($4, description),
                    image_url = COALESCE($5, image_url),
                    price_cents = COALESCE($6, price_cents),
                    test_date = COALESCE($7, test_date)
                WHERE test_id = $1
            "#,
        )
        .bind(event.test_id)
        .bind(&event.test_name)
        .bind(&event.category)
        .bind(&event.description)
        .bind(&event.image_url)
        .bind(event.price_cents)
        .bind(event.test_date)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "検査メニュー（{}）が見つかりませんでした。",
                event.test_id
            )));
        }

        Ok(())
    }

    async fn delete(&self, event: DeleteTestOffering) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM tests WHERE test_id = $1")
            .bind(event.test_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "検査メニュー（{}）が見つかりませんでした。",
                event.test_id
            )));
        }

        Ok(())
    }
}
