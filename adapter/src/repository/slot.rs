use crate::database::ConnectionPool;
use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::TestId;
use kernel::repository::slot::SlotLedger;
use shared::error::{AppError, AppResult};
use sqlx::PgConnection;

#[derive(new)]
pub struct SlotLedgerImpl {
    db: ConnectionPool,
}

impl SlotLedgerImpl {
    // 枠の確保は「slots > 0 のときだけ 1 減らす」という単一の条件付き UPDATE で行う。
    // 読み取ってから書き込む方式だと、同時リクエストが同じ残数を観測して
    // slots が負になるため、この形でなければならない。
    pub(crate) async fn reserve_on(
        conn: &mut PgConnection,
        test_id: TestId,
    ) -> AppResult<i32> {
        let remaining: Option<i32> = sqlx::query_scalar(
            r#"
                UPDATE tests
                SET slots = slots - 1
                WHERE test_id = $1 AND slots > 0
                RETURNING slots
            "#,
        )
        .bind(test_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(AppError::SpecificOperationError)?;

        match remaining {
            Some(slots) => Ok(slots),
            // 更新できなかった理由が「満席」か「メニューが存在しない」かを切り分ける
            None => {
                let exists: Option<i32> =
                    sqlx::query_scalar("SELECT slots FROM tests WHERE test_id = $1")
                        .bind(test_id)
                        .fetch_optional(&mut *conn)
                        .await
                        .map_err(AppError::SpecificOperationError)?;
                match exists {
                    Some(_) => Err(AppError::CapacityExhausted(format!(
                        "検査メニュー（{}）に空き枠がありません。",
                        test_id
                    ))),
                    None => Err(AppError::EntityNotFound(format!(
                        "検査メニュー（{}）が見つかりませんでした。",
                        test_id
                    ))),
                }
            }
        }
    }

    pub(crate) async fn release_on(
        conn: &mut PgConnection,
        test_id: TestId,
    ) -> AppResult<i32> {
        sqlx::query_scalar(
            r#"
                UPDATE tests
                SET slots = slots + 1
                WHERE test_id = $1
                RETURNING slots
            "#,
        )
        .bind(test_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!(
                "検査メニュー（{}）が見つかりませんでした。",
                test_id
            ))
        })
    }
}

#[async_trait]
impl SlotLedger for SlotLedgerImpl {
    async fn reserve(&self, test_id: TestId) -> AppResult<i32> {
        let mut conn = self
            .db
            .inner_ref()
            .acquire()
            .await
            .map_err(AppError::SpecificOperationError)?;
        Self::reserve_on(&mut conn, test_id).await
    }

    async fn release(&self, test_id: TestId) -> AppResult<i32> {
        let mut conn = self
            .db
            .inner_ref()
            .acquire()
            .await
            .map_err(AppError::SpecificOperationError)?;
        Self::release_on(&mut conn, test_id).await
    }

    async fn peek(&self, test_id: TestId) -> AppResult<i32> {
        sqlx::query_scalar("SELECT slots FROM tests WHERE test_id = $1")
            .bind(test_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!(
                    "検査メニュー（{}）が見つかりませんでした。",
                    test_id
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;

    async fn insert_offering(pool: &PgPool, test_id: TestId, slots: i32) {
        sqlx::query(
            r#"
                INSERT INTO tests
                (test_id, test_name, category, description, price_cents, test_date, slots)
                VALUES ($1, 'CBC', 'blood', 'complete blood count', 4900, CURRENT_DATE, $2)
            "#,
        )
        .bind(test_id)
        .bind(slots)
        .execute(pool)
        .await
        .unwrap();
    }

    #[sqlx::test(migrations = "../migrations")]
    #[ignore = "requires a running Postgres (run with DATABASE_URL set)"]
    async fn reserve_decrements_until_exhausted(pool: PgPool) {
        let ledger = SlotLedgerImpl::new(ConnectionPool::new(pool.clone()));
        let test_id = TestId::new();
        insert_offering(&pool, test_id, 2).await;

        assert_eq!(ledger.reserve(test_id).await.unwrap(), 1);
        assert_eq!(ledger.reserve(test_id).await.unwrap(), 0);

        // 残数 0 のときは一切更新せずに CapacityExhausted を返す
        assert!(matches!(
            ledger.reserve(test_id).await,
            Err(AppError::CapacityExhausted(_))
        ));
        assert_eq!(ledger.peek(test_id).await.unwrap(), 0);
    }

    #[sqlx::test(migrations = "../migrations")]
    #[ignore = "requires a running Postgres (run with DATABASE_URL set)"]
    async fn reserve_on_missing_offering_is_not_found(pool: PgPool) {
        let ledger = SlotLedgerImpl::new(ConnectionPool::new(pool));
        assert!(matches!(
            ledger.reserve(TestId::new()).await,
            Err(AppError::EntityNotFound(_))
        ));
    }

    #[sqlx::test(migrations = "../migrations")]
    #[ignore = "requires a running Postgres (run with DATABASE_URL set)"]
    async fn release_increments(pool: PgPool) {
        let ledger = SlotLedgerImpl::new(ConnectionPool::new(pool.clone()));
        let test_id = TestId::new();
        insert_offering(&pool, test_id, 1).await;

        ledger.reserve(test_id).await.unwrap();
        assert_eq!(ledger.release(test_id).await.unwrap(), 1);
    }

    // 定員 C に対して N > C 件の同時確保はちょうど C 件だけ成功する
    #[sqlx::test(migrations = "../migrations")]
    #[ignore = "requires a running Postgres (run with DATABASE_URL set)"]
    async fn concurrent_reserves_never_oversell(pool: PgPool) {
        let test_id = TestId::new();
        insert_offering(&pool, test_id, 3).await;

        let mut handles = Vec::new();
        for _ in 0..10 {
            let ledger = SlotLedgerImpl::new(ConnectionPool::new(pool.clone()));
            handles.push(tokio::spawn(
                async move { ledger.reserve(test_id).await },
            ));
        }

        let mut reserved = 0;
        let mut exhausted = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => reserved += 1,
                Err(AppError::CapacityExhausted(_)) => exhausted += 1,
                Err(e) => panic!("unexpected error: {e:?}"),
            }
        }
        assert_eq!(reserved, 3);
        assert_eq!(exhausted, 7);

        let ledger = SlotLedgerImpl::new(ConnectionPool::new(pool));
        assert_eq!(ledger.peek(test_id).await.unwrap(), 0);
    }
}
