use crate::{
    database::{model::booking::BookingRow, ConnectionPool},
    repository::slot::SlotLedgerImpl,
};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use derive_new::new;
use kernel::model::{
    booking::{
        event::{AttachResult, CreateBooking},
        Booking, BookingStatus,
    },
    id::{BookingId, TestId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    // 予約操作を行う
    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        let mut tx = self.db.begin().await?;

        // 先に枠を確保する。確保できなければ予約レコードは作らない。
        // INSERT が失敗した場合はトランザクションごと巻き戻るので、
        // 確保だけが残って枠が漏れることはない。
        SlotLedgerImpl::reserve_on(&mut tx, event.test_id).await?;

        // 予約時点の検査情報をスナップショットとして保存する
        let offering: Option<(String, i64, NaiveDate)> = sqlx::query_as(
            r#"
                SELECT test_name, price_cents, test_date
                FROM tests
                WHERE test_id = $1
            "#,
        )
        .bind(event.test_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some((test_name, price_cents, test_date)) = offering else {
            return Err(AppError::EntityNotFound(format!(
                "検査メニュー（{}）が見つかりませんでした。",
                event.test_id
            )));
        };

        let booking_id = BookingId::new();
        let booked_at = Utc::now();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (booking_id, user_email, test_id, test_name, price_cents,
                test_date, status, payment_id, booked_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(booking_id)
        .bind(&event.user_email)
        .bind(event.test_id)
        .bind(&test_name)
        .bind(price_cents)
        .bind(test_date)
        .bind(BookingStatus::Pending.as_ref())
        .bind(&event.payment_id)
        .bind(booked_at)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(Booking {
            booking_id,
            user_email: event.user_email,
            test_id: event.test_id,
            test_name,
            price_cents,
            test_date,
            status: BookingStatus::Pending,
            payment_id: event.payment_id,
            result_link: None,
            booked_at,
        })
    }

    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            r#"
                SELECT booking_id, user_email, test_id, test_name, price_cents,
                test_date, status, payment_id, result_link, booked_at
                FROM bookings
                ORDER BY booked_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn find_by_user_email(&self, email: &str) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            r#"
                SELECT booking_id, user_email, test_id, test_name, price_cents,
                test_date, status, payment_id, result_link, booked_at
                FROM bookings
                WHERE user_email = $1
                ORDER BY booked_at DESC
            "#,
        )
        .bind(email)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let row: Option<BookingRow> = sqlx::query_as(
            r#"
                SELECT booking_id, user_email, test_id, test_name, price_cents,
                test_date, status, payment_id, result_link, booked_at
                FROM bookings
                WHERE booking_id = $1
            "#,
        )
        .bind(booking_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Booking::try_from).transpose()
    }

    // キャンセル操作を行う
    async fn cancel(&self, booking_id: BookingId) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        // pending のときだけ cancelled に遷移させる条件付き UPDATE。
        // 二重キャンセルはここで 0 行更新となり、枠が二重に戻ることはない。
        let test_id: Option<TestId> = sqlx::query_scalar(
            r#"
                UPDATE bookings
                SET status = 'cancelled'
                WHERE booking_id = $1 AND status = 'pending'
                RETURNING test_id
            "#,
        )
        .bind(booking_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(test_id) = test_id else {
            // 更新できなかった理由を「存在しない」か「終端状態」かに切り分ける
            let status: Option<String> =
                sqlx::query_scalar("SELECT status FROM bookings WHERE booking_id = $1")
                    .bind(booking_id)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(AppError::SpecificOperationError)?;
            return match status {
                None => Err(AppError::EntityNotFound(format!(
                    "予約（{}）が見つかりませんでした。",
                    booking_id
                ))),
                Some(status) => Err(AppError::AlreadyTerminal(format!(
                    "予約（{}）はすでに {} です。",
                    booking_id, status
                ))),
            };
        };

        // 同一トランザクションで枠をちょうど 1 つ戻す。
        // 参照先の検査メニューが削除済みの場合は EntityNotFound で全体を失敗させ、
        // 予約は pending のまま残す
        SlotLedgerImpl::release_on(&mut tx, test_id).await?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    // 完了操作を行う。枠は消費されたままなので SlotLedger には触れない
    async fn mark_complete(&self, booking_id: BookingId) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET status = 'complete'
                WHERE booking_id = $1 AND status = 'pending'
            "#,
        )
        .bind(booking_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            // cancel と同じく、同一トランザクション内で
            // 「存在しない」か「終端状態」かを切り分ける
            let status: Option<String> =
                sqlx::query_scalar("SELECT status FROM bookings WHERE booking_id = $1")
                    .bind(booking_id)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(AppError::SpecificOperationError)?;
            return match status {
                None => Err(AppError::EntityNotFound(format!(
                    "予約（{}）が見つかりませんでした。",
                    booking_id
                ))),
                Some(status) => Err(AppError::AlreadyTerminal(format!(
                    "予約（{}）はすでに {} です。",
                    booking_id, status
                ))),
            };
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn attach_result(&self, event: AttachResult) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET result_link = $2
                WHERE booking_id = $1
            "#,
        )
        .bind(event.booking_id)
        .bind(&event.result_link)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "予約（{}）が見つかりませんでした。",
                event.booking_id
            )));
        }

        Ok(())
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

    async fn slots_of(pool: &PgPool, test_id: TestId) -> i32 {
        sqlx::query_scalar("SELECT slots FROM tests WHERE test_id = $1")
            .bind(test_id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test(migrations = "../migrations")]
    #[ignore = "requires a running Postgres (run with DATABASE_URL set)"]
    async fn create_reserves_exactly_one_slot(pool: PgPool) {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let test_id = TestId::new();
        insert_offering(&pool, test_id, 2).await;

        let booking = repo
            .create(CreateBooking::new("a@x.com".into(), test_id, None))
            .await
            .unwrap();

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(slots_of(&pool, test_id).await, 1);
    }

    #[sqlx::test(migrations = "../migrations")]
    #[ignore = "requires a running Postgres (run with DATABASE_URL set)"]
    async fn create_on_sold_out_offering_records_nothing(pool: PgPool) {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let test_id = TestId::new();
        insert_offering(&pool, test_id, 0).await;

        let result = repo
            .create(CreateBooking::new("a@x.com".into(), test_id, None))
            .await;
        assert!(matches!(result, Err(AppError::CapacityExhausted(_))));

        assert_eq!(slots_of(&pool, test_id).await, 0);
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    // 定員 C、同時リクエスト N > C のとき、成功はちょうど C 件
    #[sqlx::test(migrations = "../migrations")]
    #[ignore = "requires a running Postgres (run with DATABASE_URL set)"]
    async fn concurrent_creates_never_overbook(pool: PgPool) {
        let test_id = TestId::new();
        insert_offering(&pool, test_id, 1).await;

        let mut handles = Vec::new();
        for i in 0..2 {
            let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
            handles.push(tokio::spawn(async move {
                repo.create(CreateBooking::new(format!("u{i}@x.com"), test_id, None))
                    .await
            }));
        }

        let mut created = 0;
        let mut exhausted = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(AppError::CapacityExhausted(_)) => exhausted += 1,
                Err(e) => panic!("unexpected error: {e:?}"),
            }
        }
        assert_eq!(created, 1);
        assert_eq!(exhausted, 1);
        assert_eq!(slots_of(&pool, test_id).await, 0);
    }

    #[sqlx::test(migrations = "../migrations")]
    #[ignore = "requires a running Postgres (run with DATABASE_URL set)"]
    async fn cancel_releases_exactly_once(pool: PgPool) {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let test_id = TestId::new();
        insert_offering(&pool, test_id, 1).await;

        let booking = repo
            .create(CreateBooking::new("a@x.com".into(), test_id, None))
            .await
            .unwrap();
        assert_eq!(slots_of(&pool, test_id).await, 0);

        repo.cancel(booking.booking_id).await.unwrap();
        assert_eq!(slots_of(&pool, test_id).await, 1);
        let cancelled = repo.find_by_id(booking.booking_id).await.unwrap().unwrap();
        assert_eq!(cancelled.status, BookingStatus::Cancelled);

        // 二重キャンセルは AlreadyTerminal で、枠は変化しない
        assert!(matches!(
            repo.cancel(booking.booking_id).await,
            Err(AppError::AlreadyTerminal(_))
        ));
        assert_eq!(slots_of(&pool, test_id).await, 1);
    }

    #[sqlx::test(migrations = "../migrations")]
    #[ignore = "requires a running Postgres (run with DATABASE_URL set)"]
    async fn complete_keeps_the_slot_consumed(pool: PgPool) {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let test_id = TestId::new();
        insert_offering(&pool, test_id, 1).await;

        let booking = repo
            .create(CreateBooking::new("a@x.com".into(), test_id, None))
            .await
            .unwrap();

        repo.mark_complete(booking.booking_id).await.unwrap();
        assert_eq!(slots_of(&pool, test_id).await, 0);

        // complete からのキャンセルも終端状態エラー
        assert!(matches!(
            repo.cancel(booking.booking_id).await,
            Err(AppError::AlreadyTerminal(_))
        ));
    }

    #[sqlx::test(migrations = "../migrations")]
    #[ignore = "requires a running Postgres (run with DATABASE_URL set)"]
    async fn mark_complete_disambiguates_missing_and_terminal(pool: PgPool) {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let test_id = TestId::new();
        insert_offering(&pool, test_id, 1).await;

        // 存在しない予約は EntityNotFound
        assert!(matches!(
            repo.mark_complete(BookingId::new()).await,
            Err(AppError::EntityNotFound(_))
        ));

        let booking = repo
            .create(CreateBooking::new("a@x.com".into(), test_id, None))
            .await
            .unwrap();
        repo.mark_complete(booking.booking_id).await.unwrap();

        // 二重の完了指示は AlreadyTerminal
        assert!(matches!(
            repo.mark_complete(booking.booking_id).await,
            Err(AppError::AlreadyTerminal(_))
        ));
    }

    #[sqlx::test(migrations = "../migrations")]
    #[ignore = "requires a running Postgres (run with DATABASE_URL set)"]
    async fn cancel_against_deleted_offering_is_blocked(pool: PgPool) {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let test_id = TestId::new();
        insert_offering(&pool, test_id, 1).await;

        let booking = repo
            .create(CreateBooking::new("a@x.com".into(), test_id, None))
            .await
            .unwrap();

        sqlx::query("DELETE FROM tests WHERE test_id = $1")
            .bind(test_id)
            .execute(&pool)
            .await
            .unwrap();

        assert!(matches!(
            repo.cancel(booking.booking_id).await,
            Err(AppError::EntityNotFound(_))
        ));
        // トランザクションが巻き戻るため、予約は pending のまま
        let unchanged = repo.find_by_id(booking.booking_id).await.unwrap().unwrap();
        assert_eq!(unchanged.status, BookingStatus::Pending);
    }
}
