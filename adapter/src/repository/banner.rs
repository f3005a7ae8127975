use crate::database::{model::banner::BannerRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    banner::{
        event::{CreateBanner, DeleteBanner, UpdateBanner},
        Banner,
    },
    id::BannerId,
};
use kernel::repository::banner::BannerRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BannerRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BannerRepository for BannerRepositoryImpl {
    async fn create(&self, event: CreateBanner) -> AppResult<BannerId> {
        let banner_id = BannerId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO banners
                (banner_id, title, description, image_url, coupon_code,
                discount_rate, is_active)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(banner_id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.image_url)
        .bind(&event.coupon_code)
        .bind(event.discount_rate)
        .bind(event.is_active)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No banner record has been created".into(),
            ));
        }

        Ok(banner_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Banner>> {
        let rows: Vec<BannerRow> = sqlx::query_as(
            r#"
                SELECT banner_id, title, description, image_url, coupon_code,
                discount_rate, is_active
                FROM banners
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Banner::from).collect())
    }

    async fn find_active(&self) -> AppResult<Option<Banner>> {
        let row: Option<BannerRow> = sqlx::query_as(
            r#"
                SELECT banner_id, title, description, image_url, coupon_code,
                discount_rate, is_active
                FROM banners
                WHERE is_active
                LIMIT 1
            "#,
        )
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Banner::from))
    }

    async fn update(&self, event: UpdateBanner) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE banners
                SET
                    title = COALESCE($2, title),
                    description = COALESCE($3, description),
                    image_url = COALESCE($4, image_url),
                    coupon_code = COALESCE($5, coupon_code),
                    discount_rate = COALESCE($6, discount_rate),
                    is_active = COALESCE($7, is_active)
                WHERE banner_id = $1
            "#,
        )
        .bind(event.banner_id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.image_url)
        .bind(&event.coupon_code)
        .bind(event.discount_rate)
        .bind(event.is_active)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "バナー（{}）が見つかりませんでした。",
                event.banner_id
            )));
        }

        Ok(())
    }

    async fn delete(&self, event: DeleteBanner) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM banners WHERE banner_id = $1")
            .bind(event.banner_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "バナー（{}）が見つかりませんでした。",
                event.banner_id
            )));
        }

        Ok(())
    }
}
