use crate::database::{model::user::UserRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{
        event::{CreateUser, UpdateUser, UpdateUserRole, UpdateUserStatus},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    // 初回サインイン時に呼ばれるため、email をキーとした upsert にしている
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let user_id = UserId::new();
        let row: UserRow = sqlx::query_as(
            r#"
                INSERT INTO users
                (user_id, user_name, email, role, status, photo_url, created_at)
                VALUES ($1, $2, $3, 'user', 'active', $4, NOW())
                ON CONFLICT (email) DO UPDATE SET
                    user_name = EXCLUDED.user_name,
                    photo_url = COALESCE(EXCLUDED.photo_url, users.photo_url)
                RETURNING user_id, user_name, email, role, status, photo_url, created_at
            "#,
        )
        .bind(user_id)
        .bind(&event.user_name)
        .bind(&event.email)
        .bind(&event.photo_url)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.try_into()
    }

    async fn find_all_by_role(&self, role: Role) -> AppResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, user_name, email, role, status, photo_url, created_at
                FROM users
                WHERE role = $1
                ORDER BY created_at ASC
            "#,
        )
        .bind(role.as_ref())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, user_name, email, role, status, photo_url, created_at
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }

    async fn update(&self, event: UpdateUser) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE users
                SET
                    user_name = COALESCE($2, user_name),
                    photo_url = COALESCE($3, photo_url)
                WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .bind(&event.user_name)
        .bind(&event.photo_url)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "ユーザー（{}）が見つかりませんでした。",
                event.user_id
            )));
        }

        Ok(())
    }

    async fn update_role(&self, event: UpdateUserRole) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE users
                SET role = $2
                WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .bind(event.role.as_ref())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "ユーザー（{}）が見つかりませんでした。",
                event.user_id
            )));
        }

        Ok(())
    }

    async fn update_status(&self, event: UpdateUserStatus) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE users
                SET status = $2
                WHERE email = $1
            "#,
        )
        .bind(&event.email)
        .bind(event.status.as_ref())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "ユーザー（{}）が見つかりませんでした。",
                event.email
            )));
        }

        Ok(())
    }
}
