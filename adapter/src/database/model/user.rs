use chrono::{DateTime, Utc};
use kernel::model::{
    id::UserId,
    role::Role,
    user::{User, UserStatus},
};
use shared::error::AppError;
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

// role / status は TEXT カラムなのでパースに失敗しうる。
// From ではなく TryFrom で変換する
impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            user_id,
            user_name,
            email,
            role,
            status,
            photo_url,
            created_at,
        } = value;
        Ok(User {
            user_id,
            user_name,
            email,
            role: Role::from_str(&role)
                .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
            status: UserStatus::from_str(&status)
                .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
            photo_url,
            created_at,
        })
    }
}
