use crate::model::{id::UserId, role::Role, user::UserStatus};
use derive_new::new;

/// 登録イベント。email をキーとした upsert として扱う。
#[derive(Debug, new)]
pub struct CreateUser {
    pub user_name: String,
    pub email: String,
    pub photo_url: Option<String>,
}

#[derive(Debug)]
pub struct UpdateUser {
    pub user_id: UserId,
    pub user_name: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, new)]
pub struct UpdateUserRole {
    pub user_id: UserId,
    pub role: Role,
}

#[derive(Debug, new)]
pub struct UpdateUserStatus {
    pub email: String,
    pub status: UserStatus,
}
