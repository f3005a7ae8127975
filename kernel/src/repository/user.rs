use crate::model::{
    role::Role,
    user::{
        event::{CreateUser, UpdateUser, UpdateUserRole, UpdateUserStatus},
        User,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, event: CreateUser) -> AppResult<User>;
    async fn find_all_by_role(&self, role: Role) -> AppResult<Vec<User>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn update(&self, event: UpdateUser) -> AppResult<()>;
    async fn update_role(&self, event: UpdateUserRole) -> AppResult<()>;
    async fn update_status(&self, event: UpdateUserStatus) -> AppResult<()>;
}
