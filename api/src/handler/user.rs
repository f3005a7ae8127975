use crate::{
    extractor::{require_admin, require_self, AuthorizedUser},
    model::user::{
        AdminCheckResponse, CreateUserRequest, ListUsersQuery, UpdateUserRequest,
        UpdateUserRequestWithUserId, UserResponse, UsersResponse,
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{event::UpdateUserRole, event::UpdateUserStatus, UserStatus},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate()?;

    let user = registry.user_repository().create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

pub async fn show_user_list(
    Query(query): Query<ListUsersQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UsersResponse>> {
    // 絞り込み未指定のときは一般ユーザーの一覧を返す
    let role = query.role.map(Role::from).unwrap_or(Role::User);
    registry
        .user_repository()
        .find_all_by_role(role)
        .await
        .map(UsersResponse::from)
        .map(Json)
}

pub async fn show_user(
    Path(email): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserResponse>> {
    registry
        .user_repository()
        .find_by_email(&email)
        .await?
        .map(UserResponse::from)
        .map(Json)
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("ユーザー（{}）が見つかりませんでした。", email))
        })
}

pub async fn update_user(
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateUserRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;

    registry
        .user_repository()
        .update(UpdateUserRequestWithUserId::new(user_id, req).into())
        .await?;
    Ok(StatusCode::OK)
}

pub async fn block_user(
    Path(email): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .user_repository()
        .update_status(UpdateUserStatus::new(email, UserStatus::Blocked))
        .await?;
    Ok(StatusCode::OK)
}

// 自分自身の email に対してのみ管理者かどうかを返す。
// 他人の昇格状況は照会できない
pub async fn check_admin(
    user: AuthorizedUser,
    Path(email): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AdminCheckResponse>> {
    require_self(&user.claims, &email)?;

    let admin = registry
        .user_repository()
        .find_by_email(&email)
        .await?
        .map(|u| u.is_admin())
        .unwrap_or(false);
    Ok(Json(AdminCheckResponse { admin }))
}

pub async fn promote_to_admin(
    user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let users = registry.user_repository();
    require_admin(users.as_ref(), &user.claims).await?;

    users
        .update_role(UpdateUserRole::new(user_id, Role::Admin))
        .await?;
    Ok(StatusCode::OK)
}
