use axum::{extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use kernel::model::auth::Claims;
use kernel::repository::user::UserRepository;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

/// Bearer トークンを検証し、埋め込まれた Claims をハンドラーに渡す（認証）。
/// トークンの欠落・改ざん・期限切れはすべてここで 401 になる。
pub struct AuthorizedUser {
    pub claims: Claims,
}

impl AuthorizedUser {
    pub fn email(&self) -> &str {
        &self.claims.email
    }
}

#[axum::async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AppError::UnauthenticatedError)?;

        let claims = registry.token_provider().verify(bearer.token())?;

        Ok(Self { claims })
    }
}

/// 認可。claim の email に対応するユーザーが admin でなければ 403。
/// email を持たない claim も 403 として扱う（401 とは混同しない）。
pub async fn require_admin(users: &dyn UserRepository, claims: &Claims) -> AppResult<()> {
    if claims.email.is_empty() {
        return Err(AppError::ForbiddenOperation);
    }
    match users.find_by_email(&claims.email).await? {
        Some(user) if user.is_admin() => Ok(()),
        _ => Err(AppError::ForbiddenOperation),
    }
}

/// 自分自身の情報に限って許可する。
/// 他人の email を指定して管理者かどうかを調べることはできない。
pub fn require_self(claims: &Claims, target_email: &str) -> AppResult<()> {
    if !claims.email.is_empty() && claims.email == target_email {
        Ok(())
    } else {
        Err(AppError::ForbiddenOperation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use kernel::model::{
        id::UserId,
        role::Role,
        user::{
            event::{CreateUser, UpdateUser, UpdateUserRole, UpdateUserStatus},
            User, UserStatus,
        },
    };

    struct StaticUserRepository(Vec<User>);

    #[async_trait]
    impl UserRepository for StaticUserRepository {
        async fn create(&self, _event: CreateUser) -> AppResult<User> {
            unimplemented!()
        }
        async fn find_all_by_role(&self, _role: Role) -> AppResult<Vec<User>> {
            unimplemented!()
        }
        async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
            Ok(self.0.iter().find(|u| u.email == email).cloned())
        }
        async fn update(&self, _event: UpdateUser) -> AppResult<()> {
            unimplemented!()
        }
        async fn update_role(&self, _event: UpdateUserRole) -> AppResult<()> {
            unimplemented!()
        }
        async fn update_status(&self, _event: UpdateUserStatus) -> AppResult<()> {
            unimplemented!()
        }
    }

    fn user_with_role(email: &str, role: Role) -> User {
        User {
            user_id: UserId::new(),
            user_name: "taro".into(),
            email: email.into(),
            role,
            status: UserStatus::Active,
            photo_url: None,
            created_at: Utc::now(),
        }
    }

    fn claims_for(email: &str) -> Claims {
        let iat = Utc::now().timestamp();
        Claims {
            email: email.into(),
            iat,
            exp: iat + 3600,
        }
    }

    #[tokio::test]
    async fn admin_user_passes_the_role_gate() {
        let users = StaticUserRepository(vec![user_with_role("admin@x.com", Role::Admin)]);
        assert!(require_admin(&users, &claims_for("admin@x.com")).await.is_ok());
    }

    #[tokio::test]
    async fn plain_user_is_forbidden() {
        let users = StaticUserRepository(vec![user_with_role("user@x.com", Role::User)]);
        assert!(matches!(
            require_admin(&users, &claims_for("user@x.com")).await,
            Err(AppError::ForbiddenOperation)
        ));
    }

    #[tokio::test]
    async fn unknown_user_is_forbidden() {
        let users = StaticUserRepository(vec![]);
        assert!(matches!(
            require_admin(&users, &claims_for("ghost@x.com")).await,
            Err(AppError::ForbiddenOperation)
        ));
    }

    #[tokio::test]
    async fn claim_without_email_is_forbidden_not_a_crash() {
        let users = StaticUserRepository(vec![user_with_role("admin@x.com", Role::Admin)]);
        assert!(matches!(
            require_admin(&users, &claims_for("")).await,
            Err(AppError::ForbiddenOperation)
        ));
    }

    #[test]
    fn self_check_rejects_other_identities() {
        assert!(require_self(&claims_for("a@x.com"), "a@x.com").is_ok());
        assert!(matches!(
            require_self(&claims_for("a@x.com"), "b@x.com"),
            Err(AppError::ForbiddenOperation)
        ));
        assert!(require_self(&claims_for(""), "").is_err());
    }
}
