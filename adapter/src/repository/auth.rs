use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use kernel::model::auth::{AccessToken, Claims};
use kernel::repository::auth::TokenProvider;
use shared::error::{AppError, AppResult};

/// HS256 署名のアクセストークンを発行・検証する。
/// セッションを持たないため、発行済みのトークンは期限が切れるまで有効なまま。
pub struct JwtTokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: u64,
}

impl JwtTokenProvider {
    pub fn new(secret: &str, ttl: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }
}

impl TokenProvider for JwtTokenProvider {
    fn issue(&self, email: &str) -> AppResult<AccessToken> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            email: email.to_string(),
            iat,
            exp: iat + self.ttl as i64,
        };
        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .map(AccessToken)
            .map_err(AppError::TokenCreationError)
    }

    fn verify(&self, token: &str) -> AppResult<Claims> {
        // 改ざん・期限切れ・形式不正はすべて 401 相当として扱う
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AppError::UnauthenticatedError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies_back_to_the_same_claim() {
        let provider = JwtTokenProvider::new("test-secret", 3600);
        let token = provider.issue("a@x.com").unwrap();
        let claims = provider.verify(&token.0).unwrap();
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let provider = JwtTokenProvider::new("test-secret", 3600);
        let other = JwtTokenProvider::new("another-secret", 3600);
        let token = other.issue("a@x.com").unwrap();
        assert!(matches!(
            provider.verify(&token.0),
            Err(AppError::UnauthenticatedError)
        ));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let provider = JwtTokenProvider::new("test-secret", 3600);
        let token = provider.issue("a@x.com").unwrap();
        let tampered = format!("{}x", token.0);
        assert!(matches!(
            provider.verify(&tampered),
            Err(AppError::UnauthenticatedError)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let provider = JwtTokenProvider::new("test-secret", 3600);
        let iat = Utc::now().timestamp() - 7200;
        let claims = Claims {
            email: "a@x.com".into(),
            iat,
            // デフォルトの leeway（60 秒）を大きく超えた過去
            exp: iat + 10,
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        assert!(matches!(
            provider.verify(&token),
            Err(AppError::UnauthenticatedError)
        ));
    }

    #[test]
    fn token_without_email_still_verifies_with_empty_claim() {
        // email を含まないトークンは検証は通り、ロールゲート側で拒否される
        let provider = JwtTokenProvider::new("test-secret", 3600);
        let iat = Utc::now().timestamp();
        let payload = serde_json::json!({ "iat": iat, "exp": iat + 3600 });
        let token = jsonwebtoken::encode(
            &Header::default(),
            &payload,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        let claims = provider.verify(&token).unwrap();
        assert!(claims.email.is_empty());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let provider = JwtTokenProvider::new("test-secret", 3600);
        assert!(matches!(
            provider.verify("not-a-token"),
            Err(AppError::UnauthenticatedError)
        ));
    }
}
