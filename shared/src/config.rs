use anyhow::{Context, Result};
use std::env;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub payment: PaymentConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env::var("DATABASE_HOST").context("DATABASE_HOST is not set")?,
            port: env::var("DATABASE_PORT")
                .context("DATABASE_PORT is not set")?
                .parse()
                .context("DATABASE_PORT must be a port number")?,
            username: env::var("DATABASE_USERNAME").context("DATABASE_USERNAME is not set")?,
            password: env::var("DATABASE_PASSWORD").context("DATABASE_PASSWORD is not set")?,
            database: env::var("DATABASE_NAME").context("DATABASE_NAME is not set")?,
        };
        let auth = AuthConfig {
            token_secret: env::var("ACCESS_TOKEN_SECRET")
                .context("ACCESS_TOKEN_SECRET is not set")?,
            // アクセストークンの有効期限（秒）。デフォルトは 1 時間
            ttl: env::var("ACCESS_TOKEN_TTL")
                .ok()
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("ACCESS_TOKEN_TTL must be seconds")?
                .unwrap_or(3600),
        };
        let payment = PaymentConfig {
            stripe_secret_key: env::var("STRIPE_SECRET_KEY")
                .context("STRIPE_SECRET_KEY is not set")?,
        };
        let server = ServerConfig {
            port: env::var("PORT")
                .ok()
                .map(|v| v.parse::<u16>())
                .transpose()
                .context("PORT must be a port number")?
                .unwrap_or(5000),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| {
                    "http://localhost:5173,http://localhost:5174".to_string()
                })
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        };
        Ok(Self {
            database,
            auth,
            payment,
            server,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct AuthConfig {
    pub token_secret: String,
    pub ttl: u64,
}

pub struct PaymentConfig {
    pub stripe_secret_key: String,
}

pub struct ServerConfig {
    pub port: u16,
    pub allowed_origins: Vec<String>,
}
