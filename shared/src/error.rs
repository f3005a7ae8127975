use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    // 予約枠が売り切れ（slots == 0）のときに返すエラー
    #[error("{0}")]
    CapacityExhausted(String),
    // すでに cancelled / complete になっている予約への操作
    #[error("{0}")]
    AlreadyTerminal(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("transaction error")]
    TransactionError(#[source] sqlx::Error),
    #[error("database operation error")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("database query error")]
    DbQueryError(#[source] sqlx::Error),
    #[error("no rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("failed to sign access token")]
    TokenCreationError(#[source] jsonwebtoken::errors::Error),
    #[error("unauthenticated")]
    UnauthenticatedError,
    #[error("forbidden operation")]
    ForbiddenOperation,
    #[error("{0}")]
    ConversionEntityError(String),
    #[error("{0}")]
    ExternalServiceError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match &self {
            AppError::UnprocessableEntity(_) | AppError::ValidationError(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::CapacityExhausted(_) | AppError::AlreadyTerminal(_) => StatusCode::CONFLICT,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::ForbiddenOperation => StatusCode::FORBIDDEN,
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::DbQueryError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::TokenCreationError(_)
            | AppError::ConversionEntityError(_)
            | AppError::ExternalServiceError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "unexpected error happened"
            );
        }

        (status_code, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn authentication_failures_are_401() {
        assert_eq!(
            status_of(AppError::UnauthenticatedError),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn authorization_failures_are_403() {
        assert_eq!(
            status_of(AppError::ForbiddenOperation),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn capacity_and_terminal_conflicts_are_409() {
        assert_eq!(
            status_of(AppError::CapacityExhausted("sold out".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(AppError::AlreadyTerminal("already cancelled".into())),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn missing_entities_are_404() {
        assert_eq!(
            status_of(AppError::EntityNotFound("no such test".into())),
            StatusCode::NOT_FOUND
        );
    }
}
