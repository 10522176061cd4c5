use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, warn};

use crate::{
    auth::{jwt::TokenError, password::PasswordError},
    store::StoreError,
};

/// Every way a request can fail, mapped onto a status and a client-safe message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    /// Malformed request; the detail goes out as `errors`, never in `message`.
    #[error("Invalid input")]
    InvalidInput(String),

    #[error("User already exists")]
    Conflict,

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Invalid token")]
    InvalidToken,

    /// Rendered exactly like `InvalidToken`; kept apart only for logs.
    #[error("Invalid token")]
    ExpiredToken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("Task not found")]
    NotFound,

    #[error("Internal server error")]
    Internal(anyhow::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidInput(_) | ApiError::Conflict => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unauthenticated
            | ApiError::InvalidToken
            | ApiError::ExpiredToken
            | ApiError::InvalidCredentials
            | ApiError::UserNotFound => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn internal<E>(e: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        ApiError::Internal(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(ref e) = self {
            error!(error = ?e, "request failed");
        }
        let errors = match &self {
            ApiError::InvalidInput(detail) => Some(detail.clone()),
            _ => None,
        };
        let body = ErrorBody {
            message: self.to_string(),
            errors,
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<TokenError> for ApiError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Expired => ApiError::ExpiredToken,
            TokenError::Invalid => ApiError::InvalidToken,
            TokenError::Signing(e) => ApiError::internal(e),
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(e: PasswordError) -> Self {
        ApiError::internal(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateEmail(_) => ApiError::Conflict,
            other => ApiError::internal(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "rejected request body");
        ApiError::InvalidInput("malformed request body".into())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        warn!(error = %rejection.body_text(), "rejected path parameter");
        ApiError::InvalidInput("malformed path parameter".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_failures_share_one_message() {
        assert_eq!(ApiError::InvalidToken.to_string(), "Invalid token");
        assert_eq!(ApiError::ExpiredToken.to_string(), "Invalid token");
        assert_eq!(ApiError::ExpiredToken.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn internal_detail_is_not_exposed() {
        let err = ApiError::internal(anyhow::anyhow!("connection refused on 10.0.0.3"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn duplicate_email_becomes_conflict() {
        let err: ApiError = StoreError::DuplicateEmail("a@x.com".into()).into();
        assert!(matches!(err, ApiError::Conflict));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_input_keeps_detail_out_of_message() {
        let err = ApiError::InvalidInput("email must be a valid email".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid input");
    }

    #[test]
    fn statuses_follow_taxonomy() {
        assert_eq!(ApiError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Unauthenticated.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
    }
}
