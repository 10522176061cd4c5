use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, HeaderMap},
};
use tracing::warn;

use super::{cookie, jwt::JwtKeys};
use crate::{error::ApiError, store::UserId};

/// The request's principal, resolved from the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub UserId);

/// Read-only check of the incoming headers.
///
/// No cookie yields `Unauthenticated`; a cookie that fails verification
/// yields `InvalidToken` or `ExpiredToken`.
pub fn authenticate(headers: &HeaderMap, keys: &JwtKeys) -> Result<AuthUser, ApiError> {
    let token = cookie::extract(headers).ok_or(ApiError::Unauthenticated)?;

    let claims = keys.verify(&token).map_err(|e| {
        warn!(error = %e, "rejected session token");
        ApiError::from(e)
    })?;

    Ok(AuthUser(claims.sub))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        authenticate(&parts.headers, &keys)
    }
}
