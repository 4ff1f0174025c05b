//! Identity Extractor
//!
//! Custom extractor for the gateway-forwarded identity headers.

use axum::{extract::FromRequestParts, http::request::Parts};
use http::HeaderMap;
use shared::Role;

use crate::auth::CurrentUser;
use crate::utils::{AppError, ErrorCode};

/// Gateway identity headers
pub const HEADER_USER_ID: &str = "x-user-id";
pub const HEADER_USER_ROLE: &str = "x-user-role";

/// Parse the caller identity from request headers
///
/// The gateway strips these headers from external traffic and sets them
/// after authenticating the session, so their presence is trusted here.
pub fn identity_from_headers(headers: &HeaderMap) -> Result<CurrentUser, AppError> {
    let id = headers
        .get(HEADER_USER_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or_else(AppError::not_authenticated)?;

    let role = headers
        .get(HEADER_USER_ROLE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(AppError::not_authenticated)?;

    let role: Role = role.parse().map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidIdentity,
            format!("Unknown role: {}", role),
        )
    })?;

    Ok(CurrentUser {
        id: id.to_string(),
        role,
    })
}

/// Identity extractor
///
/// Use this extractor in handlers that need the caller's identity.
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Check if already extracted (from middleware)
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let user = identity_from_headers(&parts.headers)?;

        // Store in extensions for potential reuse
        parts.extensions.insert(user.clone());

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers(id: Option<&str>, role: Option<&str>) -> HeaderMap {
        let mut map = HeaderMap::new();
        if let Some(id) = id {
            map.insert(HEADER_USER_ID, HeaderValue::from_str(id).unwrap());
        }
        if let Some(role) = role {
            map.insert(HEADER_USER_ROLE, HeaderValue::from_str(role).unwrap());
        }
        map
    }

    #[test]
    fn test_valid_identity() {
        let user = identity_from_headers(&headers(Some("s1001"), Some("student"))).unwrap();
        assert_eq!(user.id, "s1001");
        assert_eq!(user.role, Role::Student);
    }

    #[test]
    fn test_missing_headers_rejected() {
        let err = identity_from_headers(&headers(None, None)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotAuthenticated);

        let err = identity_from_headers(&headers(Some("s1001"), None)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotAuthenticated);
    }

    #[test]
    fn test_unknown_role_rejected() {
        let err = identity_from_headers(&headers(Some("s1001"), Some("chef"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidIdentity);
    }
}
