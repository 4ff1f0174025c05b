//! Identity middleware
//!
//! Role gates for the API router.

use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};

use crate::auth::CurrentUser;
use crate::auth::extractor::identity_from_headers;
use crate::utils::AppError;

/// Identity middleware: requires the gateway identity headers
///
/// Parses `X-User-Id` / `X-User-Role` and injects [`CurrentUser`] into
/// request extensions for downstream gates and handlers.
///
/// # Skipped paths
///
/// - `OPTIONS *` (CORS preflight)
/// - non-`/api/` paths
/// - `/api/health` (probes carry no identity)
pub async fn require_identity(mut req: Request, next: Next) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if !path.starts_with("/api/") || path == "/api/health" {
        return Ok(next.run(req).await);
    }

    let user = identity_from_headers(req.headers())?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

/// Staff gate: requires staff or admin role
///
/// Returns 403 Forbidden otherwise.
pub async fn require_staff(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or_else(AppError::not_authenticated)?;

    if !user.is_staff() {
        tracing::warn!(
            user_id = %user.id,
            role = %user.role,
            "Staff role required"
        );
        return Err(AppError::forbidden("Staff role required"));
    }

    Ok(next.run(req).await)
}

/// Admin gate: requires the admin role
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or_else(AppError::not_authenticated)?;

    if !user.is_admin() {
        tracing::warn!(
            user_id = %user.id,
            role = %user.role,
            "Admin role required"
        );
        return Err(AppError::new(shared::ErrorCode::AdminRequired));
    }

    Ok(next.run(req).await)
}
