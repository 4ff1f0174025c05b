//! Caller identity
//!
//! Authentication happens upstream: the fronting gateway validates the
//! session and forwards the resolved identity as `X-User-Id` /
//! `X-User-Role` headers. This module only consumes that identity:
//! - [`CurrentUser`] - caller context extracted per request
//! - [`require_identity`] - middleware that rejects anonymous API calls
//! - [`require_staff`] / [`require_admin`] - role gates

pub mod extractor;
pub mod middleware;

pub use middleware::{require_admin, require_identity, require_staff};

use shared::Role;

/// Authenticated caller context
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// Opaque gateway identity (student number, staff id, ...)
    pub id: String,
    pub role: Role,
}

impl CurrentUser {
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
