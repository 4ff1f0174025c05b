//! HTTP status mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the HTTP status code for this error code
    ///
    /// Business failures map:
    /// - not-found kinds → 404
    /// - ownership/role kinds → 403
    /// - illegal state transitions → 422
    /// - capacity / uniqueness conflicts → 409
    /// - malformed input → 400
    /// - storage and internal failures → 500
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            ErrorCode::Success => StatusCode::OK,

            // 400 Bad Request
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidRequest
            | ErrorCode::InvalidFormat
            | ErrorCode::RequiredField
            | ErrorCode::ValueOutOfRange
            | ErrorCode::BookingItemsEmpty
            | ErrorCode::BookingItemQuantityInvalid => StatusCode::BAD_REQUEST,

            // 401 Unauthorized
            ErrorCode::NotAuthenticated | ErrorCode::InvalidIdentity => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            ErrorCode::PermissionDenied
            | ErrorCode::RoleRequired
            | ErrorCode::AdminRequired
            | ErrorCode::NotBookingOwner => StatusCode::FORBIDDEN,

            // 404 Not Found
            ErrorCode::NotFound
            | ErrorCode::BookingNotFound
            | ErrorCode::QueueEmpty
            | ErrorCode::MenuItemNotFound
            | ErrorCode::SlotNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            ErrorCode::AlreadyExists
            | ErrorCode::QueuePositionConflict
            | ErrorCode::MenuItemNameExists
            | ErrorCode::SlotNameExists
            | ErrorCode::SlotCapacityExceeded => StatusCode::CONFLICT,

            // 422 Unprocessable Entity: illegal for the current status
            ErrorCode::BookingNotPending
            | ErrorCode::BookingNotServing
            | ErrorCode::MenuItemUnavailable
            | ErrorCode::SlotInactive => StatusCode::UNPROCESSABLE_ENTITY,

            // 504 Gateway Timeout
            ErrorCode::TimeoutError => StatusCode::GATEWAY_TIMEOUT,

            // 500 Internal Server Error
            ErrorCode::Unknown
            | ErrorCode::InternalError
            | ErrorCode::DatabaseError
            | ErrorCode::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::NotAuthenticated.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ErrorCode::NotBookingOwner.http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ErrorCode::BookingNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ErrorCode::QueueEmpty.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::SlotCapacityExceeded.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::BookingNotPending.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
