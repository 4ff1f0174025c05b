//! Unified error codes for the Canteen platform
//!
//! This module defines all error codes used across the server and clients.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Booking errors
//! - 5xxx: Queue errors
//! - 6xxx: Menu errors
//! - 7xxx: Slot errors
//! - 9xxx: System errors
//!
//! The 3xxx and 8xxx ranges are unassigned.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// Caller is not authenticated
    NotAuthenticated = 1001,
    /// Caller identity headers are malformed
    InvalidIdentity = 1002,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 4xxx: Booking ====================
    /// Booking not found
    BookingNotFound = 4001,
    /// Booking is not in pending status
    BookingNotPending = 4002,
    /// Booking is not in serving status
    BookingNotServing = 4003,
    /// Caller does not own this booking
    NotBookingOwner = 4004,
    /// Booking has no items
    BookingItemsEmpty = 4005,
    /// Booking item quantity must be at least 1
    BookingItemQuantityInvalid = 4006,

    // ==================== 5xxx: Queue ====================
    /// No pending booking in the slot queue
    QueueEmpty = 5001,
    /// Queue position conflict detected
    QueuePositionConflict = 5002,

    // ==================== 6xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Menu item is not available
    MenuItemUnavailable = 6002,
    /// Menu item name already exists
    MenuItemNameExists = 6003,

    // ==================== 7xxx: Slot ====================
    /// Slot not found
    SlotNotFound = 7001,
    /// Slot is at full capacity
    SlotCapacityExceeded = 7002,
    /// Slot name already exists
    SlotNameExists = 7003,
    /// Slot is not active
    SlotInactive = 7004,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "Caller is not authenticated",
            ErrorCode::InvalidIdentity => "Caller identity is malformed",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "Specific role is required",
            ErrorCode::AdminRequired => "Administrator role is required",

            // Booking
            ErrorCode::BookingNotFound => "Booking not found",
            ErrorCode::BookingNotPending => "Booking is not in pending status",
            ErrorCode::BookingNotServing => "Booking is not in serving status",
            ErrorCode::NotBookingOwner => "Caller does not own this booking",
            ErrorCode::BookingItemsEmpty => "Booking must contain at least one item",
            ErrorCode::BookingItemQuantityInvalid => "Item quantity must be at least 1",

            // Queue
            ErrorCode::QueueEmpty => "No pending booking in the queue",
            ErrorCode::QueuePositionConflict => "Queue position conflict detected",

            // Menu
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::MenuItemUnavailable => "Menu item is not available",
            ErrorCode::MenuItemNameExists => "Menu item name already exists",

            // Slot
            ErrorCode::SlotNotFound => "Slot not found",
            ErrorCode::SlotCapacityExceeded => "Slot is at full capacity",
            ErrorCode::SlotNameExists => "Slot name already exists",
            ErrorCode::SlotInactive => "Slot is not active",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidIdentity),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),
            2003 => Ok(ErrorCode::AdminRequired),

            // Booking
            4001 => Ok(ErrorCode::BookingNotFound),
            4002 => Ok(ErrorCode::BookingNotPending),
            4003 => Ok(ErrorCode::BookingNotServing),
            4004 => Ok(ErrorCode::NotBookingOwner),
            4005 => Ok(ErrorCode::BookingItemsEmpty),
            4006 => Ok(ErrorCode::BookingItemQuantityInvalid),

            // Queue
            5001 => Ok(ErrorCode::QueueEmpty),
            5002 => Ok(ErrorCode::QueuePositionConflict),

            // Menu
            6001 => Ok(ErrorCode::MenuItemNotFound),
            6002 => Ok(ErrorCode::MenuItemUnavailable),
            6003 => Ok(ErrorCode::MenuItemNameExists),

            // Slot
            7001 => Ok(ErrorCode::SlotNotFound),
            7002 => Ok(ErrorCode::SlotCapacityExceeded),
            7003 => Ok(ErrorCode::SlotNameExists),
            7004 => Ok(ErrorCode::SlotInactive),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
