//! Caller Role Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Caller role
///
/// Identity is established upstream by the gateway; the server only
/// consumes the resolved role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Staff,
    Admin,
}

impl Role {
    /// Staff-level access (staff or admin)
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Staff | Role::Admin)
    }

    /// Admin-only access
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Role name as used in headers and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Staff => "staff",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an unknown role name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRole(pub String);

impl fmt::Display for InvalidRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid role: {}", self.0)
    }
}

impl std::error::Error for InvalidRole {}

impl FromStr for Role {
    type Err = InvalidRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "staff" => Ok(Role::Staff),
            "admin" => Ok(Role::Admin),
            other => Err(InvalidRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("student".parse::<Role>(), Ok(Role::Student));
        assert_eq!("staff".parse::<Role>(), Ok(Role::Staff));
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert!("chef".parse::<Role>().is_err());
    }

    #[test]
    fn test_access_levels() {
        assert!(!Role::Student.is_staff());
        assert!(Role::Staff.is_staff());
        assert!(Role::Admin.is_staff());
        assert!(Role::Admin.is_admin());
        assert!(!Role::Staff.is_admin());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Staff).unwrap(), "\"staff\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }
}
