// src/security/permission.rs - Role checks for gateway endpoints
use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role tag carried by every authenticated member.
///
/// Roles are compared for strict equality. No role implies another, so an
/// admin calling a seller endpoint is rejected like anyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberRole {
    #[serde(rename = "ROLE_CONSUMER")]
    Consumer,
    #[serde(rename = "ROLE_SELLER")]
    Seller,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl MemberRole {
    /// Wire name as sent in the `memberRole` header
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Consumer => "ROLE_CONSUMER",
            MemberRole::Seller => "ROLE_SELLER",
            MemberRole::Admin => "ROLE_ADMIN",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown member role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for MemberRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ROLE_CONSUMER" => Ok(MemberRole::Consumer),
            "ROLE_SELLER" => Ok(MemberRole::Seller),
            "ROLE_ADMIN" => Ok(MemberRole::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Error types for permission checks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    #[error("insufficient permission")]
    InvalidPermission {
        actual: MemberRole,
        required: MemberRole,
    },
}

/// Reject the request unless `actual` is exactly `required`.
pub fn check_member_role(actual: MemberRole, required: MemberRole) -> Result<(), PermissionError> {
    if actual != required {
        warn!("Permission denied: role {} used on endpoint requiring {}", actual, required);
        return Err(PermissionError::InvalidPermission { actual, required });
    }

    debug!("Permission granted for role {}", actual);
    Ok(())
}
