//! Role Model

use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed role set (no dynamic roles)
///
/// Every user holds exactly one of these. The role alone determines
/// capability scope; there is no per-user permission list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Role {
    /// Full access: sees and mutates every ticket, moderates all comments
    Manager,
    /// Staff: works tickets assigned to them
    Support,
    /// End user: files tickets and follows their own
    User,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Manager, Role::Support, Role::User];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "MANAGER",
            Role::Support => "SUPPORT",
            Role::User => "USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    /// An unrecognized role is a configuration/data-integrity defect,
    /// not a user error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MANAGER" => Ok(Role::Manager),
            "SUPPORT" => Ok(Role::Support),
            "USER" => Ok(Role::User),
            other => Err(AppError::new(ErrorCode::UnknownRole).with_detail("role", other)),
        }
    }
}
