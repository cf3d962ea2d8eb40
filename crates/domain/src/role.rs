use std::str::FromStr;

use estara_core::AppError;
use serde::{Deserialize, Serialize};

/// Job functions recognized by the back office.
///
/// The catalog is closed. The session layer delivers role tokens as raw
/// strings; anything that does not parse into a variant here carries no
/// permissions and matches no role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Full administrative access, including system settings and payroll.
    Admin,
    /// Operations manager; currently granted the same set as [`Role::Admin`].
    Manager,
    /// Sales team leader.
    Leader,
    /// Senior marketing lead; the only non-management role able to complete deals.
    Supermarket,
    /// Marketing staff.
    Market,
    /// Front-line sales agent.
    Sale,
}

impl Role {
    /// Returns the stable uppercase token for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
            Self::Leader => "LEADER",
            Self::Supermarket => "SUPERMARKET",
            Self::Market => "MARKET",
            Self::Sale => "SALE",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[
            Role::Admin,
            Role::Manager,
            Role::Leader,
            Role::Supermarket,
            Role::Market,
            Role::Sale,
        ];

        ALL
    }

    /// Parses a canonical uppercase token into a role.
    ///
    /// Strict on the canonical form; callers normalizing raw session input
    /// uppercase it first.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ADMIN" => Ok(Self::Admin),
            "MANAGER" => Ok(Self::Manager),
            "LEADER" => Ok(Self::Leader),
            "SUPERMARKET" => Ok(Self::Supermarket),
            "MARKET" => Ok(Self::Market),
            "SALE" => Ok(Self::Sale),
            _ => Err(AppError::Validation(format!("unknown role value '{value}'"))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}
