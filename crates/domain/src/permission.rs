use std::str::FromStr;

use estara_core::AppError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Permissions enforced by guard and policy checks.
///
/// The catalog is closed: every grantable capability in the brokerage
/// back office is a variant here, and the role configuration table may
/// only reference these. Tokens follow the `resource:action` convention
/// used by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Allows creating development projects.
    ProjectCreate,
    /// Allows reading development projects.
    ProjectRead,
    /// Allows updating development projects.
    ProjectUpdate,
    /// Allows deleting development projects.
    ProjectDelete,
    /// Allows creating apartments inside a project.
    ApartmentCreate,
    /// Allows reading apartments.
    ApartmentRead,
    /// Allows updating apartments.
    ApartmentUpdate,
    /// Allows deleting apartments.
    ApartmentDelete,
    /// Allows creating customer records.
    CustomerCreate,
    /// Allows reading customer records.
    CustomerRead,
    /// Allows updating customer records.
    CustomerUpdate,
    /// Allows deleting customer records.
    CustomerDelete,
    /// Allows reading a customer's unmasked phone number.
    CustomerReadPhone,
    /// Allows creating deals.
    DealCreate,
    /// Allows reading deals.
    DealRead,
    /// Allows updating deals.
    DealUpdate,
    /// Allows deleting deals.
    DealDelete,
    /// Allows marking a deal as completed.
    DealComplete,
    /// Allows creating deal payments.
    DealPaymentCreate,
    /// Allows reading deal payments.
    DealPaymentRead,
    /// Allows updating deal payments.
    DealPaymentUpdate,
    /// Allows deleting deal payments.
    DealPaymentDelete,
    /// Allows creating blog posts.
    BlogCreate,
    /// Allows reading blog posts in the back office.
    BlogRead,
    /// Allows updating blog posts.
    BlogUpdate,
    /// Allows deleting blog posts.
    BlogDelete,
    /// Allows viewing the analytics dashboard.
    DashboardView,
    /// Allows reading payroll data.
    PayrollRead,
    /// Allows managing payroll runs.
    PayrollManage,
    /// Allows reading bonus data.
    BonusRead,
    /// Allows managing bonus schemes.
    BonusManage,
    /// Allows creating back-office user accounts.
    UserCreate,
    /// Allows reading back-office user accounts.
    UserRead,
    /// Allows updating back-office user accounts.
    UserUpdate,
    /// Allows deleting back-office user accounts.
    UserDelete,
    /// Allows reading team composition.
    TeamRead,
    /// Allows managing team composition.
    TeamManage,
    /// Allows changing system-wide settings.
    SystemManage,
}

impl Permission {
    /// Returns the stable `resource:action` token for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectCreate => "project:create",
            Self::ProjectRead => "project:read",
            Self::ProjectUpdate => "project:update",
            Self::ProjectDelete => "project:delete",
            Self::ApartmentCreate => "apartment:create",
            Self::ApartmentRead => "apartment:read",
            Self::ApartmentUpdate => "apartment:update",
            Self::ApartmentDelete => "apartment:delete",
            Self::CustomerCreate => "customer:create",
            Self::CustomerRead => "customer:read",
            Self::CustomerUpdate => "customer:update",
            Self::CustomerDelete => "customer:delete",
            Self::CustomerReadPhone => "customer:read_phone",
            Self::DealCreate => "deal:create",
            Self::DealRead => "deal:read",
            Self::DealUpdate => "deal:update",
            Self::DealDelete => "deal:delete",
            Self::DealComplete => "deal:complete",
            Self::DealPaymentCreate => "deal_payment:create",
            Self::DealPaymentRead => "deal_payment:read",
            Self::DealPaymentUpdate => "deal_payment:update",
            Self::DealPaymentDelete => "deal_payment:delete",
            Self::BlogCreate => "blog:create",
            Self::BlogRead => "blog:read",
            Self::BlogUpdate => "blog:update",
            Self::BlogDelete => "blog:delete",
            Self::DashboardView => "dashboard:view",
            Self::PayrollRead => "payroll:read",
            Self::PayrollManage => "payroll:manage",
            Self::BonusRead => "bonus:read",
            Self::BonusManage => "bonus:manage",
            Self::UserCreate => "user:create",
            Self::UserRead => "user:read",
            Self::UserUpdate => "user:update",
            Self::UserDelete => "user:delete",
            Self::TeamRead => "team:read",
            Self::TeamManage => "team:manage",
            Self::SystemManage => "system:manage",
        }
    }

    /// Returns the resource half of the `resource:action` token.
    #[must_use]
    pub fn resource(&self) -> &'static str {
        match self.as_str().split_once(':') {
            Some((resource, _)) => resource,
            None => self.as_str(),
        }
    }

    /// Returns the action half of the `resource:action` token.
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self.as_str().split_once(':') {
            Some((_, action)) => action,
            None => self.as_str(),
        }
    }

    /// Returns all known permissions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::ProjectCreate,
            Permission::ProjectRead,
            Permission::ProjectUpdate,
            Permission::ProjectDelete,
            Permission::ApartmentCreate,
            Permission::ApartmentRead,
            Permission::ApartmentUpdate,
            Permission::ApartmentDelete,
            Permission::CustomerCreate,
            Permission::CustomerRead,
            Permission::CustomerUpdate,
            Permission::CustomerDelete,
            Permission::CustomerReadPhone,
            Permission::DealCreate,
            Permission::DealRead,
            Permission::DealUpdate,
            Permission::DealDelete,
            Permission::DealComplete,
            Permission::DealPaymentCreate,
            Permission::DealPaymentRead,
            Permission::DealPaymentUpdate,
            Permission::DealPaymentDelete,
            Permission::BlogCreate,
            Permission::BlogRead,
            Permission::BlogUpdate,
            Permission::BlogDelete,
            Permission::DashboardView,
            Permission::PayrollRead,
            Permission::PayrollManage,
            Permission::BonusRead,
            Permission::BonusManage,
            Permission::UserCreate,
            Permission::UserRead,
            Permission::UserUpdate,
            Permission::UserDelete,
            Permission::TeamRead,
            Permission::TeamManage,
            Permission::SystemManage,
        ];

        ALL
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "project:create" => Ok(Self::ProjectCreate),
            "project:read" => Ok(Self::ProjectRead),
            "project:update" => Ok(Self::ProjectUpdate),
            "project:delete" => Ok(Self::ProjectDelete),
            "apartment:create" => Ok(Self::ApartmentCreate),
            "apartment:read" => Ok(Self::ApartmentRead),
            "apartment:update" => Ok(Self::ApartmentUpdate),
            "apartment:delete" => Ok(Self::ApartmentDelete),
            "customer:create" => Ok(Self::CustomerCreate),
            "customer:read" => Ok(Self::CustomerRead),
            "customer:update" => Ok(Self::CustomerUpdate),
            "customer:delete" => Ok(Self::CustomerDelete),
            "customer:read_phone" => Ok(Self::CustomerReadPhone),
            "deal:create" => Ok(Self::DealCreate),
            "deal:read" => Ok(Self::DealRead),
            "deal:update" => Ok(Self::DealUpdate),
            "deal:delete" => Ok(Self::DealDelete),
            "deal:complete" => Ok(Self::DealComplete),
            "deal_payment:create" => Ok(Self::DealPaymentCreate),
            "deal_payment:read" => Ok(Self::DealPaymentRead),
            "deal_payment:update" => Ok(Self::DealPaymentUpdate),
            "deal_payment:delete" => Ok(Self::DealPaymentDelete),
            "blog:create" => Ok(Self::BlogCreate),
            "blog:read" => Ok(Self::BlogRead),
            "blog:update" => Ok(Self::BlogUpdate),
            "blog:delete" => Ok(Self::BlogDelete),
            "dashboard:view" => Ok(Self::DashboardView),
            "payroll:read" => Ok(Self::PayrollRead),
            "payroll:manage" => Ok(Self::PayrollManage),
            "bonus:read" => Ok(Self::BonusRead),
            "bonus:manage" => Ok(Self::BonusManage),
            "user:create" => Ok(Self::UserCreate),
            "user:read" => Ok(Self::UserRead),
            "user:update" => Ok(Self::UserUpdate),
            "user:delete" => Ok(Self::UserDelete),
            "team:read" => Ok(Self::TeamRead),
            "team:manage" => Ok(Self::TeamManage),
            "system:manage" => Ok(Self::SystemManage),
            _ => Err(AppError::Validation(format!(
                "unknown permission value '{value}'"
            ))),
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

// serde derive cannot rename into `resource:action`, so serialization goes
// through the canonical token.
impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::from_str(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use super::Permission;

    #[test]
    fn every_permission_roundtrips_through_its_token() {
        for permission in Permission::all() {
            assert_eq!(
                Permission::from_str(permission.as_str()).ok(),
                Some(*permission)
            );
        }
    }

    #[test]
    fn unknown_permission_is_rejected() {
        assert!(Permission::from_str("deal:approve").is_err());
        assert!(Permission::from_str("project").is_err());
        assert!(Permission::from_str("").is_err());
    }

    #[test]
    fn tokens_are_collision_free() {
        let tokens: HashSet<&str> = Permission::all().iter().map(|p| p.as_str()).collect();
        assert_eq!(tokens.len(), Permission::all().len());
    }

    #[test]
    fn tokens_follow_resource_action_convention() {
        for permission in Permission::all() {
            let (resource, action) = (permission.resource(), permission.action());
            assert!(!resource.is_empty());
            assert!(!action.is_empty());
            assert_eq!(permission.as_str(), format!("{resource}:{action}"));
        }
    }

    #[test]
    fn serializes_as_canonical_token() {
        let json = serde_json::to_string(&Permission::DealComplete);
        assert_eq!(json.ok(), Some("\"deal:complete\"".to_owned()));

        let parsed: Result<Permission, _> = serde_json::from_str("\"customer:read_phone\"");
        assert_eq!(parsed.ok(), Some(Permission::CustomerReadPhone));
    }
}
