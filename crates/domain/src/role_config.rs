use serde::Serialize;

use crate::{Permission, Role};

/// Display metadata and granted permission set for one role.
///
/// The table below is the authorization source of truth. It is flat on
/// purpose: each role's full capability set is listed out even where it
/// overlaps another role's, so a reviewer can audit one block top to bottom
/// without resolving an inheritance chain. The cost is that ADMIN and
/// MANAGER are kept in sync by hand; tests assert the intended relationship.
#[derive(Debug, Serialize)]
pub struct RoleConfig {
    role: Role,
    display_name: &'static str,
    description: &'static str,
    color: &'static str,
    permissions: &'static [Permission],
}

impl RoleConfig {
    /// Returns the role this configuration belongs to.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the human-readable display name.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Returns the badge color tag. Cosmetic only, never consulted by
    /// authorization logic.
    #[must_use]
    pub fn color(&self) -> &'static str {
        self.color
    }

    /// Returns the full permission set granted to the role.
    #[must_use]
    pub fn permissions(&self) -> &'static [Permission] {
        self.permissions
    }

    /// Returns whether the role's configured set contains the permission.
    #[must_use]
    pub fn grants(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

const ADMIN_PERMISSIONS: &[Permission] = &[
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

// Deliberately a hand-maintained duplicate of ADMIN_PERMISSIONS; see the
// drift assertions in the tests below.
const MANAGER_PERMISSIONS: &[Permission] = &[
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

const LEADER_PERMISSIONS: &[Permission] = &[
    Permission::ProjectRead,
    Permission::ApartmentRead,
    Permission::CustomerCreate,
    Permission::CustomerRead,
    Permission::CustomerUpdate,
    Permission::CustomerReadPhone,
    Permission::DealCreate,
    Permission::DealRead,
    Permission::DealUpdate,
    Permission::DealPaymentRead,
    Permission::DashboardView,
    Permission::TeamRead,
    Permission::BonusRead,
];

const SUPERMARKET_PERMISSIONS: &[Permission] = &[
    Permission::ProjectRead,
    Permission::ApartmentRead,
    Permission::ApartmentUpdate,
    Permission::CustomerCreate,
    Permission::CustomerRead,
    Permission::CustomerUpdate,
    Permission::CustomerReadPhone,
    Permission::DealCreate,
    Permission::DealRead,
    Permission::DealUpdate,
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
    Permission::TeamRead,
    Permission::TeamManage,
    Permission::BonusRead,
];

const MARKET_PERMISSIONS: &[Permission] = &[
    Permission::ProjectRead,
    Permission::ApartmentRead,
    Permission::CustomerRead,
    Permission::DealRead,
    Permission::DealPaymentRead,
    Permission::DealPaymentUpdate,
    Permission::BlogCreate,
    Permission::BlogRead,
    Permission::BlogUpdate,
    Permission::BlogDelete,
    Permission::DashboardView,
];

const SALE_PERMISSIONS: &[Permission] = &[
    Permission::ProjectRead,
    Permission::ApartmentRead,
    Permission::CustomerCreate,
    Permission::CustomerRead,
    Permission::CustomerUpdate,
    Permission::DealCreate,
    Permission::DealRead,
    Permission::DealUpdate,
    Permission::DealPaymentRead,
    Permission::DashboardView,
    Permission::BonusRead,
];

static ROLE_CONFIGS: [RoleConfig; 6] = [
    RoleConfig {
        role: Role::Admin,
        display_name: "Administrator",
        description: "Full access to every module, including system settings and payroll.",
        color: "red",
        permissions: ADMIN_PERMISSIONS,
    },
    RoleConfig {
        role: Role::Manager,
        display_name: "Manager",
        description: "Operations manager with the same access as an administrator.",
        color: "purple",
        permissions: MANAGER_PERMISSIONS,
    },
    RoleConfig {
        role: Role::Leader,
        display_name: "Team Leader",
        description: "Leads a sales team; works customers and deals but cannot complete them.",
        color: "blue",
        permissions: LEADER_PERMISSIONS,
    },
    RoleConfig {
        role: Role::Supermarket,
        display_name: "Marketing Lead",
        description: "Senior marketing role able to complete deals and manage payments.",
        color: "orange",
        permissions: SUPERMARKET_PERMISSIONS,
    },
    RoleConfig {
        role: Role::Market,
        display_name: "Marketer",
        description: "Marketing staff; owns the blog and updates deal payments.",
        color: "teal",
        permissions: MARKET_PERMISSIONS,
    },
    RoleConfig {
        role: Role::Sale,
        display_name: "Sales Agent",
        description: "Front-line agent working projects, customers, and deals.",
        color: "green",
        permissions: SALE_PERMISSIONS,
    },
];

/// Returns the configuration for a role. Total over the role catalog.
#[must_use]
pub fn role_config(role: Role) -> &'static RoleConfig {
    match role {
        Role::Admin => &ROLE_CONFIGS[0],
        Role::Manager => &ROLE_CONFIGS[1],
        Role::Leader => &ROLE_CONFIGS[2],
        Role::Supermarket => &ROLE_CONFIGS[3],
        Role::Market => &ROLE_CONFIGS[4],
        Role::Sale => &ROLE_CONFIGS[5],
    }
}

/// Looks up a configuration from a raw role token.
///
/// `None` for any token outside the role catalog; never panics. An
/// unrecognized token is a normal "no access" case, not an error.
#[must_use]
pub fn find_role_config(token: &str) -> Option<&'static RoleConfig> {
    Role::parse(token).ok().map(role_config)
}

/// Returns the entire configuration table for introspection and dumps.
#[must_use]
pub fn all_role_configs() -> &'static [RoleConfig] {
    &ROLE_CONFIGS
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{Permission, Role};

    use super::{all_role_configs, find_role_config, role_config};

    #[test]
    fn table_entry_matches_lookup_key() {
        for role in Role::all() {
            assert_eq!(role_config(*role).role(), *role);
        }
    }

    #[test]
    fn table_covers_every_role_exactly_once() {
        let roles: HashSet<Role> = all_role_configs().iter().map(|c| c.role()).collect();
        assert_eq!(roles.len(), Role::all().len());
    }

    #[test]
    fn no_role_lists_a_permission_twice() {
        for config in all_role_configs() {
            let unique: HashSet<Permission> = config.permissions().iter().copied().collect();
            assert_eq!(
                unique.len(),
                config.permissions().len(),
                "duplicate permission in role '{}'",
                config.role()
            );
        }
    }

    // ADMIN and MANAGER are maintained as hand-duplicated lists; an edit to
    // one without the other is a silent authorization bug. Assert the
    // relationship itself rather than re-deriving the literal lists.
    #[test]
    fn manager_set_equals_admin_set() {
        let admin: HashSet<Permission> = role_config(Role::Admin)
            .permissions()
            .iter()
            .copied()
            .collect();
        let manager: HashSet<Permission> = role_config(Role::Manager)
            .permissions()
            .iter()
            .copied()
            .collect();
        assert_eq!(admin, manager);
    }

    #[test]
    fn admin_set_is_superset_of_every_role() {
        let admin = role_config(Role::Admin);
        for config in all_role_configs() {
            for permission in config.permissions() {
                assert!(
                    admin.grants(*permission),
                    "role '{}' grants '{}' which ADMIN lacks",
                    config.role(),
                    permission
                );
            }
        }
    }

    #[test]
    fn admin_holds_the_full_catalog() {
        for permission in Permission::all() {
            assert!(role_config(Role::Admin).grants(*permission));
        }
    }

    #[test]
    fn only_management_and_marketing_lead_complete_deals() {
        let holders: Vec<Role> = all_role_configs()
            .iter()
            .filter(|c| c.grants(Permission::DealComplete))
            .map(|c| c.role())
            .collect();
        assert_eq!(holders, vec![Role::Admin, Role::Manager, Role::Supermarket]);
    }

    #[test]
    fn unknown_token_has_no_config() {
        assert!(find_role_config("GUEST").is_none());
        assert!(find_role_config("").is_none());
        assert!(find_role_config("admin").is_none());
    }

    #[test]
    fn known_token_resolves_its_config() {
        let config = find_role_config("SALE");
        assert_eq!(config.map(|c| c.role()), Some(Role::Sale));
    }

    #[test]
    fn whole_table_serializes_for_dump_tooling() {
        let json = serde_json::to_value(all_role_configs());
        let value = json.unwrap_or_default();
        let entries = value.as_array().map(Vec::len);
        assert_eq!(entries, Some(Role::all().len()));
        assert_eq!(
            value
                .get(0)
                .and_then(|entry| entry.get("role"))
                .and_then(|role| role.as_str()),
            Some("ADMIN")
        );
    }
}
