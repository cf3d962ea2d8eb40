//! Pure evaluation predicates over the role configuration table.
//!
//! Every function here is total and synchronous: no panics, no I/O, no
//! mutation. An unresolved role (`None`) carries zero permissions and
//! matches no role.

use estara_domain::{Permission, Role, role_config};

/// Returns whether the role holds a single permission.
#[must_use]
pub fn has_permission(role: Option<Role>, permission: Permission) -> bool {
    match role {
        Some(role) => role_config(role).grants(permission),
        None => false,
    }
}

/// Returns whether the role holds at least one of the listed permissions.
///
/// An empty list resolves to `false`: an empty requirement list never
/// grants access.
#[must_use]
pub fn has_any_permission(role: Option<Role>, permissions: &[Permission]) -> bool {
    permissions
        .iter()
        .any(|permission| has_permission(role, *permission))
}

/// Returns whether the role holds every listed permission.
///
/// An empty list resolves to `true`: a requirement list with zero entries
/// imposes no restriction.
#[must_use]
pub fn has_all_permissions(role: Option<Role>, permissions: &[Permission]) -> bool {
    permissions
        .iter()
        .all(|permission| has_permission(role, *permission))
}

/// Returns whether the role is exactly the expected role.
#[must_use]
pub fn has_role(role: Option<Role>, expected: Role) -> bool {
    role == Some(expected)
}

/// Returns whether the role is a member of the allowed list.
#[must_use]
pub fn has_any_role(role: Option<Role>, allowed: &[Role]) -> bool {
    match role {
        Some(role) => allowed.contains(&role),
        None => false,
    }
}
