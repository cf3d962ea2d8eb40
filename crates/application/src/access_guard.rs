//! Guard combinators consumed by conditional rendering.
//!
//! A guard evaluates its requirements against the current role and yields
//! one boolean: show the primary branch or the fallback. Guards hold no
//! state beyond their requirements and have no side effects; how the chosen
//! branch is rendered belongs to the caller.

use estara_domain::{Permission, Role};

use crate::access_policy::{
    has_all_permissions, has_any_permission, has_any_role, has_permission,
};

/// Permission requirement: one permission or a list with OR/AND semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionGuard {
    required: Vec<Permission>,
    require_all: bool,
}

impl PermissionGuard {
    /// Requires exactly one permission.
    #[must_use]
    pub fn single(permission: Permission) -> Self {
        Self {
            required: vec![permission],
            require_all: false,
        }
    }

    /// Requires at least one of the listed permissions (OR semantics).
    #[must_use]
    pub fn any_of(permissions: Vec<Permission>) -> Self {
        Self {
            required: permissions,
            require_all: false,
        }
    }

    /// Requires every listed permission (AND semantics).
    #[must_use]
    pub fn all_of(permissions: Vec<Permission>) -> Self {
        Self {
            required: permissions,
            require_all: true,
        }
    }

    /// Returns the required permissions.
    #[must_use]
    pub fn required(&self) -> &[Permission] {
        &self.required
    }

    /// Returns whether every listed permission is required.
    #[must_use]
    pub fn require_all(&self) -> bool {
        self.require_all
    }

    /// Evaluates the requirement against the current role.
    #[must_use]
    pub fn allows(&self, role: Option<Role>) -> bool {
        // A single requirement is a direct membership check; the OR/AND
        // flag only matters for lists.
        if let [permission] = self.required.as_slice() {
            return has_permission(role, *permission);
        }

        if self.require_all {
            has_all_permissions(role, &self.required)
        } else {
            has_any_permission(role, &self.required)
        }
    }
}

/// Role requirement: one role or a list, matched by membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGuard {
    allowed: Vec<Role>,
}

impl RoleGuard {
    /// Requires exactly one role.
    #[must_use]
    pub fn single(role: Role) -> Self {
        Self {
            allowed: vec![role],
        }
    }

    /// Requires membership in the listed roles.
    #[must_use]
    pub fn any_of(roles: Vec<Role>) -> Self {
        Self { allowed: roles }
    }

    /// Returns the allowed roles.
    #[must_use]
    pub fn allowed(&self) -> &[Role] {
        &self.allowed
    }

    /// Evaluates the requirement against the current role.
    #[must_use]
    pub fn allows(&self, role: Option<Role>) -> bool {
        has_any_role(role, &self.allowed)
    }
}

/// Combined permission and role requirement.
///
/// The permission requirement evaluates first; a denial there is final and
/// the role requirement is not consulted. A passing (or absent) permission
/// step is ANDed with the role requirement. A guard with neither requirement
/// passes vacuously; callers must not rely on an empty guard as a
/// deny-by-default mechanism.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessGuard {
    permissions: Option<PermissionGuard>,
    roles: Option<RoleGuard>,
}

impl AccessGuard {
    /// Creates a guard with no requirements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a permission requirement.
    #[must_use]
    pub fn with_permissions(mut self, guard: PermissionGuard) -> Self {
        self.permissions = Some(guard);
        self
    }

    /// Adds a role requirement.
    #[must_use]
    pub fn with_roles(mut self, guard: RoleGuard) -> Self {
        self.roles = Some(guard);
        self
    }

    /// Evaluates both requirements against the current role.
    #[must_use]
    pub fn allows(&self, role: Option<Role>) -> bool {
        if let Some(permissions) = &self.permissions
            && !permissions.allows(role)
        {
            return false;
        }

        match &self.roles {
            Some(roles) => roles.allows(role),
            None => true,
        }
    }
}
