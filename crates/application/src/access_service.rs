use std::sync::Arc;

use estara_core::{AppError, AppResult, SessionProfile};
use estara_domain::{Permission, Role};

use crate::access_guard::AccessGuard;
use crate::access_policy;

/// Port over the external session store.
///
/// The source hands back the raw role token for the active session, if any.
/// Tokens are re-read on every query so a stale or cleared session degrades
/// to "no access" rather than serving a cached decision.
pub trait RoleSource: Send + Sync {
    /// Returns the raw role token for the active session.
    fn current_role_token(&self) -> Option<String>;
}

impl RoleSource for SessionProfile {
    fn current_role_token(&self) -> Option<String> {
        self.primary_role_token().map(str::to_owned)
    }
}

/// Session-facing authorization service.
///
/// Resolves the current role once per query, then answers permission and
/// role predicates against the static role configuration table. All
/// decisions are advisory; enforcement happens server-side.
#[derive(Clone)]
pub struct AccessService {
    role_source: Arc<dyn RoleSource>,
}

impl AccessService {
    /// Creates an access service from a role source implementation.
    #[must_use]
    pub fn new(role_source: Arc<dyn RoleSource>) -> Self {
        Self { role_source }
    }

    /// Resolves and validates the current role token.
    ///
    /// Raw tokens are ASCII-uppercased before parsing; anything outside the
    /// role catalog resolves to `None`.
    #[must_use]
    pub fn current_role(&self) -> Option<Role> {
        let token = self.role_source.current_role_token()?;
        match Role::parse(&token.trim().to_ascii_uppercase()) {
            Ok(role) => Some(role),
            Err(_) => {
                tracing::debug!(token, "session role token is not in the role catalog");
                None
            }
        }
    }

    /// Returns whether the current role holds a single permission.
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        access_policy::has_permission(self.current_role(), permission)
    }

    /// Returns whether the current role holds at least one listed permission.
    #[must_use]
    pub fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        access_policy::has_any_permission(self.current_role(), permissions)
    }

    /// Returns whether the current role holds every listed permission.
    #[must_use]
    pub fn has_all_permissions(&self, permissions: &[Permission]) -> bool {
        access_policy::has_all_permissions(self.current_role(), permissions)
    }

    /// Returns whether the current role is exactly the expected role.
    #[must_use]
    pub fn has_role(&self, expected: Role) -> bool {
        access_policy::has_role(self.current_role(), expected)
    }

    /// Returns whether the current role is a member of the allowed list.
    #[must_use]
    pub fn has_any_role(&self, allowed: &[Role]) -> bool {
        access_policy::has_any_role(self.current_role(), allowed)
    }

    /// Evaluates a guard against the current role.
    #[must_use]
    pub fn allows(&self, guard: &AccessGuard) -> bool {
        guard.allows(self.current_role())
    }

    /// Ensures the current role holds the permission.
    ///
    /// Business rules use this where a denial should surface as an error
    /// instead of a fallback branch, e.g. a role that may edit a deal but
    /// not mark it complete.
    pub fn require_permission(&self, permission: Permission) -> AppResult<()> {
        match self.current_role() {
            None => Err(AppError::Unauthorized(
                "no role resolved for the current session".to_owned(),
            )),
            Some(role) if access_policy::has_permission(Some(role), permission) => Ok(()),
            Some(role) => {
                tracing::debug!(role = %role, permission = %permission, "permission denied");
                Err(AppError::Forbidden(format!(
                    "role '{role}' is missing permission '{}'",
                    permission.as_str()
                )))
            }
        }
    }

    /// Ensures the current role is exactly the expected role.
    pub fn require_role(&self, expected: Role) -> AppResult<()> {
        match self.current_role() {
            None => Err(AppError::Unauthorized(
                "no role resolved for the current session".to_owned(),
            )),
            Some(role) if role == expected => Ok(()),
            Some(role) => {
                tracing::debug!(role = %role, expected = %expected, "role denied");
                Err(AppError::Forbidden(format!(
                    "role '{role}' does not match required role '{expected}'"
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use estara_core::{AppError, SessionProfile, UserId};
    use estara_domain::{Permission, Role};

    use crate::access_guard::{AccessGuard, PermissionGuard, RoleGuard};

    use super::{AccessService, RoleSource};

    struct FakeRoleSource {
        token: Option<String>,
    }

    impl RoleSource for FakeRoleSource {
        fn current_role_token(&self) -> Option<String> {
            self.token.clone()
        }
    }

    fn service_with_token(token: Option<&str>) -> AccessService {
        AccessService::new(Arc::new(FakeRoleSource {
            token: token.map(str::to_owned),
        }))
    }

    #[test]
    fn resolves_known_role_tokens() {
        let service = service_with_token(Some("LEADER"));
        assert_eq!(service.current_role(), Some(Role::Leader));
    }

    #[test]
    fn uppercases_raw_tokens_before_parsing() {
        let service = service_with_token(Some("  sale "));
        assert_eq!(service.current_role(), Some(Role::Sale));
    }

    #[test]
    fn unknown_tokens_resolve_to_no_role() {
        let service = service_with_token(Some("GUEST"));
        assert_eq!(service.current_role(), None);
        assert!(!service.has_permission(Permission::ProjectRead));
        assert!(!service.has_role(Role::Admin));
    }

    #[test]
    fn missing_session_resolves_to_no_role() {
        let service = service_with_token(None);
        assert_eq!(service.current_role(), None);
        assert!(!service.has_any_permission(&[Permission::DashboardView]));
    }

    #[test]
    fn predicates_delegate_to_the_policy_table() {
        let service = service_with_token(Some("MARKET"));
        assert!(service.has_permission(Permission::BlogUpdate));
        assert!(service.has_any_permission(&[
            Permission::DealPaymentCreate,
            Permission::DealPaymentUpdate,
        ]));
        assert!(!service.has_all_permissions(&[
            Permission::DealPaymentCreate,
            Permission::DealPaymentUpdate,
        ]));
        assert!(service.has_any_role(&[Role::Market, Role::Sale]));
    }

    #[test]
    fn guard_evaluation_uses_the_session_role() {
        let service = service_with_token(Some("SALE"));
        let guard = AccessGuard::new()
            .with_permissions(PermissionGuard::any_of(vec![
                Permission::ProjectCreate,
                Permission::ProjectUpdate,
            ]))
            .with_roles(RoleGuard::single(Role::Sale));
        assert!(!service.allows(&guard));
    }

    #[test]
    fn require_permission_passes_for_granted_role() {
        let service = service_with_token(Some("SUPERMARKET"));
        assert!(service.require_permission(Permission::DealComplete).is_ok());
    }

    #[test]
    fn require_permission_forbids_missing_grant() {
        let service = service_with_token(Some("LEADER"));
        let result = service.require_permission(Permission::DealComplete);
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[test]
    fn require_permission_is_unauthorized_without_a_session() {
        let service = service_with_token(None);
        let result = service.require_permission(Permission::DealRead);
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn require_role_matches_exactly() {
        let service = service_with_token(Some("ADMIN"));
        assert!(service.require_role(Role::Admin).is_ok());
        assert!(matches!(
            service.require_role(Role::Manager),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn session_profile_feeds_its_first_role() {
        let profile = SessionProfile::new(
            UserId::new(),
            "auth0|abc",
            "Lena Leader",
            None,
            vec!["LEADER".to_owned(), "SALE".to_owned()],
        );
        let service = AccessService::new(Arc::new(profile));
        assert_eq!(service.current_role(), Some(Role::Leader));
        // Only the first role counts: SALE-specific membership must fail.
        assert!(!service.has_role(Role::Sale));
    }
}
