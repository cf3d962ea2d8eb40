use serde::{Deserialize, Serialize};

use crate::UserId;

/// Profile information delivered by the external session layer.
///
/// The authorization core never assumes the role tokens are valid members of
/// the role catalog; they are raw backend strings validated at query time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProfile {
    user_id: UserId,
    subject: String,
    display_name: String,
    email: Option<String>,
    roles: Vec<String>,
}

impl SessionProfile {
    /// Creates a session profile from authentication and profile data.
    #[must_use]
    pub fn new(
        user_id: UserId,
        subject: impl Into<String>,
        display_name: impl Into<String>,
        email: Option<String>,
        roles: Vec<String>,
    ) -> Self {
        Self {
            user_id,
            subject: subject.into(),
            display_name: display_name.into(),
            email,
            roles,
        }
    }

    /// Returns the user identifier for the profile.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the stable subject claim from the identity provider.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    /// Returns the display name for the current user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Returns the email, if the provider returned one.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the raw role tokens assigned to the profile.
    #[must_use]
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Returns the raw token of the session's primary role.
    ///
    /// A profile may carry several role tokens; authorization reads only the
    /// first one. `None` when the session has not resolved or the backend
    /// returned an empty role list.
    #[must_use]
    pub fn primary_role_token(&self) -> Option<&str> {
        self.roles.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use crate::UserId;

    use super::SessionProfile;

    fn profile_with_roles(roles: Vec<String>) -> SessionProfile {
        SessionProfile::new(UserId::new(), "auth0|abc", "Ada Admin", None, roles)
    }

    #[test]
    fn primary_role_is_first_entry() {
        let profile = profile_with_roles(vec!["MANAGER".to_owned(), "SALE".to_owned()]);
        assert_eq!(profile.primary_role_token(), Some("MANAGER"));
    }

    #[test]
    fn empty_role_list_has_no_primary_role() {
        let profile = profile_with_roles(Vec::new());
        assert_eq!(profile.primary_role_token(), None);
    }
}
