//! Signed-in user identity.

use serde::{Deserialize, Serialize};

use super::UserRole;

/// The person using the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    name: String,
    email: String,
    role: UserRole,
}

impl User {
    /// Mock sign-in: emails containing "admin" get the Admin role, everyone
    /// else is a Participant. No credential is checked.
    pub fn sign_in(email: impl Into<String>, name: impl Into<String>) -> Self {
        let email = email.into();
        let role = if email.to_lowercase().contains("admin") {
            UserRole::Admin
        } else {
            UserRole::Participant
        };
        Self {
            name: name.into(),
            email,
            role,
        }
    }

    /// Sign-up with an explicitly chosen role.
    pub fn sign_up(name: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> UserRole {
        self.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_grants_admin_for_admin_emails() {
        let user = User::sign_in("Conf.ADMIN@example.org", "Ada");
        assert_eq!(user.role(), UserRole::Admin);
        assert_eq!(user.name(), "Ada");
        assert_eq!(user.email(), "Conf.ADMIN@example.org");
    }

    #[test]
    fn sign_in_defaults_to_participant() {
        let user = User::sign_in("jdoe@example.org", "J. Doe");
        assert_eq!(user.role(), UserRole::Participant);
    }

    #[test]
    fn sign_up_keeps_chosen_role() {
        let user = User::sign_up("Guest", "visitor@example.org", UserRole::Guest);
        assert_eq!(user.role(), UserRole::Guest);
    }

    #[test]
    fn user_round_trips_through_json() {
        let user = User::sign_up("Ada", "ada@example.org", UserRole::Admin);
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"ADMIN\""));
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
