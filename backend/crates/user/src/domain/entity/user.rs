//! User Entity
//!
//! The stored user record and its password-free projection.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;
use serde::Serialize;

use crate::domain::value_object::{email::Email, user_role::UserRole};

/// User entity
///
/// Holds the password hash, so it is intentionally not `Serialize`.
/// Convert with [`User::to_safe`] before anything leaves the service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    /// Unique, normalized
    pub email: Email,
    pub password_hash: HashedPassword,
    /// Optional display name
    pub name: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        email: Email,
        password_hash: HashedPassword,
        name: Option<String>,
        role: UserRole,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email,
            password_hash,
            name: normalize_name(name),
            role,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_email(&mut self, email: Email) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = normalize_name(name);
        self.updated_at = Utc::now();
    }

    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
        self.updated_at = Utc::now();
    }

    pub fn to_safe(&self) -> SafeUser {
        SafeUser {
            id: self.id,
            email: self.email.as_str().to_string(),
            name: self.name.clone(),
            role: self.role,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Blank names are stored as absent
fn normalize_name(name: Option<String>) -> Option<String> {
    name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

/// Read-facing user projection (no password)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeUser {
    pub id: UserId,
    pub email: String,
    pub name: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for SafeUser {
    fn from(user: User) -> Self {
        user.to_safe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    fn user() -> User {
        let hash = ClearTextPassword::new("secret".into())
            .unwrap()
            .hash_blocking(4)
            .unwrap();
        User::new(
            Email::new("a@x.com").unwrap(),
            hash,
            Some("  Ada ".into()),
            UserRole::User,
        )
    }

    #[test]
    fn test_safe_user_has_no_password_field() {
        let json = serde_json::to_value(user().to_safe()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("password"));
        assert!(!obj.contains_key("passwordHash"));
        assert_eq!(obj["email"], "a@x.com");
        assert_eq!(obj["role"], "user");
        assert!(obj.contains_key("createdAt"));
    }

    #[test]
    fn test_name_is_trimmed_and_blank_dropped() {
        let mut u = user();
        assert_eq!(u.name.as_deref(), Some("Ada"));
        u.set_name(Some("   ".into()));
        assert_eq!(u.name, None);
    }

    #[test]
    fn test_setters_bump_updated_at() {
        let mut u = user();
        let before = u.updated_at;
        u.set_role(UserRole::Admin);
        assert!(u.updated_at >= before);
        assert!(u.role.is_admin());
    }
}
