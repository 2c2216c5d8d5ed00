use common::UserId;

use super::User;

/// Transient identity held for the duration of a sitting; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub email: String,
    pub is_admin: bool,
}

impl Session {
    /// A non-admin session for a directory user.
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            email: user.email.clone(),
            is_admin: false,
        }
    }
}

/// The single privileged identity.
///
/// Configured out-of-band, checked before any directory lookup, and never
/// inserted as a directory record, so it cannot collide with registration
/// uniqueness or leak through directory listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Exact match on both fields.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self::new("admin@shuiba.local", "adminpass")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pair_matches_exactly() {
        let admin = AdminCredentials::default();
        assert!(admin.matches("admin@shuiba.local", "adminpass"));
        assert!(!admin.matches("admin@shuiba.local", "wrong"));
        assert!(!admin.matches("ADMIN@shuiba.local", "adminpass"));
    }

    #[test]
    fn user_sessions_are_never_admin() {
        let user = User {
            id: UserId::generate(),
            email: "a@x.com".to_string(),
            password: "p".to_string(),
        };
        let session = Session::for_user(&user);
        assert!(!session.is_admin);
        assert_eq!(session.email, "a@x.com");
    }
}
