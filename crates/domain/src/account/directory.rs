use std::sync::Arc;

use common::UserId;
use store::{Collection, CollectionStore, CollectionStoreExt};

use crate::error::DomainError;

use super::{AccountError, AdminCredentials, Session, User};

/// Owns the registered-user directory and its persistence.
///
/// The privileged account is injected configuration, not a directory
/// member; it is consulted before the directory on both registration
/// (uniqueness) and authentication.
pub struct AccountDirectory<S: CollectionStore> {
    users: Vec<User>,
    admin: AdminCredentials,
    store: Arc<S>,
}

impl<S: CollectionStore> AccountDirectory<S> {
    /// Loads the persisted directory, if any.
    pub async fn open(store: Arc<S>, admin: AdminCredentials) -> Result<Self, DomainError> {
        let users = store.load_records(Collection::Users).await?;
        Ok(Self {
            users,
            admin,
            store,
        })
    }

    /// Registers a new user and returns the now-authenticated session.
    ///
    /// Fails with [`AccountError::DuplicateEmail`] when the email matches a
    /// directory entry or the privileged account.
    #[tracing::instrument(skip(self, password))]
    pub async fn register(&mut self, email: &str, password: &str) -> Result<Session, DomainError> {
        if email == self.admin.email || self.users.iter().any(|u| u.email == email) {
            return Err(AccountError::DuplicateEmail {
                email: email.to_string(),
            }
            .into());
        }

        let user = User {
            id: UserId::generate(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.users.push(user.clone());
        self.persist().await?;
        tracing::info!(user_id = %user.id, "user registered");
        Ok(Session::for_user(&user))
    }

    /// Authenticates an email/password pair.
    ///
    /// The privileged pair is checked first and yields an admin-flagged
    /// session; otherwise the directory is searched for an exact match.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Session, DomainError> {
        if self.admin.matches(email, password) {
            return Ok(Session {
                user_id: UserId::new("admin"),
                email: email.to_string(),
                is_admin: true,
            });
        }

        self.users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .map(Session::for_user)
            .ok_or_else(|| AccountError::InvalidCredentials.into())
    }

    /// Directory entries; the privileged account never appears here.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    async fn persist(&self) -> Result<(), DomainError> {
        self.store.save_records(Collection::Users, &self.users).await?;
        Ok(())
    }
}
