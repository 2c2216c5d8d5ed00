//! Registered users, transient sessions, and the privileged account.

mod directory;
mod session;
mod user;

pub use directory::AccountDirectory;
pub use session::{AdminCredentials, Session};
pub use user::User;

use thiserror::Error;

/// Errors that can occur during account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Registration with an already-used email.
    #[error("Email already registered: {email}")]
    DuplicateEmail { email: String },

    /// No identity matches the email/password pair.
    #[error("Email or password incorrect")]
    InvalidCredentials,
}
