//! Domain error types.

use store::StoreError;
use thiserror::Error;

use crate::account::AccountError;
use crate::order::OrderError;

/// Errors that can occur during domain operations.
///
/// Every variant is recoverable and meant to be surfaced to the acting
/// user; nothing here is fatal to the process.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An error occurred in the collection store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// An error occurred in the order engine.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// An error occurred in the account directory.
    #[error("Account error: {0}")]
    Account(#[from] AccountError),
}
