use domain::DomainError;
use thiserror::Error;

/// Errors surfaced to the presentation layer.
///
/// All are recoverable and carry a displayable reason; the view layer
/// shows them to the acting user and moves on.
#[derive(Debug, Error)]
pub enum AppError {
    /// A domain operation failed.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A non-admin session attempted an admin-only action.
    ///
    /// The facade is authoritative here; view-layer gating is cosmetic.
    #[error("Admin access required")]
    PrivilegeDenied,

    /// No catalog product carries the given id.
    #[error("Unknown product: {product_id}")]
    UnknownProduct { product_id: String },

    /// The value does not name one of the fixed pickup slots.
    #[error("Unknown pickup slot: {value}")]
    UnknownSlot { value: String },
}
