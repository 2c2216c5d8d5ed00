//! Submitted orders: pickup slots, the status machine, and the order
//! engine.

mod engine;
mod record;
mod slot;
mod status;

pub use engine::OrderEngine;
pub use record::Order;
pub use slot::PickupSlot;
pub use status::OrderStatus;

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Submission attempted without an authenticated session.
    #[error("Not signed in")]
    NotAuthenticated,

    /// Submission attempted with no cart lines.
    #[error("Cart is empty")]
    EmptyCart,

    /// No order with the given id exists.
    #[error("Unknown order: {order_id}")]
    UnknownOrder { order_id: String },

    /// The requested status change is not allowed from the current status.
    #[error("Invalid status transition: cannot move from {current} to {requested}")]
    InvalidStatusTransition {
        current: OrderStatus,
        requested: OrderStatus,
    },
}
