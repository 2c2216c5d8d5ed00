//! Order status machine.

use serde::{Deserialize, Serialize};

/// The lifecycle of a placed order.
///
/// Status transitions:
/// ```text
/// AwaitingPickup ──┬──► Fulfilled
///                  └──► Cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Placed and waiting to be collected and paid at the counter.
    #[default]
    AwaitingPickup,

    /// Collected (terminal state).
    Fulfilled,

    /// Called off before pickup (terminal state).
    Cancelled,
}

impl OrderStatus {
    /// Returns true if the order can be marked collected in this status.
    pub fn can_fulfill(&self) -> bool {
        matches!(self, OrderStatus::AwaitingPickup)
    }

    /// Returns true if the order can be cancelled in this status.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::AwaitingPickup)
    }

    /// Returns true if this is a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Fulfilled | OrderStatus::Cancelled)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::AwaitingPickup => "awaiting pickup",
            OrderStatus::Fulfilled => "fulfilled",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
