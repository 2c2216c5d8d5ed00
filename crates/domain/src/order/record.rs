use chrono::{DateTime, Utc};
use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;
use crate::money::Money;

use super::{OrderStatus, PickupSlot};

/// A placed order: an immutable snapshot of the cart at submission time.
///
/// Items are copied by value, so later catalog or cart mutation cannot
/// retroactively alter history. Only the status field ever changes after
/// creation, and only through the engine's transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,

    /// Email of the session that placed the order.
    pub user_email: String,

    pub items: Vec<CartLine>,

    /// Sum of price times quantity over `items`, fixed at submission time.
    pub total: Money,

    pub slot: PickupSlot,

    pub created_at: DateTime<Utc>,

    pub status: OrderStatus,
}

impl Order {
    /// Total unit count across the snapshot lines.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|l| l.quantity).sum()
    }
}
