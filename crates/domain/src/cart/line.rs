use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::money::Money;

/// One cart line: a by-value product snapshot plus a quantity.
///
/// The product is copied at add-time, so later catalog edits never reach
/// into the cart and, after submission, never into order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,

    /// Always at least 1; a line at quantity 1 can only leave the cart by
    /// explicit removal.
    pub quantity: u32,
}

impl CartLine {
    /// Creates a fresh quantity-1 line for a product.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// The product id this line is keyed by.
    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// Line subtotal: unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }
}
