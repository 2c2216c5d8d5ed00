use std::sync::Arc;

use common::ProductId;
use store::{Collection, CollectionStore, CollectionStoreExt};

use crate::catalog::Product;
use crate::error::DomainError;
use crate::money::Money;

use super::CartLine;

/// Owns the in-progress order's line items and their persistence.
///
/// The cart is session-scoped in behavior (cleared on logout and on
/// submission) but persisted between reloads for continuity. Between any
/// two operations the line list holds at most one line per product id.
pub struct CartEngine<S: CollectionStore> {
    lines: Vec<CartLine>,
    store: Arc<S>,
}

impl<S: CollectionStore> CartEngine<S> {
    /// Loads the persisted cart, if any.
    pub async fn open(store: Arc<S>) -> Result<Self, DomainError> {
        let lines = store.load_records(Collection::Cart).await?;
        Ok(Self { lines, store })
    }

    /// Adds one unit of a product.
    ///
    /// An existing line for the same product id is incremented in place,
    /// keeping its position; otherwise a quantity-1 line is appended at the
    /// end.
    #[tracing::instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add(&mut self, product: Product) -> Result<(), DomainError> {
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine::new(product)),
        }
        self.persist().await
    }

    /// Drops the line for a product id; does nothing when absent.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&mut self, product_id: &ProductId) -> Result<(), DomainError> {
        self.lines.retain(|l| &l.product.id != product_id);
        self.persist().await
    }

    /// Adjusts a line's quantity by a signed delta, clamping at 1.
    ///
    /// A delta that would drive the quantity below 1 leaves the line at 1;
    /// removal is only ever explicit via [`remove`](Self::remove). Unknown
    /// product ids are ignored.
    #[tracing::instrument(skip(self))]
    pub async fn change_quantity(
        &mut self,
        product_id: &ProductId,
        delta: i32,
    ) -> Result<(), DomainError> {
        if let Some(line) = self.lines.iter_mut().find(|l| &l.product.id == product_id) {
            let adjusted = i64::from(line.quantity) + i64::from(delta);
            line.quantity = adjusted.clamp(1, i64::from(u32::MAX)) as u32;
        }
        self.persist().await
    }

    /// Sum of price times quantity across all lines, exact.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Total unit count across lines (the cart badge).
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Current lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns true when the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Empties the cart; called after successful submission and on logout.
    #[tracing::instrument(skip(self))]
    pub async fn clear(&mut self) -> Result<(), DomainError> {
        self.lines.clear();
        self.persist().await
    }

    async fn persist(&self) -> Result<(), DomainError> {
        self.store
            .save_records(Collection::Cart, &self.lines)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    fn product(id: &str, yuan: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("产品{id}"),
            category: "饮品".to_string(),
            price: Money::from_yuan(yuan),
            image: String::new(),
            hot: false,
            is_new: false,
        }
    }

    async fn open_cart() -> (Arc<MemoryStore>, CartEngine<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let cart = CartEngine::open(Arc::clone(&store)).await.unwrap();
        (store, cart)
    }

    #[tokio::test]
    async fn adding_same_product_twice_merges_into_one_line() {
        let (_store, mut cart) = open_cart().await;

        cart.add(product("d1", 12)).await.unwrap();
        cart.add(product("d1", 12)).await.unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[tokio::test]
    async fn new_lines_append_without_disturbing_existing_order() {
        let (_store, mut cart) = open_cart().await;

        cart.add(product("b1", 8)).await.unwrap();
        cart.add(product("d1", 12)).await.unwrap();
        cart.add(product("b1", 8)).await.unwrap();

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id().as_str()).collect();
        assert_eq!(ids, vec!["b1", "d1"]);
    }

    #[tokio::test]
    async fn change_quantity_clamps_at_one() {
        let (_store, mut cart) = open_cart().await;
        cart.add(product("d1", 12)).await.unwrap();
        cart.change_quantity(&ProductId::new("d1"), 2).await.unwrap();
        assert_eq!(cart.lines()[0].quantity, 3);

        cart.change_quantity(&ProductId::new("d1"), -100).await.unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[tokio::test]
    async fn change_quantity_ignores_unknown_products() {
        let (_store, mut cart) = open_cart().await;
        cart.add(product("d1", 12)).await.unwrap();

        cart.change_quantity(&ProductId::new("missing"), 5).await.unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[tokio::test]
    async fn total_is_sum_of_price_times_quantity() {
        let (_store, mut cart) = open_cart().await;
        cart.add(product("b1", 8)).await.unwrap();
        cart.add(product("b1", 8)).await.unwrap();
        cart.add(product("d1", 12)).await.unwrap();

        assert_eq!(cart.total(), Money::from_yuan(28));
        assert_eq!(cart.total_quantity(), 3);
    }

    #[tokio::test]
    async fn remove_drops_the_line_and_tolerates_absence() {
        let (_store, mut cart) = open_cart().await;
        cart.add(product("b1", 8)).await.unwrap();

        cart.remove(&ProductId::new("b1")).await.unwrap();
        cart.remove(&ProductId::new("b1")).await.unwrap();

        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[tokio::test]
    async fn clear_empties_and_persists() {
        let (store, mut cart) = open_cart().await;
        cart.add(product("b1", 8)).await.unwrap();

        cart.clear().await.unwrap();

        assert!(cart.is_empty());
        assert_eq!(store.record_count(Collection::Cart).await, 0);
    }

    #[tokio::test]
    async fn persisted_cart_survives_reopen() {
        let (store, mut cart) = open_cart().await;
        cart.add(product("d1", 12)).await.unwrap();
        cart.add(product("d1", 12)).await.unwrap();
        drop(cart);

        let reopened = CartEngine::open(store).await.unwrap();
        assert_eq!(reopened.lines().len(), 1);
        assert_eq!(reopened.lines()[0].quantity, 2);
    }

    #[tokio::test]
    async fn product_ids_stay_unique_across_operations() {
        let (_store, mut cart) = open_cart().await;
        for _ in 0..3 {
            cart.add(product("b1", 8)).await.unwrap();
            cart.add(product("d1", 12)).await.unwrap();
        }
        cart.change_quantity(&ProductId::new("b1"), -1).await.unwrap();

        let mut ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id().as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cart.lines().len());
    }
}
