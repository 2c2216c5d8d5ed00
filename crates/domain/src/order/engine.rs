use std::sync::Arc;

use chrono::Utc;
use common::OrderId;
use store::{Collection, CollectionStore, CollectionStoreExt};

use crate::account::Session;
use crate::cart::CartLine;
use crate::error::DomainError;
use crate::money::Money;

use super::{Order, OrderError, OrderStatus, PickupSlot};

/// Owns the order history and its persistence, most-recent-first.
pub struct OrderEngine<S: CollectionStore> {
    orders: Vec<Order>,
    store: Arc<S>,
}

impl<S: CollectionStore> OrderEngine<S> {
    /// Loads the persisted order history, if any.
    pub async fn open(store: Arc<S>) -> Result<Self, DomainError> {
        let orders = store.load_records(Collection::Orders).await?;
        Ok(Self { orders, store })
    }

    /// Validates and places an order from the given cart lines.
    ///
    /// The lines are deep-copied into the order and the total is computed
    /// from that snapshot. On success the caller is expected to clear the
    /// cart; the engine does not own it.
    #[tracing::instrument(skip(self, session, lines), fields(lines = lines.len()))]
    pub async fn submit(
        &mut self,
        session: Option<&Session>,
        lines: &[CartLine],
        slot: PickupSlot,
    ) -> Result<Order, DomainError> {
        let Some(session) = session else {
            return Err(OrderError::NotAuthenticated.into());
        };
        if lines.is_empty() {
            return Err(OrderError::EmptyCart.into());
        }

        let items = lines.to_vec();
        let total: Money = items.iter().map(CartLine::subtotal).sum();
        let order = Order {
            id: OrderId::generate(),
            user_email: session.email.clone(),
            items,
            total,
            slot,
            created_at: Utc::now(),
            status: OrderStatus::AwaitingPickup,
        };

        self.orders.insert(0, order.clone());
        self.persist().await?;
        tracing::info!(order_id = %order.id, total = %order.total, slot = %slot, "order placed");
        Ok(order)
    }

    /// Order history, most-recent-first.
    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    /// Looks up an order by id.
    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// Irreversibly wipes the order history.
    ///
    /// The calling layer is responsible for treating this as a deliberate,
    /// privileged action.
    #[tracing::instrument(skip(self))]
    pub async fn clear_all(&mut self) -> Result<(), DomainError> {
        let dropped = self.orders.len();
        self.orders.clear();
        self.persist().await?;
        tracing::info!(dropped, "order history cleared");
        Ok(())
    }

    /// Marks an awaiting order as collected.
    pub async fn fulfill(&mut self, id: &OrderId) -> Result<Order, DomainError> {
        self.transition(id, OrderStatus::Fulfilled).await
    }

    /// Calls off an awaiting order.
    pub async fn cancel(&mut self, id: &OrderId) -> Result<Order, DomainError> {
        self.transition(id, OrderStatus::Cancelled).await
    }

    #[tracing::instrument(skip(self))]
    async fn transition(
        &mut self,
        id: &OrderId,
        requested: OrderStatus,
    ) -> Result<Order, DomainError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| OrderError::UnknownOrder {
                order_id: id.to_string(),
            })?;

        let allowed = match requested {
            OrderStatus::Fulfilled => order.status.can_fulfill(),
            OrderStatus::Cancelled => order.status.can_cancel(),
            OrderStatus::AwaitingPickup => false,
        };
        if !allowed {
            return Err(OrderError::InvalidStatusTransition {
                current: order.status,
                requested,
            }
            .into());
        }

        order.status = requested;
        let updated = order.clone();
        self.persist().await?;
        tracing::info!(order_id = %updated.id, status = %updated.status, "order status changed");
        Ok(updated)
    }

    async fn persist(&self) -> Result<(), DomainError> {
        self.store
            .save_records(Collection::Orders, &self.orders)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use common::{ProductId, UserId};
    use store::MemoryStore;

    fn session(email: &str) -> Session {
        Session {
            user_id: UserId::generate(),
            email: email.to_string(),
            is_admin: false,
        }
    }

    fn line(id: &str, yuan: i64, quantity: u32) -> CartLine {
        CartLine {
            product: Product {
                id: ProductId::new(id),
                name: format!("产品{id}"),
                category: "饮品".to_string(),
                price: Money::from_yuan(yuan),
                image: String::new(),
                hot: false,
                is_new: false,
            },
            quantity,
        }
    }

    async fn open_engine() -> (Arc<MemoryStore>, OrderEngine<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let engine = OrderEngine::open(Arc::clone(&store)).await.unwrap();
        (store, engine)
    }

    #[tokio::test]
    async fn submit_without_session_is_rejected() {
        let (store, mut engine) = open_engine().await;

        let result = engine
            .submit(None, &[line("d1", 12, 1)], PickupSlot::Lunch)
            .await;

        assert!(matches!(
            result,
            Err(DomainError::Order(OrderError::NotAuthenticated))
        ));
        assert!(engine.list().is_empty());
        assert_eq!(store.record_count(Collection::Orders).await, 0);
    }

    #[tokio::test]
    async fn submit_with_empty_cart_is_rejected() {
        let (store, mut engine) = open_engine().await;

        let result = engine
            .submit(Some(&session("a@x.com")), &[], PickupSlot::Lunch)
            .await;

        assert!(matches!(
            result,
            Err(DomainError::Order(OrderError::EmptyCart))
        ));
        assert!(engine.list().is_empty());
        assert_eq!(store.record_count(Collection::Orders).await, 0);
    }

    #[tokio::test]
    async fn submit_snapshots_cart_and_prepends() {
        let (_store, mut engine) = open_engine().await;
        let user = session("a@x.com");

        let first = engine
            .submit(Some(&user), &[line("b1", 8, 2)], PickupSlot::MorningBreak)
            .await
            .unwrap();

        let second = engine
            .submit(
                Some(&user),
                &[line("b1", 8, 2), line("d1", 12, 1)],
                PickupSlot::Lunch,
            )
            .await
            .unwrap();

        assert_eq!(engine.list().len(), 2);
        assert_eq!(engine.list()[0].id, second.id);
        assert_eq!(engine.list()[1].id, first.id);
        assert_eq!(second.total, Money::from_yuan(28));
        assert_eq!(second.status, OrderStatus::AwaitingPickup);
        assert_eq!(second.user_email, "a@x.com");
    }

    #[tokio::test]
    async fn clear_all_wipes_history() {
        let (store, mut engine) = open_engine().await;
        engine
            .submit(Some(&session("a@x.com")), &[line("d1", 12, 1)], PickupSlot::Lunch)
            .await
            .unwrap();

        engine.clear_all().await.unwrap();

        assert!(engine.list().is_empty());
        assert_eq!(store.record_count(Collection::Orders).await, 0);
    }

    #[tokio::test]
    async fn fulfill_and_cancel_are_single_shot() {
        let (_store, mut engine) = open_engine().await;
        let order = engine
            .submit(Some(&session("a@x.com")), &[line("d1", 12, 1)], PickupSlot::Lunch)
            .await
            .unwrap();

        let fulfilled = engine.fulfill(&order.id).await.unwrap();
        assert_eq!(fulfilled.status, OrderStatus::Fulfilled);

        let again = engine.fulfill(&order.id).await;
        assert!(matches!(
            again,
            Err(DomainError::Order(OrderError::InvalidStatusTransition { .. }))
        ));

        let cancel = engine.cancel(&order.id).await;
        assert!(matches!(
            cancel,
            Err(DomainError::Order(OrderError::InvalidStatusTransition { .. }))
        ));
    }

    #[tokio::test]
    async fn transitions_on_unknown_orders_are_rejected() {
        let (_store, mut engine) = open_engine().await;

        let result = engine.fulfill(&OrderId::new("order_missing")).await;

        assert!(matches!(
            result,
            Err(DomainError::Order(OrderError::UnknownOrder { .. }))
        ));
    }
}
