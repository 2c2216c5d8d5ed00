use std::sync::Arc;

use common::{OrderId, ProductId};
use domain::{
    AccountDirectory, AdminCredentials, CartEngine, CartLine, CatalogStore, Money, Order,
    OrderEngine, PickupSlot, Product, ProductDraft, ProductPatch, Session,
};
use store::{CollectionStore, JsonFileStore};

use crate::{AppError, Config};

/// The ordering application: four engines, one transient session, one
/// selected pickup slot.
pub struct WaterBar<S: CollectionStore> {
    catalog: CatalogStore<S>,
    cart: CartEngine<S>,
    orders: OrderEngine<S>,
    accounts: AccountDirectory<S>,
    session: Option<Session>,
    selected_slot: PickupSlot,
}

impl WaterBar<JsonFileStore> {
    /// Opens the application over the file store named by `config`.
    pub async fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::open(JsonFileStore::new(&config.data_dir), config.admin.clone()).await
    }
}

impl<S: CollectionStore> WaterBar<S> {
    /// Opens the application over an existing store backend.
    ///
    /// Loads every collection up front (seeding the catalog on first run)
    /// and starts signed out with the first pickup slot selected.
    pub async fn open(store: S, admin: AdminCredentials) -> Result<Self, AppError> {
        let store = Arc::new(store);
        Ok(Self {
            catalog: CatalogStore::open(Arc::clone(&store)).await?,
            cart: CartEngine::open(Arc::clone(&store)).await?,
            orders: OrderEngine::open(Arc::clone(&store)).await?,
            accounts: AccountDirectory::open(store, admin).await?,
            session: None,
            selected_slot: PickupSlot::ALL[0],
        })
    }

    // Session

    /// Registers a new account and signs it in.
    pub async fn register(&mut self, email: &str, password: &str) -> Result<Session, AppError> {
        let session = self.accounts.register(email, password).await?;
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Signs in: the privileged account first, then the directory.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Session, AppError> {
        let session = self.accounts.authenticate(email, password)?;
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Discards the session and clears the cart.
    pub async fn logout(&mut self) -> Result<(), AppError> {
        self.session = None;
        self.cart.clear().await?;
        Ok(())
    }

    /// The signed-in identity, if any.
    pub fn current_session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    // Pickup slot

    /// Selects a pickup slot by its stored value.
    pub fn select_slot(&mut self, value: &str) -> Result<PickupSlot, AppError> {
        let slot = PickupSlot::from_value(value).ok_or_else(|| AppError::UnknownSlot {
            value: value.to_string(),
        })?;
        self.selected_slot = slot;
        Ok(slot)
    }

    /// The slot the next submission will use.
    pub fn selected_slot(&self) -> PickupSlot {
        self.selected_slot
    }

    // Catalog

    /// Current products, newest admin-added first.
    pub fn list_products(&self) -> &[Product] {
        self.catalog.list()
    }

    /// The hot-sale rail.
    pub fn hot_products(&self) -> Vec<&Product> {
        self.catalog.hot_products()
    }

    /// The new-products rail.
    pub fn new_products(&self) -> Vec<&Product> {
        self.catalog.new_products()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        self.catalog.categories()
    }

    /// Products in one category, catalog order.
    pub fn products_in_category(&self, category: &str) -> Vec<&Product> {
        self.catalog.products_in_category(category)
    }

    // Cart

    /// Adds one unit of a catalog product to the cart.
    pub async fn add_to_cart(&mut self, product_id: &ProductId) -> Result<(), AppError> {
        let product = self
            .catalog
            .get(product_id)
            .cloned()
            .ok_or_else(|| AppError::UnknownProduct {
                product_id: product_id.to_string(),
            })?;
        self.cart.add(product).await?;
        Ok(())
    }

    /// Drops a cart line.
    pub async fn remove_from_cart(&mut self, product_id: &ProductId) -> Result<(), AppError> {
        self.cart.remove(product_id).await?;
        Ok(())
    }

    /// Adjusts a line's quantity by a signed delta, clamping at 1.
    pub async fn change_quantity(
        &mut self,
        product_id: &ProductId,
        delta: i32,
    ) -> Result<(), AppError> {
        self.cart.change_quantity(product_id, delta).await?;
        Ok(())
    }

    /// Current cart lines.
    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Exact cart total.
    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    /// Total unit count (the cart badge).
    pub fn cart_quantity(&self) -> u32 {
        self.cart.total_quantity()
    }

    // Orders

    /// Submits the current cart for the selected slot and clears it.
    #[tracing::instrument(skip(self))]
    pub async fn submit_order(&mut self) -> Result<Order, AppError> {
        let order = self
            .orders
            .submit(self.session.as_ref(), self.cart.lines(), self.selected_slot)
            .await?;
        self.cart.clear().await?;
        Ok(order)
    }

    // Admin

    fn require_admin(&self) -> Result<(), AppError> {
        match &self.session {
            Some(session) if session.is_admin => Ok(()),
            _ => Err(AppError::PrivilegeDenied),
        }
    }

    /// Order history, most-recent-first. Admin only.
    pub fn admin_orders(&self) -> Result<&[Order], AppError> {
        self.require_admin()?;
        Ok(self.orders.list())
    }

    /// Adds a product to the catalog. Admin only.
    pub async fn admin_add_product(&mut self, draft: ProductDraft) -> Result<Product, AppError> {
        self.require_admin()?;
        Ok(self.catalog.add(draft).await?)
    }

    /// Patches an existing product. Admin only.
    pub async fn admin_update_product(
        &mut self,
        product_id: &ProductId,
        patch: ProductPatch,
    ) -> Result<(), AppError> {
        self.require_admin()?;
        self.catalog.update(product_id, patch).await?;
        Ok(())
    }

    /// Irreversibly wipes the order history. Admin only.
    pub async fn admin_clear_orders(&mut self) -> Result<(), AppError> {
        self.require_admin()?;
        self.orders.clear_all().await?;
        Ok(())
    }

    /// Marks an awaiting order as collected. Admin only.
    pub async fn admin_fulfill_order(&mut self, order_id: &OrderId) -> Result<Order, AppError> {
        self.require_admin()?;
        Ok(self.orders.fulfill(order_id).await?)
    }

    /// Calls off an awaiting order. Admin only.
    pub async fn admin_cancel_order(&mut self, order_id: &OrderId) -> Result<Order, AppError> {
        self.require_admin()?;
        Ok(self.orders.cancel(order_id).await?)
    }
}
