use std::sync::Arc;

use common::ProductId;
use store::{Collection, CollectionStore, CollectionStoreExt};

use crate::error::DomainError;

use super::{Product, ProductDraft, ProductPatch, default_catalog, placeholder_image};

/// How many entries each home-page rail (hot sale, new products) shows.
const RAIL_LIMIT: usize = 4;

/// Owns the product list and its persistence.
///
/// Admin-added products are prepended, so `list` returns newest-added
/// first with the seeded menu behind them.
pub struct CatalogStore<S: CollectionStore> {
    products: Vec<Product>,
    store: Arc<S>,
}

impl<S: CollectionStore> CatalogStore<S> {
    /// Loads the catalog, installing and persisting the default menu on
    /// first-ever run.
    pub async fn open(store: Arc<S>) -> Result<Self, DomainError> {
        let mut products: Vec<Product> = store.load_records(Collection::Products).await?;
        if products.is_empty() {
            products = default_catalog();
            store.save_records(Collection::Products, &products).await?;
            tracing::info!(count = products.len(), "seeded default catalog");
        }
        Ok(Self { products, store })
    }

    /// Adds a product from an admin draft, prepending it to the list.
    ///
    /// Assigns a fresh id and defaults a missing image to a placeholder
    /// reference derived from the product name.
    #[tracing::instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn add(&mut self, draft: ProductDraft) -> Result<Product, DomainError> {
        let product = Product {
            id: ProductId::generate(),
            image: draft
                .image
                .unwrap_or_else(|| placeholder_image(&draft.name)),
            name: draft.name,
            category: draft.category,
            price: draft.price,
            hot: draft.hot,
            is_new: draft.is_new,
        };
        self.products.insert(0, product.clone());
        self.persist().await?;
        tracing::info!(product_id = %product.id, "product added");
        Ok(product)
    }

    /// Merges a patch onto the product with the given id.
    ///
    /// Silently does nothing when no product matches.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update(&mut self, id: &ProductId, patch: ProductPatch) -> Result<(), DomainError> {
        if let Some(product) = self.products.iter_mut().find(|p| &p.id == id) {
            patch.apply_to(product);
        }
        self.persist().await
    }

    /// Current products: newest admin-added first, seed order otherwise.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// The hot-sale rail: flagged products, capped for display.
    pub fn hot_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.hot)
            .take(RAIL_LIMIT)
            .collect()
    }

    /// The new-products rail: flagged products, capped for display.
    pub fn new_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_new)
            .take(RAIL_LIMIT)
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    /// Products in the given category, catalog order.
    pub fn products_in_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    async fn persist(&self) -> Result<(), DomainError> {
        self.store
            .save_records(Collection::Products, &self.products)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use store::MemoryStore;

    async fn open_catalog() -> (Arc<MemoryStore>, CatalogStore<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let catalog = CatalogStore::open(Arc::clone(&store)).await.unwrap();
        (store, catalog)
    }

    #[tokio::test]
    async fn first_open_seeds_and_persists() {
        let (store, catalog) = open_catalog().await;

        assert_eq!(catalog.list().len(), 5);
        assert_eq!(store.record_count(Collection::Products).await, 5);
    }

    #[tokio::test]
    async fn second_open_does_not_reseed() {
        let (store, mut catalog) = open_catalog().await;
        catalog
            .add(ProductDraft::new("柠檬水", "饮品", Money::from_yuan(6)))
            .await
            .unwrap();

        let reopened = CatalogStore::open(store).await.unwrap();
        assert_eq!(reopened.list().len(), 6);
    }

    #[tokio::test]
    async fn add_prepends_and_defaults_placeholder_image() {
        let (_store, mut catalog) = open_catalog().await;

        let added = catalog
            .add(ProductDraft::new("柠檬水", "饮品", Money::from_yuan(6)))
            .await
            .unwrap();

        assert_eq!(catalog.list()[0].id, added.id);
        assert!(added.image.starts_with("data:image/svg+xml"));
        assert!(!added.hot);
        assert!(!added.is_new);
    }

    #[tokio::test]
    async fn add_keeps_an_explicit_image() {
        let (_store, mut catalog) = open_catalog().await;

        let mut draft = ProductDraft::new("柠檬水", "饮品", Money::from_yuan(6));
        draft.image = Some("https://example.test/lemonade.png".to_string());

        let added = catalog.add(draft).await.unwrap();
        assert_eq!(added.image, "https://example.test/lemonade.png");
    }

    #[tokio::test]
    async fn update_merges_patch_on_match() {
        let (_store, mut catalog) = open_catalog().await;
        let id = ProductId::new("b2");

        catalog.update(&id, ProductPatch::set_hot(true)).await.unwrap();

        assert!(catalog.get(&id).unwrap().hot);
        assert_eq!(catalog.get(&id).unwrap().name, "肉松面包");
    }

    #[tokio::test]
    async fn update_with_unknown_id_is_a_silent_no_op() {
        let (_store, mut catalog) = open_catalog().await;
        let before: Vec<Product> = catalog.list().to_vec();

        catalog
            .update(&ProductId::new("missing"), ProductPatch::set_hot(true))
            .await
            .unwrap();

        assert_eq!(catalog.list(), &before[..]);
    }

    #[tokio::test]
    async fn rails_are_capped_and_filtered() {
        let (_store, mut catalog) = open_catalog().await;
        for i in 0..6 {
            let mut draft =
                ProductDraft::new(format!("热卖{i}"), "饮品", Money::from_yuan(5));
            draft.hot = true;
            catalog.add(draft).await.unwrap();
        }

        assert_eq!(catalog.hot_products().len(), 4);
        assert!(catalog.hot_products().iter().all(|p| p.hot));
        assert_eq!(catalog.new_products().len(), 1);
    }

    #[tokio::test]
    async fn categories_are_distinct_in_first_seen_order() {
        let (_store, catalog) = open_catalog().await;
        assert_eq!(catalog.categories(), vec!["面包", "饮品"]);
    }

    #[tokio::test]
    async fn products_in_category_filters() {
        let (_store, catalog) = open_catalog().await;
        let drinks = catalog.products_in_category("饮品");
        assert_eq!(drinks.len(), 2);
        assert!(drinks.iter().all(|p| p.category == "饮品"));
    }
}
