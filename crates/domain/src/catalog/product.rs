use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// The two categories the admin form offers.
///
/// The category field itself is an open string set; these are only the
/// defaults the seeded menu uses.
pub const DEFAULT_CATEGORIES: [&str; 2] = ["面包", "饮品"];

/// A purchasable catalog entry.
///
/// Created by seed or admin add, mutated only by admin update, never
/// deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Money,

    /// Image reference, a data URI for seeded and placeholder entries.
    pub image: String,

    /// Featured on the hot-sale rail.
    #[serde(default)]
    pub hot: bool,

    /// Featured on the new-products rail.
    #[serde(default)]
    pub is_new: bool,
}

/// Admin payload for adding a product.
///
/// A missing image defaults to a generated placeholder reference; the rail
/// flags default to off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: Money,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub hot: bool,
    #[serde(default)]
    pub is_new: bool,
}

impl ProductDraft {
    /// Creates a draft with no image and both rail flags off.
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            image: None,
            hot: false,
            is_new: false,
        }
    }
}

/// Admin payload for updating a product; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Money>,
    pub image: Option<String>,
    pub hot: Option<bool>,
    pub is_new: Option<bool>,
}

impl ProductPatch {
    /// A patch that only toggles the hot-sale flag (the admin panel's
    /// one-click action).
    pub fn set_hot(hot: bool) -> Self {
        Self {
            hot: Some(hot),
            ..Self::default()
        }
    }

    /// Merges the patch onto a product in place.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(image) = &self.image {
            product.image = image.clone();
        }
        if let Some(hot) = self.hot {
            product.hot = hot;
        }
        if let Some(is_new) = self.is_new {
            product.is_new = is_new;
        }
    }
}

/// Builds the SVG data-URI reference used when a product has no image.
pub fn placeholder_image(text: &str) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='400' height='300'>\
         <rect width='100%' height='100%' fill='#f3f4f6'/>\
         <text x='50%' y='50%' dominant-baseline='middle' text-anchor='middle' \
         fill='#9ca3af' font-size='24'>{text}</text></svg>"
    );
    format!("data:image/svg+xml;utf8,{svg}")
}

/// The menu installed on first run: five entries across the two default
/// categories.
pub(crate) fn default_catalog() -> Vec<Product> {
    let entries = [
        ("b1", "奶油面包", DEFAULT_CATEGORIES[0], 8, true, false),
        ("b2", "肉松面包", DEFAULT_CATEGORIES[0], 9, false, false),
        ("d1", "珍珠奶茶", DEFAULT_CATEGORIES[1], 12, true, false),
        ("d2", "美式咖啡", DEFAULT_CATEGORIES[1], 10, false, false),
        ("n1", "新品抹茶蛋糕", DEFAULT_CATEGORIES[0], 15, false, true),
    ];

    entries
        .into_iter()
        .map(|(id, name, category, yuan, hot, is_new)| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            price: Money::from_yuan(yuan),
            image: placeholder_image(name),
            hot,
            is_new,
        })
        .collect()
}
