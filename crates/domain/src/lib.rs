//! Domain layer for the water-bar ordering core.
//!
//! One module per state owner, each pairing its record types with an engine
//! that holds the current list and the injected persistence handle:
//! - [`catalog`]: products, seeded with the default menu on first run
//! - [`cart`]: the in-progress order's line items
//! - [`order`]: submitted order history, pickup slots, and the status
//!   machine
//! - [`account`]: the registered-user directory and the privileged account

pub mod account;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod order;

pub use account::{AccountDirectory, AccountError, AdminCredentials, Session, User};
pub use cart::{CartEngine, CartLine};
pub use catalog::{CatalogStore, Product, ProductDraft, ProductPatch};
pub use error::DomainError;
pub use money::Money;
pub use order::{Order, OrderEngine, OrderError, OrderStatus, PickupSlot};
