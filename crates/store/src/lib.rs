//! Durable storage for the ordering core.
//!
//! State lives in four named collections (products, cart, orders, users),
//! each persisted as a single JSON list document. The [`CollectionStore`]
//! trait is the seam between the domain engines and the backend:
//! [`MemoryStore`] for tests and ephemeral runs, [`JsonFileStore`] for the
//! durable on-disk layout.

pub mod collection;
pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use collection::Collection;
pub use error::{Result, StoreError};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{CollectionStore, CollectionStoreExt};
