use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Collection, Result, StoreError};

/// Core trait for collection store implementations.
///
/// A collection store durably persists each named collection as one list of
/// JSON records. All implementations must be thread-safe (Send + Sync).
///
/// Contract:
/// - `load` returns the stored records, or the empty list when the
///   collection has never been saved. Malformed stored data is a fatal read
///   error ([`StoreError::Serialization`]), never silently coerced to
///   empty.
/// - `save` replaces the collection's entire document; the write is durable
///   and visible to subsequent loads in the same environment, including
///   across restarts.
/// - There is no transactional guarantee across collections; callers save
///   each collection independently, immediately after mutating it.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Loads all records of a collection, or the empty list when the
    /// collection is absent.
    async fn load(&self, collection: Collection) -> Result<Vec<Value>>;

    /// Replaces a collection with the given records.
    async fn save(&self, collection: Collection, records: Vec<Value>) -> Result<()>;
}

/// Extension trait providing typed access over a [`CollectionStore`].
#[async_trait]
pub trait CollectionStoreExt: CollectionStore {
    /// Loads a collection and deserializes each record into `T`.
    async fn load_records<T>(&self, collection: Collection) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.load(collection)
            .await?
            .into_iter()
            .map(|value| serde_json::from_value(value).map_err(StoreError::from))
            .collect()
    }

    /// Serializes the given records and replaces the collection with them.
    async fn save_records<T>(&self, collection: Collection, records: &[T]) -> Result<()>
    where
        T: Serialize + Sync,
    {
        let raw = records
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        self.save(collection, raw).await
    }
}

// Blanket implementation for all CollectionStore implementations
impl<S: CollectionStore + ?Sized> CollectionStoreExt for S {}
