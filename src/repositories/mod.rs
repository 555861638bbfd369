pub mod in_memory;

use async_trait::async_trait;

use crate::entities::Entity;
use crate::errors::StoreError;

/// One resource collection: ordered, mutable, addressed by id.
///
/// Implementations must keep ids unique and preserve insertion order in
/// `list`. Handlers only mutate through `insert`, `replace` and `remove`,
/// each of which is a single committed write.
#[async_trait]
pub trait ResourceStore<T: Entity>: Send + Sync {
    /// Full collection in insertion order.
    async fn list(&self) -> Vec<T>;

    /// Append a record; rejects an id already present in the collection.
    async fn insert(&self, record: T) -> Result<T, StoreError>;

    async fn get(&self, id: &str) -> Option<T>;

    /// Overwrite the stored record carrying the same id, wholesale.
    async fn replace(&self, record: T) -> Result<T, StoreError>;

    async fn remove(&self, id: &str) -> Result<(), StoreError>;
}
