use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Item, ItemChange, NewItem};

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Stores `item` under the next free id and returns the stored record.
    async fn create(&self, item: NewItem) -> Result<Item, RepositoryError>;
    /// Looks up an item regardless of its deleted flag.
    async fn get_by_id(&self, id: u64) -> Result<Item, RepositoryError>;
    /// Every stored item, in insertion order.
    async fn get_all(&self) -> Result<Vec<Item>, RepositoryError>;
    /// Applies `change` under the store's write lock. Fails with `NotFound`
    /// when the item is absent or refuses the change.
    async fn update(&self, id: u64, change: ItemChange) -> Result<Item, RepositoryError>;
}
