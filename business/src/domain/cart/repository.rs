use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::model::Item;

use super::model::Cart;

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Stores an empty cart under the next free id.
    async fn create(&self) -> Result<Cart, RepositoryError>;
    async fn get_by_id(&self, id: u64) -> Result<Cart, RepositoryError>;
    /// Every stored cart, in insertion order.
    async fn get_all(&self) -> Result<Vec<Cart>, RepositoryError>;
    /// Adds one unit of `item` to the cart under the store's write lock.
    async fn add_item(&self, cart_id: u64, item: &Item) -> Result<Cart, RepositoryError>;
}
