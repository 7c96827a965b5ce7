use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;

use crate::table::Table;

#[derive(Default)]
pub struct CartRepositoryInMemory {
    table: RwLock<Table<Cart>>,
}

impl CartRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for CartRepositoryInMemory {
    async fn create(&self) -> Result<Cart, RepositoryError> {
        let mut table = self.table.write().await;
        let cart = table.insert_with(Cart::new).clone();

        debug!(cart_id = cart.id, "cart stored");
        Ok(cart)
    }

    async fn get_by_id(&self, id: u64) -> Result<Cart, RepositoryError> {
        self.table
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_all(&self) -> Result<Vec<Cart>, RepositoryError> {
        Ok(self.table.read().await.values().cloned().collect())
    }

    async fn add_item(&self, cart_id: u64, item: &Item) -> Result<Cart, RepositoryError> {
        let mut table = self.table.write().await;
        let cart = table.get_mut(cart_id).ok_or(RepositoryError::NotFound)?;

        cart.add(item);

        debug!(cart_id, item_id = item.id, price = cart.price, "item added to cart");
        Ok(cart.clone())
    }
}
