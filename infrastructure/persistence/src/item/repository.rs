use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use business::domain::errors::RepositoryError;
use business::domain::item::model::{Item, ItemChange, NewItem};
use business::domain::item::repository::ItemRepository;

use crate::table::Table;

#[derive(Default)]
pub struct ItemRepositoryInMemory {
    table: RwLock<Table<Item>>,
}

impl ItemRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for ItemRepositoryInMemory {
    async fn create(&self, item: NewItem) -> Result<Item, RepositoryError> {
        let mut table = self.table.write().await;
        let stored = table.insert_with(|id| Item::from_new(id, item)).clone();

        debug!(item_id = stored.id, "item stored");
        Ok(stored)
    }

    async fn get_by_id(&self, id: u64) -> Result<Item, RepositoryError> {
        self.table
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_all(&self) -> Result<Vec<Item>, RepositoryError> {
        Ok(self.table.read().await.values().cloned().collect())
    }

    async fn update(&self, id: u64, change: ItemChange) -> Result<Item, RepositoryError> {
        let mut table = self.table.write().await;
        let item = table.get_mut(id).ok_or(RepositoryError::NotFound)?;

        if !item.apply(change) {
            debug!(item_id = id, "change refused on deleted item");
            return Err(RepositoryError::NotFound);
        }

        debug!(item_id = id, deleted = item.deleted, "item updated");
        Ok(item.clone())
    }
}
