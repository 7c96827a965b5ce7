use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

pub struct ReplaceItemParams {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub deleted: bool,
}

#[async_trait]
pub trait ReplaceItemUseCase: Send + Sync {
    async fn execute(&self, params: ReplaceItemParams) -> Result<Item, ItemError>;
}
