use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, ItemChange};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use crate::domain::logger::Logger;

pub struct DeleteItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, params: DeleteItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!("Deleting item: {}", params.id));

        let item = self
            .repository
            .update(params.id, ItemChange::SoftDelete)
            .await
            .map_err(ItemError::from_lookup)?;

        self.logger.info(&format!("Item deleted: {}", item.id));
        Ok(item)
    }
}
