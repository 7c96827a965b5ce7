use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, ItemChange, ItemPatch};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::patch::{PatchItemParams, PatchItemUseCase};
use crate::domain::logger::Logger;

pub struct PatchItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PatchItemUseCase for PatchItemUseCaseImpl {
    async fn execute(&self, params: PatchItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!("Patching item: {}", params.id));

        let patch = ItemPatch::new(params.name, params.price)?;
        let item = self
            .repository
            .update(params.id, ItemChange::Patch(patch))
            .await
            .map_err(|e| {
                self.logger
                    .warn(&format!("Item {} not modified: {}", params.id, e));
                ItemError::from_lookup(e)
            })?;

        self.logger.info(&format!("Item patched: {}", item.id));
        Ok(item)
    }
}
