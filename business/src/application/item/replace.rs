use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, ItemChange, NewItem};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::replace::{ReplaceItemParams, ReplaceItemUseCase};
use crate::domain::logger::Logger;

pub struct ReplaceItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ReplaceItemUseCase for ReplaceItemUseCaseImpl {
    async fn execute(&self, params: ReplaceItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!("Replacing item: {}", params.id));

        let new = NewItem::new(params.name, params.price, params.deleted)?;
        let item = self
            .repository
            .update(params.id, ItemChange::Replace(new))
            .await
            .map_err(ItemError::from_lookup)?;

        self.logger.info(&format!("Item replaced: {}", item.id));
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;

    mock! {
        pub ItemRepo {}

        #[async_trait]
        impl ItemRepository for ItemRepo {
            async fn create(&self, item: NewItem) -> Result<Item, RepositoryError>;
            async fn get_by_id(&self, id: u64) -> Result<Item, RepositoryError>;
            async fn get_all(&self) -> Result<Vec<Item>, RepositoryError>;
            async fn update(&self, id: u64, change: ItemChange) -> Result<Item, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_overwrite_every_field() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_update()
            .withf(|id, change| {
                *id == 1
                    && matches!(change, ItemChange::Replace(new) if new.name == "pencil" && new.deleted)
            })
            .returning(|id, change| {
                let mut item = Item { id, name: "pen".to_string(), price: 10.0, deleted: false };
                item.apply(change);
                Ok(item)
            });

        let use_case = ReplaceItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ReplaceItemParams {
                id: 1,
                name: "pencil".to_string(),
                price: 2.0,
                deleted: true,
            })
            .await;

        let item = result.unwrap();
        assert_eq!(item.name, "pencil");
        assert_eq!(item.price, 2.0);
        assert!(item.deleted);
    }

    #[tokio::test]
    async fn should_return_not_found_when_absent_or_deleted() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_update()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = ReplaceItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ReplaceItemParams {
                id: 42,
                name: "pen".to_string(),
                price: 1.0,
                deleted: false,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_invalid_price() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_update().never();

        let use_case = ReplaceItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ReplaceItemParams {
                id: 1,
                name: "pen".to_string(),
                price: f64::NAN,
                deleted: false,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::InvalidPrice));
    }
}
