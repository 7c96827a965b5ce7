use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, NewItem};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use crate::domain::logger::Logger;

pub struct CreateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateItemUseCase for CreateItemUseCaseImpl {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!("Creating item: {}", params.name));

        let new = NewItem::new(params.name, params.price, params.deleted)?;
        let item = self.repository.create(new).await?;

        self.logger.info(&format!("Item created: {}", item.id));
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::item::model::ItemChange;
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
    async fn should_create_item_when_valid() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|new| Ok(Item::from_new(1, new)));

        let use_case = CreateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateItemParams {
                name: "pen".to_string(),
                price: 10.0,
                deleted: false,
            })
            .await;

        let item = result.unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.name, "pen");
        assert_eq!(item.price, 10.0);
        assert!(!item.deleted);
    }

    #[tokio::test]
    async fn should_keep_deleted_flag_from_request() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_create()
            .returning(|new| Ok(Item::from_new(4, new)));

        let use_case = CreateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let item = use_case
            .execute(CreateItemParams {
                name: "old pen".to_string(),
                price: 1.0,
                deleted: true,
            })
            .await
            .unwrap();

        assert!(item.deleted);
    }

    #[tokio::test]
    async fn should_reject_negative_price_without_touching_repository() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_create().never();

        let use_case = CreateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateItemParams {
                name: "pen".to_string(),
                price: -1.0,
                deleted: false,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::InvalidPrice));
    }
}
