use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::query::ItemQuery;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_all::{GetAllItemsParams, GetAllItemsUseCase};
use crate::domain::logger::Logger;

pub struct GetAllItemsUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllItemsUseCase for GetAllItemsUseCaseImpl {
    async fn execute(&self, params: GetAllItemsParams) -> Result<Vec<Item>, ItemError> {
        let query = ItemQuery::from_raw(
            params.offset,
            params.limit,
            params.min_price,
            params.max_price,
            params.show_deleted,
        )?;
        self.logger.info(&format!("Listing items: {:?}", query));

        let items = query.select(self.repository.get_all().await?);

        self.logger
            .info(&format!("Retrieved {} items", items.len()));
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{QueryError, RepositoryError};
    use crate::domain::item::model::{ItemChange, NewItem};
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

    fn stock() -> Vec<Item> {
        vec![
            Item { id: 1, name: "pen".to_string(), price: 10.0, deleted: false },
            Item { id: 2, name: "ink".to_string(), price: 3.0, deleted: true },
            Item { id: 3, name: "pad".to_string(), price: 25.0, deleted: false },
            Item { id: 4, name: "clip".to_string(), price: 1.0, deleted: false },
        ]
    }

    fn use_case_over_stock() -> GetAllItemsUseCaseImpl {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(stock()));
        GetAllItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        }
    }

    fn ids(items: &[Item]) -> Vec<u64> {
        items.iter().map(|i| i.id).collect()
    }

    #[tokio::test]
    async fn should_list_active_items_with_defaults() {
        let result = use_case_over_stock()
            .execute(GetAllItemsParams::default())
            .await;

        assert_eq!(ids(&result.unwrap()), vec![1, 3, 4]);
    }

    #[tokio::test]
    async fn should_include_deleted_items_when_requested() {
        let result = use_case_over_stock()
            .execute(GetAllItemsParams {
                show_deleted: true,
                ..Default::default()
            })
            .await;

        assert_eq!(ids(&result.unwrap()), vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn should_apply_price_filter_and_window() {
        let result = use_case_over_stock()
            .execute(GetAllItemsParams {
                offset: Some(1),
                limit: Some(1),
                min_price: Some(5.0),
                ..Default::default()
            })
            .await;

        assert_eq!(ids(&result.unwrap()), vec![3]);
    }

    #[tokio::test]
    async fn should_reject_zero_limit_without_touching_repository() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_get_all().never();

        let use_case = GetAllItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllItemsParams {
                limit: Some(0),
                ..Default::default()
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ItemError::InvalidQuery(QueryError::LimitNotPositive)
        ));
    }

    #[tokio::test]
    async fn should_return_empty_when_store_is_empty() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));

        let use_case = GetAllItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetAllItemsParams::default()).await;

        assert!(result.unwrap().is_empty());
    }
}
