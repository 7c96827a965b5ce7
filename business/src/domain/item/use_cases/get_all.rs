use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

/// Raw listing values as received; validated by the use case.
#[derive(Debug, Default)]
pub struct GetAllItemsParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub show_deleted: bool,
}

#[async_trait]
pub trait GetAllItemsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllItemsParams) -> Result<Vec<Item>, ItemError>;
}
