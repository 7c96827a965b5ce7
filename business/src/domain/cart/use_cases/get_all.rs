use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

/// Raw listing values as received; validated by the use case.
#[derive(Debug, Default)]
pub struct GetAllCartsParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_quantity: Option<i64>,
    pub max_quantity: Option<i64>,
}

#[async_trait]
pub trait GetAllCartsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllCartsParams) -> Result<Vec<Cart>, CartError>;
}
