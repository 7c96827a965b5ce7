use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::query::CartQuery;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_all::{GetAllCartsParams, GetAllCartsUseCase};
use crate::domain::logger::Logger;

pub struct GetAllCartsUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCartsUseCase for GetAllCartsUseCaseImpl {
    async fn execute(&self, params: GetAllCartsParams) -> Result<Vec<Cart>, CartError> {
        let query = CartQuery::from_raw(
            params.offset,
            params.limit,
            params.min_price,
            params.max_price,
            params.min_quantity,
            params.max_quantity,
        )?;
        self.logger.info(&format!("Listing carts: {:?}", query));

        let carts = query.select(self.repository.get_all().await?);

        self.logger
            .info(&format!("Retrieved {} carts", carts.len()));
        Ok(carts)
    }
}
