use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub struct AddItemToCartParams {
    pub cart_id: u64,
    pub item_id: u64,
}

#[async_trait]
pub trait AddItemToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddItemToCartParams) -> Result<Cart, CartError>;
}
