use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartItem};

#[derive(Debug, Clone, Object)]
pub struct CartCreatedResponse {
    /// Identifier of the new cart
    pub id: u64,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Identifier of the referenced item
    pub id: u64,
    /// Item name at the time it was first added
    pub name: String,
    /// Units of this item in the cart
    pub quantity: u64,
    /// Whether the item was live when last added
    pub available: bool,
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Sequential cart identifier
    pub id: u64,
    /// Lines in the order they were first added
    pub items: Vec<CartItemResponse>,
    /// Running total of every added unit
    pub price: f64,
}

impl From<CartItem> for CartItemResponse {
    fn from(line: CartItem) -> Self {
        Self {
            id: line.id,
            name: line.name,
            quantity: line.quantity,
            available: line.available,
        }
    }
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id,
            items: cart.items.into_iter().map(|l| l.into()).collect(),
            price: cart.price,
        }
    }
}
